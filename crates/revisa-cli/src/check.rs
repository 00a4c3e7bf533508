//! `check` command: screen and look up a single CPF.

use revisa_core::cpf::{self, Screened};
use revisa_core::AppConfig;
use revisa_esaj::EsajClient;

pub(crate) async fn check_document(config: &AppConfig, raw: &str) -> anyhow::Result<()> {
    let canonical = match cpf::screen(raw) {
        Screened::Rejected { canonical, reason } => {
            anyhow::bail!("CPF inválido {canonical}: {reason}");
        }
        Screened::Valid { canonical } => canonical,
    };

    let client = EsajClient::new(config)?;
    let lookup = client.lookup_document(&canonical, raw).await?;

    if !lookup.found {
        println!("CPF {canonical}: nenhum processo encontrado");
        return Ok(());
    }

    let subject = if lookup.subject_name.is_empty() {
        "nome não identificado"
    } else {
        lookup.subject_name.as_str()
    };
    println!(
        "CPF {canonical} ({subject}): {} processo(s)",
        lookup.filings.len()
    );
    for (position, filing) in lookup.filings.iter().enumerate() {
        println!(
            "  {}. {} {} {}",
            position + 1,
            filing.date,
            filing.number,
            filing.category
        );
    }

    Ok(())
}
