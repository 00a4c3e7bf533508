//! `run` command: ingest a roster, query every valid CPF, export results.
//!
//! Fatal problems (unreadable file, missing columns) abort before any
//! querying; per-identifier lookup failures are reported after the run and
//! never stop it.

use std::path::{Path, PathBuf};

use anyhow::Context;

use revisa_batch::{read_roster, reshape_found, run_batch};
use revisa_batch::export::{write_found_csv, write_not_found_csv};
use revisa_core::AppConfig;
use revisa_esaj::{EsajClient, RequestPacer};

pub(crate) async fn run_roster(
    config: &AppConfig,
    input: &Path,
    delay_override: Option<u64>,
    out_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let roster = read_roster(input)
        .with_context(|| format!("falha ao processar {}", input.display()))?;

    if !roster.rejected.is_empty() {
        println!("CPFs inválidos ({}):", roster.rejected.len());
        for rejected in &roster.rejected {
            println!(
                "  {} — {} ({})",
                rejected.raw, rejected.name, rejected.reason
            );
        }
    }

    if roster.entries.is_empty() {
        anyhow::bail!("nenhum CPF válido em {}", input.display());
    }
    println!("{} CPFs válidos para consulta", roster.entries.len());

    let client = EsajClient::new(config)?;
    let delay = delay_override.unwrap_or(config.inter_request_delay_secs);
    let pacer = RequestPacer::new(delay);
    tracing::info!(
        input = %input.display(),
        total = roster.entries.len(),
        delay_secs = pacer.delay().as_secs(),
        "starting batch"
    );

    let outcome = run_batch(&client, &pacer, roster.entries, roster.rejected, |p| {
        println!("Processando {}/{}: {} ({})", p.index, p.total, p.name, p.document);
    })
    .await;

    let summary = outcome.summary();
    println!();
    println!("Encontrados:        {}", summary.found);
    println!("Não encontrados:    {}", summary.not_found);
    println!("CPFs inválidos:     {}", summary.rejected);
    println!("Total de processos: {}", summary.total_filings);

    if !outcome.failures.is_empty() {
        println!(
            "Consultas com falha (exportadas como não encontrados): {}",
            outcome.failures.len()
        );
        for failure in &outcome.failures {
            eprintln!("  {} — {}: {}", failure.document, failure.name, failure.error);
        }
    }

    let dir = out_dir.unwrap_or_else(|| config.export_dir.clone());

    if !outcome.found.is_empty() {
        let rows = reshape_found(&outcome.found);
        let path = write_found_csv(&dir, &rows).context("falha ao exportar encontrados")?;
        println!("Exportado: {}", path.display());
    }
    if !outcome.not_found.is_empty() {
        let path = write_not_found_csv(&dir, &outcome.not_found)
            .context("falha ao exportar não encontrados")?;
        println!("Exportado: {}", path.display());
    }

    Ok(())
}
