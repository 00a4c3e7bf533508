//! `screen` command: validate a roster without touching the network.

use std::path::Path;

use anyhow::Context;

use revisa_batch::read_roster;

pub(crate) fn screen_roster(input: &Path) -> anyhow::Result<()> {
    let roster = read_roster(input)
        .with_context(|| format!("falha ao processar {}", input.display()))?;

    println!("CPFs válidos ({}):", roster.entries.len());
    for entry in &roster.entries {
        println!("  {} — {}", entry.document, entry.name);
    }

    if !roster.rejected.is_empty() {
        println!("CPFs inválidos ({}):", roster.rejected.len());
        for rejected in &roster.rejected {
            println!(
                "  {} — {} ({})",
                rejected.raw, rejected.name, rejected.reason
            );
        }
    }

    Ok(())
}
