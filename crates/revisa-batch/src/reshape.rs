//! Flattens found entries into the one-row-per-filing export shape.

use serde::Serialize;

use crate::types::FoundEntry;

/// One export row. `Sequencia_Processo` numbers an entry's filings from 1;
/// 0 marks a found entry whose blocks yielded no extractable filings, with
/// the filing columns left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "CPF")]
    pub document: String,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Nome_Extraido")]
    pub subject_name: String,
    #[serde(rename = "Sequencia_Processo")]
    pub sequence: usize,
    #[serde(rename = "Numero_Processo")]
    pub filing_number: String,
    #[serde(rename = "Classe_Processo")]
    pub filing_category: String,
    #[serde(rename = "Data_Processo")]
    pub filing_date: String,
    #[serde(rename = "Data_Consulta")]
    pub queried_at: String,
}

/// Projects found entries into export rows: one per filing in filing order,
/// or a single sequence-0 placeholder for an entry with none. Row count is
/// the sum of `max(1, filing_count)` over the entries.
#[must_use]
pub fn reshape_found(found: &[FoundEntry]) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for entry in found {
        if entry.filings.is_empty() {
            rows.push(ExportRow {
                document: entry.document.clone(),
                name: entry.name.clone(),
                subject_name: entry.subject_name.clone(),
                sequence: 0,
                filing_number: String::new(),
                filing_category: String::new(),
                filing_date: String::new(),
                queried_at: entry.queried_at.clone(),
            });
            continue;
        }

        for (position, filing) in entry.filings.iter().enumerate() {
            rows.push(ExportRow {
                document: entry.document.clone(),
                name: entry.name.clone(),
                subject_name: entry.subject_name.clone(),
                sequence: position + 1,
                filing_number: filing.number.clone(),
                filing_category: filing.category.clone(),
                filing_date: filing.date.clone(),
                queried_at: entry.queried_at.clone(),
            });
        }
    }

    rows
}
