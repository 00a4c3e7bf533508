//! Roster ingestion: reads the inbound (name, CPF) table and screens every
//! identifier before anything touches the network.
//!
//! The identifier column is read as text: spreadsheet round-trips love to
//! strip leading zeros, and a CPF that lost its zeros is a different number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use revisa_core::cpf::{self, Screened};

use crate::error::BatchError;
use crate::types::{RejectedEntry, RosterEntry};

/// Header names accepted for the person-name column.
const NAME_HEADERS: [&str; 2] = ["Nome", "nome"];
/// Header names accepted for the identifier column.
const CPF_HEADERS: [&str; 2] = ["CPF", "cpf"];

/// A screened roster: entries ready to query, rejections ready to report.
/// Both sides preserve roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
    pub rejected: Vec<RejectedEntry>,
}

/// Reads and screens the roster at `path`.
///
/// # Errors
///
/// - [`BatchError::Io`] — the file cannot be opened.
/// - [`BatchError::Csv`] — the table is not parseable CSV.
/// - [`BatchError::MissingColumns`] — neither accepted header pair is
///   present.
pub fn read_roster(path: &Path) -> Result<Roster, BatchError> {
    let file = File::open(path)?;
    read_roster_from(file)
}

/// Reads and screens a roster from any reader. See [`read_roster`].
///
/// # Errors
///
/// Same as [`read_roster`], minus the file-open case.
pub fn read_roster_from<R: Read>(reader: R) -> Result<Roster, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let Some((name_idx, cpf_idx)) = find_columns(&headers) else {
        return Err(BatchError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    };

    let mut entries = Vec::new();
    let mut rejected = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").to_string();
        let raw = record.get(cpf_idx).unwrap_or("").to_string();

        match cpf::screen(&raw) {
            Screened::Valid { canonical } => entries.push(RosterEntry {
                name,
                document: canonical,
            }),
            Screened::Rejected { canonical, reason } => rejected.push(RejectedEntry {
                name,
                raw,
                canonical,
                reason,
            }),
        }
    }

    Ok(Roster { entries, rejected })
}

/// Positions of the name and identifier columns, or `None` when either is
/// missing. Only the two exact casings are accepted for each.
fn find_columns(headers: &csv::StringRecord) -> Option<(usize, usize)> {
    let name_idx = headers.iter().position(|h| NAME_HEADERS.contains(&h))?;
    let cpf_idx = headers.iter().position(|h| CPF_HEADERS.contains(&h))?;
    Some((name_idx, cpf_idx))
}
