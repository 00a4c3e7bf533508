use revisa_core::cpf::RejectReason;
use revisa_esaj::Filing;
use serde::Serialize;

/// A roster row that passed screening. `document` is the canonical 11-digit
/// form; `name` is whatever the roster carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub document: String,
}

/// A roster row rejected during screening; passed through the batch
/// untouched so the final report can list it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub name: String,
    /// Identifier exactly as it appeared in the roster.
    pub raw: String,
    /// Normalized form, kept so reports stay comparable across formatting.
    pub canonical: String,
    pub reason: RejectReason,
}

/// An identifier the portal reported filings for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundEntry {
    pub document: String,
    pub name: String,
    /// Party name extracted from the response; may be empty.
    pub subject_name: String,
    pub filings: Vec<Filing>,
    /// Local time of the lookup, `dd/mm/yyyy HH:MM:SS`.
    pub queried_at: String,
}

/// An identifier with no filings, or whose lookup failed. The distinction
/// lives in [`BatchOutcome::failures`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundEntry {
    #[serde(rename = "CPF")]
    pub document: String,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Data_Consulta")]
    pub queried_at: String,
}

/// Diagnostics side channel: one note per lookup that failed rather than
/// returning a clean empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailureNote {
    pub document: String,
    pub name: String,
    pub error: String,
}

/// Everything a finished batch produced. Built incrementally by the runner,
/// handed to the caller by value, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub found: Vec<FoundEntry>,
    pub not_found: Vec<NotFoundEntry>,
    /// Screening rejections, passed through from the roster unchanged.
    pub rejected: Vec<RejectedEntry>,
    pub failures: Vec<LookupFailureNote>,
}

impl BatchOutcome {
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            found: self.found.len(),
            not_found: self.not_found.len(),
            rejected: self.rejected.len(),
            queried: self.found.len() + self.not_found.len(),
            total_filings: self.found.iter().map(|e| e.filings.len()).sum(),
        }
    }
}

/// Tallies reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub not_found: usize,
    pub rejected: usize,
    pub queried: usize,
    pub total_filings: usize,
}

/// One progress notification per roster entry, emitted before its lookup.
/// `index` runs 1..=total in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    pub index: usize,
    pub total: usize,
    pub name: &'a str,
    pub document: &'a str,
}
