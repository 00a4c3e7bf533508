use serde::Serialize;

/// A single judicial filing extracted from a search response.
///
/// All three fields are non-empty by construction: the parser drops any
/// block that is missing one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filing {
    /// Unified case number as linked by the portal,
    /// e.g. `0123456-78.2024.8.26.0500`.
    pub number: String,
    /// Case category, e.g. `Precatório`.
    pub category: String,
    /// Distribution date as displayed, e.g. `01/02/2024`.
    pub date: String,
}

/// Outcome of a lookup that reached the portal and got a 200 back.
///
/// `found == true` with an empty `filings` list is a real state: the result
/// markers were present but every filing block failed field extraction.
/// That is malformed markup, not "no filings".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub found: bool,
    /// Party name as displayed by the portal; empty when the name block is
    /// absent (a valid "unknown name" signal, not an error).
    pub subject_name: String,
    pub filings: Vec<Filing>,
}

impl Lookup {
    /// The canonical "no filings" outcome.
    #[must_use]
    pub(crate) fn miss() -> Self {
        Self {
            found: false,
            subject_name: String::new(),
            filings: Vec::new(),
        }
    }
}
