//! Batch orchestration for bulk CPF verification.
//!
//! Reads a (name, CPF) roster, screens identifiers through
//! `revisa_core::cpf`, queries the e-SAJ portal one identifier at a time,
//! and reshapes the aggregate into the two export tables.

pub mod error;
pub mod export;
pub mod reshape;
pub mod roster;
pub mod runner;
pub mod types;

pub use error::BatchError;
pub use reshape::{reshape_found, ExportRow};
pub use roster::{read_roster, read_roster_from, Roster};
pub use runner::run_batch;
pub use types::{
    BatchOutcome, BatchSummary, FoundEntry, LookupFailureNote, NotFoundEntry, Progress,
    RejectedEntry, RosterEntry,
};
