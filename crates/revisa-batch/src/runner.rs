//! Sequential batch runner.
//!
//! One lookup in flight at any time, one progress event per entry, one
//! pacer pause between entries. Per-identifier failures are folded into the
//! not-found bucket (the export format has no error column), with the
//! detail preserved on the outcome's diagnostics list.

use chrono::Local;
use revisa_esaj::{EsajClient, RequestPacer};

use crate::types::{
    BatchOutcome, FoundEntry, LookupFailureNote, NotFoundEntry, Progress, RejectedEntry,
    RosterEntry,
};

/// Timestamp format used in the export tables.
const QUERIED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Runs the batch over `entries` in order, pacing between consecutive
/// lookups (never after the last). `rejected` is carried through to the
/// outcome unchanged.
///
/// The progress sink fires once per entry, before its lookup, with indices
/// 1..=total in input order. Both result buckets preserve the relative
/// input order of their members.
pub async fn run_batch<F>(
    client: &EsajClient,
    pacer: &RequestPacer,
    entries: Vec<RosterEntry>,
    rejected: Vec<RejectedEntry>,
    mut on_progress: F,
) -> BatchOutcome
where
    F: FnMut(Progress<'_>),
{
    let total = entries.len();
    let mut found = Vec::new();
    let mut not_found = Vec::new();
    let mut failures = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let index = index + 1;
        on_progress(Progress {
            index,
            total,
            name: &entry.name,
            document: &entry.document,
        });

        let outcome = client.lookup_document(&entry.document, &entry.name).await;
        let queried_at = Local::now().format(QUERIED_AT_FORMAT).to_string();

        match outcome {
            Ok(lookup) if lookup.found => {
                found.push(FoundEntry {
                    document: entry.document,
                    name: entry.name,
                    subject_name: lookup.subject_name,
                    filings: lookup.filings,
                    queried_at,
                });
            }
            Ok(_) => {
                not_found.push(NotFoundEntry {
                    document: entry.document,
                    name: entry.name,
                    queried_at,
                });
            }
            Err(err) => {
                // The export has no error bucket; a failed lookup counts as
                // not found there, with the detail kept on the side.
                tracing::warn!(
                    document = %entry.document,
                    error = %err,
                    "lookup failed; exporting as not found"
                );
                failures.push(LookupFailureNote {
                    document: entry.document.clone(),
                    name: entry.name.clone(),
                    error: err.to_string(),
                });
                not_found.push(NotFoundEntry {
                    document: entry.document,
                    name: entry.name,
                    queried_at,
                });
            }
        }

        if index < total {
            pacer.pause().await;
        }
    }

    BatchOutcome {
        found,
        not_found,
        rejected,
        failures,
    }
}
