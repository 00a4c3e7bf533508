//! HTML extraction for e-SAJ search responses.
//!
//! The portal renders results as server-side HTML; there is no JSON API.
//! Every selector the extractors depend on lives in the constants below, so
//! a markup change on the portal side touches exactly one place. A filing
//! block that does not yield all three fields is skipped, never an error.

use regex::Regex;

use crate::types::Filing;

/// Phrase shown in the result header when at least one filing matched.
const FOUND_PHRASE: &str = "Processos encontrados";
/// Anchor class on each case-number link.
const FILING_LINK_CLASS: &str = "linkProcesso";
/// `id` prefix of the division wrapping one filing block.
const FILING_BLOCK_ID_PREFIX: &str = "divProcesso";
/// Division class carrying the case category.
const CATEGORY_CLASS: &str = "classeProcesso";
/// Division class carrying "date - venue" of distribution.
const DATE_CLASS: &str = "dataLocalDistribuicaoProcesso";
/// Division class carrying the matched party's display name.
const SUBJECT_NAME_CLASS: &str = "unj-base-alt nomeParte";

/// Cheap pre-check: does the response carry any filing at all?
///
/// True when either the result-header phrase or the filing-link marker
/// appears anywhere in the text. Lets callers skip full extraction on the
/// common empty response.
#[must_use]
pub fn has_any_filings(html: &str) -> bool {
    html.contains(FOUND_PHRASE) || html.contains(FILING_LINK_CLASS)
}

/// Extracts the matched party's display name, or an empty string when the
/// name block is absent. Absence is a valid "unknown name" signal.
#[must_use]
pub fn extract_subject_name(html: &str) -> String {
    let re = Regex::new(&format!(
        r#"<div class="{SUBJECT_NAME_CLASS}">\s*([^<]+)"#
    ))
    .expect("valid subject name regex");
    first_capture(&re, html)
}

/// Extracts every well-formed filing block, in document order.
///
/// A block contributes a [`Filing`] only when case number, category, and
/// distribution date are all non-empty after trimming; partial blocks are
/// dropped silently so one malformed entry never poisons the rest.
#[must_use]
pub fn extract_filings(html: &str) -> Vec<Filing> {
    let block_re = Regex::new(&format!(
        r#"(?s)<li>\s*<div id="{FILING_BLOCK_ID_PREFIX}[^"]*"[^>]*>.*?</div>\s*</li>"#
    ))
    .expect("valid filing block regex");
    let number_re = Regex::new(&format!(
        r#"class="{FILING_LINK_CLASS}"[^>]*>\s*([^<\s]+)"#
    ))
    .expect("valid case number regex");
    let category_re = Regex::new(&format!(r#"<div class="{CATEGORY_CLASS}">([^<]+)</div>"#))
        .expect("valid category regex");
    let date_re = Regex::new(&format!(r#"<div class="{DATE_CLASS}">([^<]+?)\s*-"#))
        .expect("valid distribution date regex");

    block_re
        .find_iter(html)
        .filter_map(|block| {
            let block = block.as_str();
            let number = first_capture(&number_re, block);
            let category = first_capture(&category_re, block);
            let date = first_capture(&date_re, block);
            (!number.is_empty() && !category.is_empty() && !date.is_empty()).then(|| Filing {
                number,
                category,
                date,
            })
        })
        .collect()
}

/// First capture group of `re` in `haystack`, trimmed; empty when absent.
fn first_capture(re: &Regex, haystack: &str) -> String {
    re.captures(haystack)
        .and_then(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .unwrap_or_default()
}
