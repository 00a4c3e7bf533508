//! e-SAJ public search client for bulk CPF verification.
//!
//! Issues one GET per identifier against the portal's party-document search,
//! mimicking a browser header set, and extracts filing records from the
//! returned HTML. Strictly sequential by design: callers pace consecutive
//! lookups with [`RequestPacer`].

pub mod client;
pub mod error;
pub mod parse;
pub mod rate_limit;
pub mod types;

pub use client::EsajClient;
pub use error::EsajError;
pub use rate_limit::RequestPacer;
pub use types::{Filing, Lookup};
