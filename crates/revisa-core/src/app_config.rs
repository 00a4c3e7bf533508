use std::path::PathBuf;

/// Application configuration, resolved once at startup and passed by
/// reference into the client, pacer, and batch runner. There is no global
/// config state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Search endpoint queried once per identifier.
    pub esaj_base_url: String,
    /// Referer the portal expects from the requisition-search page.
    pub esaj_referer: String,
    pub esaj_origin: String,
    /// Browser user agent string sent with every request.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Seconds between consecutive lookups; clamped by the pacer.
    pub inter_request_delay_secs: u64,
    /// Directory the export CSVs are written to.
    pub export_dir: PathBuf,
}
