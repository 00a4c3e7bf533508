use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default user agent, mirroring a current desktop Chrome. The portal
/// serves an interstitial to clients that do not look like a browser.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var does not parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process. Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var does not parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// Every key has a default, so this never fails on absence; only on values
/// that fail to parse. Decoupled from the real environment so tests can use
/// a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("REVISA_LOG_LEVEL", "info");
    let esaj_base_url = or_default(
        "REVISA_ESAJ_BASE_URL",
        "https://esaj.tjsp.jus.br/cpopg/search.do",
    );
    let esaj_referer = or_default(
        "REVISA_ESAJ_REFERER",
        "https://esaj.tjsp.jus.br/cpopg/abrirConsultaDeRequisitorios.do",
    );
    let esaj_origin = or_default("REVISA_ESAJ_ORIGIN", "https://esaj.tjsp.jus.br");
    let user_agent = or_default("REVISA_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("REVISA_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_request_delay_secs = parse_u64("REVISA_INTER_REQUEST_DELAY_SECS", "2")?;
    let export_dir = PathBuf::from(or_default("REVISA_EXPORT_DIR", "."));

    Ok(AppConfig {
        log_level,
        esaj_base_url,
        esaj_referer,
        esaj_origin,
        user_agent,
        request_timeout_secs,
        inter_request_delay_secs,
        export_dir,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.esaj_base_url, "https://esaj.tjsp.jus.br/cpopg/search.do");
        assert_eq!(
            cfg.esaj_referer,
            "https://esaj.tjsp.jus.br/cpopg/abrirConsultaDeRequisitorios.do"
        );
        assert_eq!(cfg.esaj_origin, "https://esaj.tjsp.jus.br");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.inter_request_delay_secs, 2);
        assert_eq!(cfg.export_dir, PathBuf::from("."));
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("REVISA_ESAJ_BASE_URL", "http://localhost:9999/search.do");
        map.insert("REVISA_REQUEST_TIMEOUT_SECS", "5");
        map.insert("REVISA_INTER_REQUEST_DELAY_SECS", "0");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should load");
        assert_eq!(cfg.esaj_base_url, "http://localhost:9999/search.do");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.inter_request_delay_secs, 0);
    }

    #[test]
    fn build_app_config_fails_on_non_numeric_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("REVISA_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVISA_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(REVISA_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_on_non_numeric_delay() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("REVISA_INTER_REQUEST_DELAY_SECS", "two");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REVISA_INTER_REQUEST_DELAY_SECS"),
            "expected InvalidEnvVar(REVISA_INTER_REQUEST_DELAY_SECS), got: {result:?}"
        );
    }
}
