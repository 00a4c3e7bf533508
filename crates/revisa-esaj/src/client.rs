use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, ORIGIN, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{Client, StatusCode, Url};

use revisa_core::AppConfig;

use crate::error::EsajError;
use crate::parse;
use crate::types::Lookup;

/// Cap on the response-body excerpt carried inside an
/// [`EsajError::UnexpectedStatus`]; bodies shorter than this pass through
/// unchanged.
const BODY_SNIPPET_MAX: usize = 500;

/// HTTP client for the e-SAJ party-document search.
///
/// Holds no per-call state: each [`lookup_document`](Self::lookup_document)
/// issues exactly one GET and resolves to exactly one outcome. There is no
/// retry here; if a retry policy ever exists it belongs to the batch
/// runner, which owns the request cadence.
pub struct EsajClient {
    client: Client,
    base_url: Url,
}

impl EsajClient {
    /// Creates a client pointed at the configured production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EsajError::Build`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EsajError::Config`] if the configured
    /// endpoint or header values are malformed.
    pub fn new(config: &AppConfig) -> Result<Self, EsajError> {
        Self::with_base_url(config, &config.esaj_base_url)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`EsajClient::new`].
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, EsajError> {
        let headers = browser_headers(&config.esaj_referer, &config.esaj_origin)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(EsajError::Build)?;

        let base_url = Url::parse(base_url).map_err(|e| EsajError::Config {
            field: "esaj_base_url".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up one canonical identifier. `display_name` is used for log
    /// context only and has no effect on the outcome.
    ///
    /// On 200, the pre-check decides the branch: no filing markers means a
    /// clean miss; markers present means `found = true` even when per-block
    /// validation leaves zero extractable filings (that is malformed markup,
    /// not "not found").
    ///
    /// # Errors
    ///
    /// - [`EsajError::UnexpectedStatus`] — any non-200 status, with a
    ///   truncated body excerpt.
    /// - [`EsajError::Timeout`] — the bounded request timeout elapsed.
    /// - [`EsajError::Network`] — any other transport-level fault.
    /// - [`EsajError::Unexpected`] — body decoding or other processing
    ///   faults.
    pub async fn lookup_document(
        &self,
        document: &str,
        display_name: &str,
    ) -> Result<Lookup, EsajError> {
        let url = self.search_url(document);
        tracing::info!(document, name = display_name, url = %url, "dispatching e-SAJ lookup");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(EsajError::from_transport)?;
        let status = response.status();

        let body = response.text().await.map_err(EsajError::from_transport)?;
        tracing::info!(
            document,
            status = status.as_u16(),
            bytes = body.len(),
            "e-SAJ response received"
        );

        if status != StatusCode::OK {
            tracing::warn!(document, status = status.as_u16(), "e-SAJ lookup failed");
            return Err(EsajError::UnexpectedStatus {
                status: status.as_u16(),
                body_snippet: body_snippet(&body),
            });
        }

        if !parse::has_any_filings(&body) {
            tracing::info!(document, "no filings for document");
            return Ok(Lookup::miss());
        }

        let subject_name = parse::extract_subject_name(&body);
        let filings = parse::extract_filings(&body);
        tracing::info!(
            document,
            subject = %subject_name,
            filings = filings.len(),
            "filings found for document"
        );

        Ok(Lookup {
            found: true,
            subject_name,
            filings,
        })
    }

    /// Builds the search URL with percent-encoded query parameters via
    /// [`Url::query_pairs_mut`]. The parameter set is fixed apart from the
    /// identifier: it is the same request the portal's requisition-search
    /// form submits.
    fn search_url(&self, document: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("conversationId", "");
            pairs.append_pair("cbPesquisa", "DOCPARTE");
            pairs.append_pair("dadosConsulta.valorConsulta", document);
            pairs.append_pair("consultaDeRequisitorios", "true");
        }
        url
    }
}

/// Static header bundle mimicking a desktop browser on the portal's own
/// search page. Accept-Encoding is deliberately absent: reqwest negotiates
/// and transparently decompresses gzip/deflate/brotli on its own, and
/// setting the header manually would leave the body compressed.
fn browser_headers(referer: &str, origin: &str) -> Result<HeaderMap, EsajError> {
    let value = |field: &str, raw: &str| -> Result<HeaderValue, EsajError> {
        HeaderValue::from_str(raw).map_err(|e| EsajError::Config {
            field: field.to_string(),
            reason: e.to_string(),
        })
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(REFERER, value("esaj_referer", referer)?);
    headers.insert(ORIGIN, value("esaj_origin", origin)?);
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    Ok(headers)
}

/// First [`BODY_SNIPPET_MAX`] characters of `body`, unchanged if shorter.
fn body_snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            esaj_base_url: "https://esaj.tjsp.jus.br/cpopg/search.do".to_string(),
            esaj_referer: "https://esaj.tjsp.jus.br/cpopg/abrirConsultaDeRequisitorios.do"
                .to_string(),
            esaj_origin: "https://esaj.tjsp.jus.br".to_string(),
            user_agent: "revisa-test/0.1".to_string(),
            request_timeout_secs: 5,
            inter_request_delay_secs: 0,
            export_dir: std::path::PathBuf::from("."),
        }
    }

    #[test]
    fn search_url_carries_fixed_parameter_set() {
        let client = EsajClient::new(&test_config()).expect("client should build");
        let url = client.search_url("11144477735");
        assert_eq!(
            url.as_str(),
            "https://esaj.tjsp.jus.br/cpopg/search.do?conversationId=&cbPesquisa=DOCPARTE&dadosConsulta.valorConsulta=11144477735&consultaDeRequisitorios=true"
        );
    }

    #[test]
    fn with_base_url_rejects_invalid_endpoint() {
        let result = EsajClient::with_base_url(&test_config(), "not-a-url");
        assert!(
            matches!(result, Err(EsajError::Config { ref field, .. }) if field == "esaj_base_url"),
            "expected Config(esaj_base_url) error"
        );
    }

    #[test]
    fn body_snippet_caps_at_500_chars() {
        let long = "x".repeat(1_000);
        assert_eq!(body_snippet(&long).len(), 500);
        assert_eq!(body_snippet("short"), "short");
    }
}
