//! Integration tests for the sequential batch runner against a wiremock
//! portal. Delay is zero throughout so the suites stay fast.

use std::path::PathBuf;

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use revisa_batch::{run_batch, RosterEntry};
use revisa_core::AppConfig;
use revisa_esaj::{EsajClient, RequestPacer};

fn test_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        esaj_base_url: "https://esaj.tjsp.jus.br/cpopg/search.do".to_string(),
        esaj_referer: "https://esaj.tjsp.jus.br/cpopg/abrirConsultaDeRequisitorios.do".to_string(),
        esaj_origin: "https://esaj.tjsp.jus.br".to_string(),
        user_agent: "revisa-test/0.1".to_string(),
        request_timeout_secs: 5,
        inter_request_delay_secs: 0,
        export_dir: PathBuf::from("."),
    }
}

fn entry(name: &str, document: &str) -> RosterEntry {
    RosterEntry {
        name: name.to_string(),
        document: document.to_string(),
    }
}

fn results_page_html() -> &'static str {
    r#"<html><body>
<h2>Processos encontrados</h2>
<div class="unj-base-alt nomeParte">
  Maria Aparecida de Souza
</div>
<ul>
<li>
  <div id="divProcesso0001234" class="home">
    <a class="linkProcesso" href="/cpopg/show.do"> 0001234-56.2024.8.26.0500 </a>
    <div class="classeProcesso">Precatório</div>
    <div class="dataLocalDistribuicaoProcesso">01/02/2024 - Foro Central</div>
  </div>
</li>
</ul>
</body></html>"#
}

fn empty_page_html() -> &'static str {
    "<html><body>Não existem informações disponíveis para os parâmetros informados.</body></html>"
}

#[tokio::test]
async fn batch_emits_ordered_progress_and_partitions_every_entry() {
    let server = MockServer::start().await;

    // First identifier has filings, the other two do not.
    Mock::given(method("GET"))
        .and(query_param("dadosConsulta.valorConsulta", "11144477735"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page_html()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_page_html()))
        .mount(&server)
        .await;

    let client = EsajClient::with_base_url(&test_config(), &server.uri()).expect("client");
    let pacer = RequestPacer::new(0);
    let entries = vec![
        entry("Maria", "11144477735"),
        entry("João", "00123456797"),
        entry("Ana", "01144455591"),
    ];

    let mut progress_log = Vec::new();
    let outcome = run_batch(&client, &pacer, entries, Vec::new(), |p| {
        progress_log.push((p.index, p.total, p.name.to_string()));
    })
    .await;

    assert_eq!(
        progress_log,
        vec![
            (1, 3, "Maria".to_string()),
            (2, 3, "João".to_string()),
            (3, 3, "Ana".to_string()),
        ]
    );

    assert_eq!(outcome.found.len(), 1);
    assert_eq!(outcome.not_found.len(), 2);
    assert!(outcome.failures.is_empty());

    assert_eq!(outcome.found[0].document, "11144477735");
    assert_eq!(outcome.found[0].subject_name, "Maria Aparecida de Souza");
    assert_eq!(outcome.found[0].filings.len(), 1);

    // Not-found bucket preserves input order.
    assert_eq!(outcome.not_found[0].name, "João");
    assert_eq!(outcome.not_found[1].name, "Ana");

    let summary = outcome.summary();
    assert_eq!(summary.queried, 3);
    assert_eq!(summary.total_filings, 1);
}

#[tokio::test]
async fn failed_lookup_is_folded_into_not_found_with_a_diagnostic_note() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("dadosConsulta.valorConsulta", "11144477735"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_page_html()))
        .mount(&server)
        .await;

    let client = EsajClient::with_base_url(&test_config(), &server.uri()).expect("client");
    let pacer = RequestPacer::new(0);
    let entries = vec![entry("Maria", "11144477735"), entry("João", "00123456797")];

    let outcome = run_batch(&client, &pacer, entries, Vec::new(), |_| {}).await;

    // The failure never aborts the batch and never grows a third bucket.
    assert!(outcome.found.is_empty());
    assert_eq!(outcome.not_found.len(), 2);
    assert_eq!(outcome.not_found[0].document, "11144477735");

    // But the diagnostics side channel keeps the distinction.
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].document, "11144477735");
    assert!(
        outcome.failures[0].error.contains("500"),
        "note should carry the status: {}",
        outcome.failures[0].error
    );
}

#[tokio::test]
async fn rejected_entries_pass_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(empty_page_html()))
        .mount(&server)
        .await;

    let client = EsajClient::with_base_url(&test_config(), &server.uri()).expect("client");
    let pacer = RequestPacer::new(0);

    let roster = revisa_batch::read_roster_from(
        "Nome,CPF\nJoão Silva,111.444.777-35\nX,000000000\n".as_bytes(),
    )
    .expect("roster should parse");

    let mut queried = Vec::new();
    let outcome = run_batch(&client, &pacer, roster.entries, roster.rejected, |p| {
        queried.push(p.document.to_string());
    })
    .await;

    // Only the checksum-valid row is ever queried; the rejected row rides
    // along unchanged in canonical form.
    assert_eq!(queried, vec!["11144477735".to_string()]);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].canonical, "00000000000");
    assert!(outcome.found.is_empty());
    assert_eq!(outcome.not_found.len(), 1);
}

#[tokio::test]
async fn empty_batch_completes_without_progress_or_requests() {
    let server = MockServer::start().await;
    let client = EsajClient::with_base_url(&test_config(), &server.uri()).expect("client");
    let pacer = RequestPacer::new(0);

    let mut progress_count = 0usize;
    let outcome = run_batch(&client, &pacer, Vec::new(), Vec::new(), |_| {
        progress_count += 1;
    })
    .await;

    assert_eq!(progress_count, 0);
    assert_eq!(outcome.summary().queried, 0);
}
