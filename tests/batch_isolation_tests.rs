//! Batch-level behavior: sequential operator isolation and error aggregation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bicho_results_lib::application::batch_scraper::BatchScrapeEngine;
use bicho_results_lib::infrastructure::config::{OperatorConfig, OperatorRegistry, ScraperConfig};
use bicho_results_lib::infrastructure::http_client::PageFetcher;
use bicho_results_lib::infrastructure::scrape_error::{ScrapeError, ScrapeResult};

/// Serves canned pages per operator code; an Err entry simulates an HTTP
/// failure from the aggregator.
struct StubFetcher {
    responses: HashMap<String, Result<String, u16>>,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_results_page(
        &self,
        operator: &OperatorConfig,
        _date: Option<&str>,
    ) -> ScrapeResult<String> {
        match self.responses.get(&operator.code) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScrapeError::HttpStatus {
                operator: operator.code.clone(),
                status: *status,
                url: format!("https://stub/{}", operator.url_segment),
            }),
            None => Err(ScrapeError::network(&operator.code, "no stub page")),
        }
    }
}

fn ten_operators() -> OperatorRegistry {
    OperatorRegistry::new(
        (1..=10)
            .map(|i| OperatorConfig::new(&format!("op{i}"), &format!("op{i}-seg"), &format!("Banca {i}")))
            .collect(),
    )
}

fn draw_page(loteria: &str, horario: &str) -> String {
    let mut rows = String::new();
    for i in 1..=5 {
        rows.push_str(&format!(
            "<tr><td>{i}º</td><td>123{i}</td><td>09</td><td>Cobra</td></tr>"
        ));
    }
    format!(
        "<html><head><title>Resultados 10/02/2025</title></head><body>\
         <h2>Resultado do Jogo do Bicho {loteria}, {horario}</h2>\
         <table>{rows}</table></body></html>"
    )
}

fn engine_with(responses: HashMap<String, Result<String, u16>>) -> BatchScrapeEngine {
    BatchScrapeEngine::with_fetcher(
        &ScraperConfig::default(),
        ten_operators(),
        Arc::new(StubFetcher { responses }),
    )
    .expect("engine builds")
}

#[tokio::test]
async fn one_failing_operator_never_aborts_the_batch() {
    let mut responses = HashMap::new();
    for i in 1..=10 {
        if i == 4 {
            responses.insert(format!("op{i}"), Err(500));
        } else {
            responses.insert(format!("op{i}"), Ok(draw_page("PT", "09:20")));
        }
    }

    let batch = engine_with(responses).scrape_all().await;

    assert_eq!(batch.resultados.len(), 9);
    assert_eq!(batch.errors.len(), 1);
    assert!(batch.errors[0].starts_with("op4:"));
    assert!(batch.errors[0].contains("500"));
    assert!(batch.is_partial());
}

#[tokio::test]
async fn every_operator_failing_yields_ten_errors() {
    let responses = (1..=10).map(|i| (format!("op{i}"), Err(503))).collect();
    let batch = engine_with(responses).scrape_all().await;
    assert!(batch.resultados.is_empty());
    assert_eq!(batch.errors.len(), 10);
}

#[tokio::test]
async fn garbage_html_contributes_nothing_but_is_not_an_error() {
    let mut responses: HashMap<_, _> = (1..=10)
        .map(|i| (format!("op{i}"), Ok(draw_page("PT", "11:00"))))
        .collect();
    responses.insert("op2".to_string(), Ok("<<<not really html>>>".to_string()));

    let batch = engine_with(responses).scrape_all().await;
    assert_eq!(batch.resultados.len(), 9);
    assert!(batch.errors.is_empty());
}

#[tokio::test]
async fn scrape_single_operator() {
    let mut responses = HashMap::new();
    responses.insert("op7".to_string(), Ok(draw_page("LOTEP", "10:45")));

    let engine = engine_with(responses);
    let resultados = engine.scrape("op7", None).await.expect("op7 scrapes");

    assert_eq!(resultados.len(), 1);
    assert_eq!(resultados[0].loteria, "LOTEP");
    assert_eq!(resultados[0].horario, "10:45");
    assert_eq!(resultados[0].banca, "Banca 7");
    // header carried no date, page title did
    assert_eq!(resultados[0].data, "2025-02-10");
}

#[tokio::test]
async fn unknown_operator_is_rejected() {
    let engine = engine_with(HashMap::new());
    let err = engine.scrape("curitiba", None).await.unwrap_err();
    assert!(matches!(err, ScrapeError::UnknownOperator { .. }));
}

#[tokio::test]
async fn prize_tokens_reach_the_record_normalized() {
    let mut responses = HashMap::new();
    // three-digit milhares must come out zero-padded
    let mut rows = String::new();
    for i in 1..=5 {
        rows.push_str(&format!(
            "<tr><td>{i}</td><td>42{i}</td><td></td><td></td></tr>"
        ));
    }
    let page = format!(
        "<body><h2>Resultado do Jogo do Bicho PT 14h</h2><table>{rows}</table></body>"
    );
    responses.insert("op1".to_string(), Ok(page));

    let engine = engine_with(responses);
    let resultados = engine.scrape("op1", None).await.unwrap();
    let premio = &resultados[0].premios[0];

    assert_eq!(premio.milhar, "0421");
    assert_eq!(premio.centena, "421");
    assert_eq!(premio.dezena, "21");
    // grupo derived from the dezena, bicho from the grupo
    assert_eq!(premio.grupo, 6);
    assert_eq!(premio.bicho, "Cabra");
}
