//! CLI runner invoked by the scheduler
//!
//! With no arguments, scrapes every registered operator and prints the batch
//! as JSON. With an operator code (and optional date segment), scrapes only
//! that operator.

use anyhow::Result;
use bicho_results_lib::application::batch_scraper::BatchScrapeEngine;
use bicho_results_lib::infrastructure::config::{OperatorRegistry, ScraperConfig};
use bicho_results_lib::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = ScraperConfig::default();
    let registry = OperatorRegistry::default();
    let engine = BatchScrapeEngine::new(&config, registry)?;

    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(code) => {
            let date = args.next();
            let resultados = engine.scrape(&code, date.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&resultados)?);
        }
        None => {
            let batch = engine.scrape_all().await;
            for error in &batch.errors {
                eprintln!("erro: {error}");
            }
            println!("{}", serde_json::to_string_pretty(&batch.resultados)?);
        }
    }

    Ok(())
}
