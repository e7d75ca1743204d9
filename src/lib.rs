pub mod api;
pub mod cli;
pub mod config;
pub mod csv;
pub mod domain;
pub mod errors;
pub mod http;
pub mod ingest;
pub mod services;
pub mod stats;
pub mod text;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::config::{find_source, DataSourceConfig};
use crate::http::SheetClient;
use crate::services::loader::StandingsLoader;
use crate::services::server::ServerService;
use crate::stats::{compute_summary, make_rating_histogram};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_fetch(source_key: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let (source, loader) = build_loader(&config, source_key)?;

        loader.refresh(&source).await?;
        let snapshot = loader.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    })
}

pub fn handle_summary(source_key: &str, buckets: Option<usize>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let (source, loader) = build_loader(&config, source_key)?;

        loader.refresh(&source).await?;
        let snapshot = loader.snapshot();

        let summary = compute_summary(&snapshot.players, Utc::now(), &config.stats);
        let histogram = make_rating_histogram(
            &snapshot.players,
            buckets.unwrap_or(config.stats.histogram_buckets),
        );

        let report = serde_json::json!({
            "source": snapshot.source,
            "summary": summary,
            "histogram": histogram,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    })
}

fn build_loader(
    config: &AppConfig,
    source_key: &str,
) -> Result<(DataSourceConfig, StandingsLoader)> {
    let source =
        find_source(source_key).with_context(|| format!("Unknown source: {source_key}"))?;
    let fetcher = SheetClient::new(config.loader.user_agent, config.loader.timeout_secs)?;
    let loader = StandingsLoader::new(Box::new(fetcher), source.key);
    Ok((source, loader))
}
