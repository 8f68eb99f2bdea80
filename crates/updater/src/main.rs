mod backup;
mod config;
mod dto;
mod error;
mod fetch;
mod jobs;

use crate::config::Config;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting transit data update...");
    let now = Instant::now();
    let config = Config::from_env();
    if let Err(err) = tokio::fs::create_dir_all(&config.output_dir).await {
        error!(
            "Failed to create output directory {}: {err}",
            config.output_dir.display()
        );
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    // Routes read the line metadata published by the lines job, so order matters.
    let results = [
        jobs::run(
            "stops",
            &config,
            &config.stops_file_name,
            jobs::stops::run(&client, &config),
        )
        .await,
        jobs::run(
            "lines",
            &config,
            &config.lines_file_name,
            jobs::lines::run(&client, &config),
        )
        .await,
        jobs::run(
            "routes",
            &config,
            &config.routes_file_name,
            jobs::routes::run(&client, &config),
        )
        .await,
    ];

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        error!("{failed} of {} jobs failed", results.len());
        std::process::exit(1);
    }
    info!("All jobs done in {:?}", now.elapsed());
}
