use std::path::Path;
use tokio::fs;
use topograph::source::{self, LineRecord};
use tracing::{info, warn};

use crate::{config::Config, error::Error, fetch::fetch_records};

/// Publishes the line metadata with the detected transport mode.
pub async fn run(client: &reqwest::Client, config: &Config) -> Result<String, Error> {
    let records = fetch_records(client, &config.lines_url).await?;
    let lines = source::parse_lines(records);
    if lines.is_empty() {
        return Err(source::Error::EmptyInput("lines").into());
    }
    info!("Processed {} lines", lines.len());
    Ok(serde_json::to_string_pretty(&lines)?)
}

/// Reads back the published line metadata. A missing or unreadable file
/// only disables metro canonicalization.
pub async fn read<P: AsRef<Path>>(path: P) -> Vec<LineRecord> {
    let path = path.as_ref();
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("Could not read line metadata {}: {err}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(lines) => lines,
        Err(err) => {
            warn!("Could not decode line metadata {}: {err}", path.display());
            Vec::new()
        }
    }
}
