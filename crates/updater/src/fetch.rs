use futures_util::StreamExt;
use serde_json::Value;
use std::time::Instant;
use tokio::task;
use topograph::source;
use tracing::{error, info};

use crate::error::Error;

/// Downloads a whole export and decodes it as an array of records.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<Value>, Error> {
    info!("Fetching {url}");
    let now = Instant::now();
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        error!("Response is not success: {body}");
        return Err(Error::Status(status, url.to_owned()));
    }

    let mut body: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk?);
    }

    let size = body.len();
    let records = task::spawn_blocking(move || source::decode(&body)).await??;
    info!(
        "Fetched {} records ({size} bytes) in {:?}",
        records.len(),
        now.elapsed()
    );
    Ok(records)
}
