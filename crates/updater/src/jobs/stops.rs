use tokio::task;
use topograph::source;

use crate::{config::Config, dto::StopDto, error::Error, fetch::fetch_records};

/// Publishes the stop listing.
pub async fn run(client: &reqwest::Client, config: &Config) -> Result<String, Error> {
    let records = fetch_records(client, &config.stops_url).await?;
    let contents = task::spawn_blocking(move || -> Result<String, Error> {
        let stops: Vec<StopDto> = source::parse_stops(records)
            .iter()
            .map(StopDto::from)
            .collect();
        if stops.is_empty() {
            return Err(source::Error::EmptyInput("stops").into());
        }
        Ok(serde_json::to_string_pretty(&stops)?)
    })
    .await??;
    Ok(contents)
}
