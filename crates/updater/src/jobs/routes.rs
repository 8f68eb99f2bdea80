use tokio::task;
use topograph::{
    repository::Repository,
    source::{self, StopRecord},
    topology::Topology,
};
use tracing::info;

use crate::{config::Config, error::Error, fetch::fetch_records, jobs::lines};

async fn load_stops(client: &reqwest::Client, config: &Config) -> Result<Vec<StopRecord>, Error> {
    match &config.stops_gtfs {
        Some(path) => {
            info!("Reading stops from {}", path.display());
            let path = path.clone();
            let source_config = config.source.clone();
            let stops =
                task::spawn_blocking(move || source::gtfs::read_stops(path, &source_config))
                    .await??;
            Ok(stops)
        }
        None => {
            let records = fetch_records(client, &config.stops_url).await?;
            Ok(task::spawn_blocking(move || source::parse_stops(records)).await?)
        }
    }
}

/// Builds and publishes the optimized routes.
pub async fn run(client: &reqwest::Client, config: &Config) -> Result<String, Error> {
    let stops = load_stops(client, config).await?;
    let traces = fetch_records(client, &config.traces_url).await?;
    let lines = lines::read(config.output_path(&config.lines_file_name)).await;
    info!("Matching traces against {} stops", stops.len());

    let source_config = config.source.clone();
    let topology = task::spawn_blocking(move || -> Result<Topology, Error> {
        let traces = source::parse_traces(traces, &source_config);
        let repository = Repository::new()
            .load_stops(&stops)?
            .load_lines(&lines, &source_config);
        Ok(Topology::build(&repository, &traces)?)
    })
    .await??;

    info!(
        "Processed {} routes, adjacent infrastructure generated",
        topology.len()
    );
    Ok(topology.to_json()?)
}
