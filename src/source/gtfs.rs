use serde::Deserialize;
use std::{fs::File, path::Path, time::Instant};
use tracing::debug;
use zip::ZipArchive;

use crate::{
    shared::{Coordinate, non_blank},
    source::{self, Config, StopRecord},
};

/// The subset of a GTFS `stops.txt` row the topology needs. Columns that
/// are absent from a feed stay `None`.
#[derive(Deserialize, Debug, Clone)]
pub struct GtfsStop {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    pub stop_lat: Option<f64>,
    pub stop_lon: Option<f64>,
}

impl GtfsStop {
    pub fn into_record(self) -> Option<StopRecord> {
        let id = self.stop_id.as_deref().and_then(non_blank)?.into();
        Some(StopRecord {
            id,
            name: self.stop_name.as_deref().and_then(non_blank).map(Into::into),
            coordinate: self.stop_lat.zip(self.stop_lon).map(Coordinate::from),
            line_id: None,
            city: None,
        })
    }
}

/// Streams the stops of a GTFS archive, used as an alternative stop
/// source when a feed is available locally. Rows that fail to decode or
/// carry no id are skipped.
pub fn stream_stops<P, F>(zip_path: P, config: &Config, f: F) -> Result<(), source::Error>
where
    P: AsRef<Path>,
    F: FnMut((usize, StopRecord)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let name = config.stops_file_name.as_str();
    let index = archive
        .index_for_name(name)
        .ok_or(source::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    let mut reader = csv::Reader::from_reader(file);
    reader.headers()?;
    reader
        .deserialize::<GtfsStop>()
        .filter_map(|row| row.ok())
        .filter_map(GtfsStop::into_record)
        .enumerate()
        .for_each(f);
    Ok(())
}

pub fn read_stops<P: AsRef<Path>>(
    zip_path: P,
    config: &Config,
) -> Result<Vec<StopRecord>, source::Error> {
    debug!("Reading GTFS stops...");
    let now = Instant::now();
    let mut stops = Vec::new();
    stream_stops(zip_path, config, |(_, stop)| stops.push(stop))?;
    debug!("Reading {} GTFS stops took {:?}", stops.len(), now.elapsed());
    Ok(stops)
}
