//! Typed boundary between the loosely structured open-data exports and the
//! topology builder.
//!
//! A dataset is decoded as a whole, then every record is parsed on its own.
//! A record with an unexpected shape is skipped and counted; it never fails
//! the run. Only a dataset that cannot be decoded at all is an error.

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{io, time::Instant};
use thiserror::Error;
use tracing::{debug, warn};

mod config;
pub mod gtfs;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Dataset {0} has no usable records")]
    EmptyInput(&'static str),
}

/// Decodes a whole export. The payload must be a JSON array of records.
pub fn decode(bytes: &[u8]) -> Result<Vec<Value>, self::Error> {
    let records: Vec<Value> = serde_json::from_slice(bytes)?;
    Ok(records)
}

pub fn parse_stops(records: Vec<Value>) -> Vec<StopRecord> {
    parse_rows("stop", records, StopRow::into_record)
}

pub fn parse_traces(records: Vec<Value>, config: &Config) -> Vec<TraceRecord> {
    parse_rows("trace", records, |row: TraceRow| row.into_record(config))
}

pub fn parse_lines(records: Vec<Value>) -> Vec<LineRecord> {
    parse_rows("line", records, LineRow::into_record)
}

fn parse_rows<T, R, F>(kind: &str, records: Vec<Value>, f: F) -> Vec<R>
where
    T: DeserializeOwned + Send,
    R: Send,
    F: Fn(T) -> Option<R> + Sync + Send,
{
    debug!("Parsing {kind} records...");
    let now = Instant::now();
    let total = records.len();
    let parsed: Vec<R> = records
        .into_par_iter()
        .filter_map(|record| serde_json::from_value::<T>(record).ok())
        .filter_map(&f)
        .collect();

    let skipped = total - parsed.len();
    if skipped > 0 {
        warn!("Skipped {skipped} of {total} {kind} records with missing or malformed fields");
    }
    debug!("Parsing {kind} records took {:?}", now.elapsed());
    parsed
}
