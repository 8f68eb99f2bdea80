use std::{env, path::PathBuf};

use topograph::source;

const DATASETS_URL: &str = "https://data.iledefrance-mobilites.fr/api/explore/v2.1/catalog/datasets";

pub struct Config {
    /// Stops per line export, used both for the stop listing and matching.
    pub stops_url: String,
    pub traces_url: String,
    pub lines_url: String,
    /// Local GTFS archive to read stops from instead of `stops_url`.
    pub stops_gtfs: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub stops_file_name: String,
    pub lines_file_name: String,
    pub routes_file_name: String,
    pub source: source::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stops_url: format!("{DATASETS_URL}/arrets-lignes/exports/json?limit=-1"),
            traces_url: format!(
                "{DATASETS_URL}/traces-des-lignes-de-transport-en-commun-idfm/exports/json?limit=-1"
            ),
            lines_url: format!("{DATASETS_URL}/referentiel-des-lignes/exports/json?limit=-1"),
            stops_gtfs: None,
            output_dir: PathBuf::from("."),
            stops_file_name: "stops.json".into(),
            lines_file_name: "lines.json".into(),
            routes_file_name: "optimized_routes.json".into(),
            source: Default::default(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `TOPOGRAPH_*` environment variables, then by
    /// the first command line argument as output directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("TOPOGRAPH_STOPS_URL") {
            config.stops_url = url;
        }
        if let Ok(url) = env::var("TOPOGRAPH_TRACES_URL") {
            config.traces_url = url;
        }
        if let Ok(url) = env::var("TOPOGRAPH_LINES_URL") {
            config.lines_url = url;
        }
        if let Ok(path) = env::var("TOPOGRAPH_STOPS_GTFS") {
            config.stops_gtfs = Some(path.into());
        }
        if let Ok(dir) = env::var("TOPOGRAPH_OUTPUT_DIR") {
            config.output_dir = dir.into();
        }
        if let Some(dir) = env::args().nth(1) {
            config.output_dir = dir.into();
        }
        config
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// `stops.json` is backed up as `stops.backup.json`.
    pub fn backup_path(&self, file_name: &str) -> PathBuf {
        let backup = match file_name.rsplit_once('.') {
            Some((stem, extension)) => format!("{stem}.backup.{extension}"),
            None => format!("{file_name}.backup"),
        };
        self.output_dir.join(backup)
    }
}
