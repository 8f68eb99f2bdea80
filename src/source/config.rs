use crate::shared::Id;

#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace prepended to raw line identifiers so trace and line
    /// datasets agree on route ids.
    pub route_id_prefix: String,
    pub stops_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_id_prefix: "IDFM:".into(),
            stops_file_name: "stops.txt".into(),
        }
    }
}

impl Config {
    /// Turns a raw line identifier into a route id. Identifiers that
    /// already carry the prefix are kept as is.
    pub fn route_id(&self, raw: &str) -> Id {
        if raw.starts_with(&self.route_id_prefix) {
            raw.into()
        } else {
            format!("{}{}", self.route_id_prefix, raw).into()
        }
    }
}
