use serde::{Deserialize, Serialize, de::IgnoredAny};
use serde_json::Number;

use crate::{
    shared::{Coordinate, Id, non_blank},
    source::Config,
};

/// A loosely typed scalar field. The open-data exports are not consistent
/// about quoting numbers, so both forms are accepted. Anything else is
/// swallowed and read back as absent.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Flag(bool),
    Unsupported(IgnoredAny),
}

impl Scalar {
    pub fn to_text(&self) -> Option<String> {
        match self {
            Scalar::Text(text) => non_blank(text).map(str::to_owned),
            Scalar::Number(number) => Some(number.to_string()),
            Scalar::Flag(flag) => Some(flag.to_string()),
            Scalar::Unsupported(_) => None,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Number(number) => number.as_f64(),
            Scalar::Flag(_) | Scalar::Unsupported(_) => None,
        }
    }
}

fn text(field: Option<&Scalar>) -> Option<Id> {
    field.and_then(Scalar::to_text).map(Into::into)
}

fn number(field: Option<&Scalar>) -> Option<f64> {
    field.and_then(Scalar::to_f64)
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PointGeo {
    pub lat: Option<Scalar>,
    pub lon: Option<Scalar>,
}

/// One row of the stops/lines export. Depending on the dataset revision the
/// location is either nested under `pointgeo` or split into two fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StopRow {
    pub stop_id: Option<Scalar>,
    pub stop_name: Option<Scalar>,
    pub pointgeo: Option<PointGeo>,
    pub stop_lat: Option<Scalar>,
    pub stop_lon: Option<Scalar>,
    /// Line served by the stop in the stops/lines export.
    pub id: Option<Scalar>,
    pub nom_commune: Option<Scalar>,
}

/// A stop as seen by the topology builder.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub id: Id,
    pub name: Option<Id>,
    pub coordinate: Option<Coordinate>,
    pub line_id: Option<Id>,
    pub city: Option<Id>,
}

impl StopRow {
    pub fn into_record(self) -> Option<StopRecord> {
        let id = text(self.stop_id.as_ref())?;
        let coordinate = match &self.pointgeo {
            Some(point) => number(point.lat.as_ref()).zip(number(point.lon.as_ref())),
            None => number(self.stop_lat.as_ref()).zip(number(self.stop_lon.as_ref())),
        }
        .map(Coordinate::from);

        Some(StopRecord {
            id,
            name: text(self.stop_name.as_ref()),
            coordinate,
            line_id: text(self.id.as_ref()),
            city: text(self.nom_commune.as_ref()),
        })
    }
}

/// GeoJSON line geometry. Positions are `[longitude, latitude, ...]`.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
}

impl Geometry {
    /// Splits the geometry into its point sequences. Returns `None` if any
    /// position is missing a component.
    pub fn segments(&self) -> Option<Vec<Vec<Coordinate>>> {
        let segment = |positions: &Vec<Vec<f64>>| -> Option<Vec<Coordinate>> {
            positions
                .iter()
                .map(|position| Coordinate::from_position(position))
                .collect()
        };
        match self {
            Geometry::LineString { coordinates } => Some(vec![segment(coordinates)?]),
            Geometry::MultiLineString { coordinates } => coordinates.iter().map(segment).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TraceShape {
    pub geometry: Option<Geometry>,
}

/// One row of the line traces export.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TraceRow {
    pub id_ilico: Option<Scalar>,
    pub route_short_name: Option<Scalar>,
    pub shape: Option<TraceShape>,
}

/// A route polyline split into segments, ready for stop matching.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    pub route_id: Id,
    pub short_name: Option<Id>,
    pub segments: Vec<Vec<Coordinate>>,
}

impl TraceRow {
    pub fn into_record(self, config: &Config) -> Option<TraceRecord> {
        let raw_id = self.id_ilico.as_ref().and_then(Scalar::to_text)?;
        let segments = self.shape?.geometry?.segments()?;
        Some(TraceRecord {
            route_id: config.route_id(&raw_id),
            short_name: text(self.route_short_name.as_ref()),
            segments,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Rer,
    Metro,
    Transilien,
    Ter,
    Navette,
    Bus,
    Cableway,
    Tramway,
    #[serde(untagged)]
    Other(String),
}

impl TransportMode {
    /// Maps the referential's mode and sub mode onto the modes used
    /// downstream. Rail is split by sub mode, unknown modes pass through.
    pub fn detect(mode: &str, submode: Option<&str>) -> Self {
        match mode {
            "rail" => match submode {
                Some("suburbanRailway") => TransportMode::Transilien,
                Some("local") => TransportMode::Rer,
                Some("regionalRail") => TransportMode::Ter,
                Some("railShuttle") => TransportMode::Navette,
                _ => TransportMode::Transilien,
            },
            "metro" => TransportMode::Metro,
            "tramway" => TransportMode::Tramway,
            "bus" => TransportMode::Bus,
            "cableway" => TransportMode::Cableway,
            other => TransportMode::Other(other.to_owned()),
        }
    }
}

/// One row of the line referential export.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LineRow {
    pub id_line: Option<Scalar>,
    pub name_line: Option<Scalar>,
    pub transportmode: Option<Scalar>,
    pub transportsubmode: Option<Scalar>,
    pub colourweb_hexa: Option<Scalar>,
    pub textcolourweb_hexa: Option<Scalar>,
}

/// Line metadata, also the shape of the persisted `lines.json` entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub id: Id,
    pub name: Option<Id>,
    pub mode: TransportMode,
    pub background_color: Option<Id>,
    pub text_color: Option<Id>,
}

impl LineRow {
    pub fn into_record(self) -> Option<LineRecord> {
        let id = text(self.id_line.as_ref())?;
        let mode = match self.transportmode.as_ref().and_then(Scalar::to_text) {
            Some(mode) => {
                let submode = self.transportsubmode.as_ref().and_then(Scalar::to_text);
                TransportMode::detect(&mode, submode.as_deref())
            }
            None => TransportMode::Other("unknown".into()),
        };
        Some(LineRecord {
            id,
            name: text(self.name_line.as_ref()),
            mode,
            background_color: text(self.colourweb_hexa.as_ref()),
            text_color: text(self.textcolourweb_hexa.as_ref()),
        })
    }
}
