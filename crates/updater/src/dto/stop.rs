use serde::{Deserialize, Serialize};
use topograph::{shared::Coordinate, source::StopRecord};

/// Entry of the published `stops.json` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub id: String,
    pub line_id: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl StopDto {
    pub fn from(stop: &StopRecord) -> Self {
        let id = stop.id.to_string();
        let line_id = stop.line_id.as_deref().map(str::to_owned);
        let name = stop.name.as_deref().map(str::to_owned);
        let city = stop.city.as_deref().map(str::to_owned);
        let coordinate = stop.coordinate.filter(Coordinate::is_located);
        Self {
            id,
            line_id,
            name,
            city,
            coordinate,
        }
    }
}
