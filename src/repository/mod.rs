use std::time::Instant;
use tracing::{debug, warn};

mod index;
mod metro;
pub use index::*;
pub use metro::*;

use crate::{
    shared::{Coordinate, Id},
    source::{self, Config, LineRecord, StopRecord},
};

/// Read-only lookups shared by every route during a build.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub stops: StopIndex,
    pub metro_routes: MetroRouteSet,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the spatial index and name map from a stop snapshot.
    /// Fails if not a single stop could be located.
    pub fn load_stops(mut self, stops: &[StopRecord]) -> Result<Self, source::Error> {
        debug!("Loading stops...");
        let now = Instant::now();
        self.stops = stops.iter().collect();
        if self.stops.is_empty() {
            return Err(source::Error::EmptyInput("stops"));
        }
        if self.stops.collisions() > 0 {
            debug!(
                "{} stops share a coordinate key with another stop, kept the last one",
                self.stops.collisions()
            );
        }
        debug!(
            "Loading {} stop keys and {} stop names took {:?}",
            self.stops.len(),
            self.stops.named_stops(),
            now.elapsed()
        );
        Ok(self)
    }

    pub fn load_lines(mut self, lines: &[LineRecord], config: &Config) -> Self {
        debug!("Loading metro lines...");
        let now = Instant::now();
        self.metro_routes = MetroRouteSet::from_lines(lines, config);
        if self.metro_routes.is_empty() {
            warn!("No metro line in line metadata, stop canonicalization is disabled");
        }
        debug!(
            "Loading {} metro lines took {:?}",
            self.metro_routes.len(),
            now.elapsed()
        );
        self
    }

    pub fn with_metro_routes(mut self, metro_routes: MetroRouteSet) -> Self {
        self.metro_routes = metro_routes;
        self
    }

    pub fn stop_by_coordinate(&self, coordinate: &Coordinate) -> Option<&Id> {
        self.stops.stop_by_coordinate(coordinate)
    }

    pub fn name_by_stop_id(&self, stop_id: &str) -> Option<&Id> {
        self.stops.name_by_stop_id(stop_id)
    }

    pub fn is_metro(&self, route_id: &str) -> bool {
        self.metro_routes.contains(route_id)
    }
}
