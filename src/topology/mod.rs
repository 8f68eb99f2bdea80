mod canonical;
mod extract;
mod infrastructure;
mod models;
mod subsumption;

pub use canonical::*;
pub use extract::*;
pub use infrastructure::*;
pub use models::*;
pub use subsumption::*;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

use crate::{repository::Repository, source, source::TraceRecord};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset {0} has no usable records")]
    EmptyInput(&'static str),
    #[error("Source error: {0}")]
    Source(#[from] source::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The canonical topology of every route, ready to be written out as a
/// single JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Topology {
    pub routes: Vec<OptimizedRoute>,
}

impl Topology {
    /// Matches traces against the repository stops and assembles the
    /// result. Fails when there is nothing to build from, so a caller never
    /// replaces a previous snapshot with an empty one.
    pub fn build(repository: &Repository, traces: &[TraceRecord]) -> Result<Self, self::Error> {
        if traces.is_empty() {
            return Err(self::Error::EmptyInput("traces"));
        }

        debug!("Extracting raw variants...");
        let now = Instant::now();
        let raw = extract_variants(traces, &repository.stops);
        debug!(
            "Extracting raw variants for {} routes took {:?}",
            raw.len(),
            now.elapsed()
        );
        if raw.is_empty() {
            return Err(self::Error::EmptyInput("routes"));
        }

        Ok(Self::assemble(repository, raw))
    }

    /// Runs the per route work in parallel, then numbers routes in
    /// ascending route id order once every route is done.
    pub fn assemble(repository: &Repository, raw: RawVariantSet) -> Self {
        debug!("Assembling routes...");
        let now = Instant::now();
        let mut routes = raw.into_routes();
        routes.par_sort_by(|a, b| a.route_id.cmp(&b.route_id));

        let assembled: Vec<(RawRoute, Vec<Variant>, Vec<Edge>)> = routes
            .into_par_iter()
            .map(|mut route| {
                if repository.is_metro(&route.route_id) {
                    let variants = std::mem::take(&mut route.variants);
                    route.variants = canonicalize(variants, &repository.stops);
                }
                let (variants, infrastructure) = rayon::join(
                    || filter_variants(&route.route_id, &route.variants),
                    || build_infrastructure(&route.variants),
                );
                (route, variants, infrastructure)
            })
            .collect();

        let routes: Vec<OptimizedRoute> = assembled
            .into_iter()
            .zip(1..)
            .map(|((route, variants, infrastructure), id)| OptimizedRoute {
                id,
                route_id: route.route_id,
                short_name: route.short_name.unwrap_or_else(|| "".into()),
                variants,
                infrastructure,
            })
            .collect();
        debug!("Assembling {} routes took {:?}", routes.len(), now.elapsed());
        Self { routes }
    }

    pub fn route_by_id(&self, route_id: &str) -> Option<&OptimizedRoute> {
        self.routes
            .binary_search_by(|route| (*route.route_id).cmp(route_id))
            .ok()
            .map(|index| &self.routes[index])
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Pretty printed JSON array, two space indent.
    pub fn to_json(&self) -> Result<String, self::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
