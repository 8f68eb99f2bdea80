use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::shared::Id;

/// Stop ids matched along one trace segment, consecutive duplicates
/// collapsed.
pub type RawVariant = Vec<Id>;

/// Every raw variant of a single route, in the order it was extracted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRoute {
    pub route_id: Id,
    pub short_name: Option<Id>,
    pub variants: Vec<RawVariant>,
}

/// Raw variants grouped by route. May hold exact duplicates as well as
/// sequences contained in one another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawVariantSet {
    variants: BTreeMap<Id, Vec<RawVariant>>,
    short_names: HashMap<Id, Id>,
}

impl RawVariantSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, route_id: &Id, variant: RawVariant) {
        self.variants
            .entry(route_id.clone())
            .or_default()
            .push(variant);
    }

    /// Records the display name of a route. The last name seen wins.
    pub fn name_route(&mut self, route_id: &Id, short_name: Id) {
        self.short_names.insert(route_id.clone(), short_name);
    }

    pub fn variants_by_route_id(&self, route_id: &str) -> Option<&[RawVariant]> {
        self.variants.get(route_id).map(Vec::as_slice)
    }

    pub fn short_name_by_route_id(&self, route_id: &str) -> Option<&Id> {
        self.short_names.get(route_id)
    }

    /// Ids of the routes holding at least one variant, in ascending byte order.
    pub fn route_ids(&self) -> impl Iterator<Item = &Id> {
        self.variants.keys()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Consumes the set, yielding routes in ascending byte order of their id.
    pub fn into_routes(mut self) -> Vec<RawRoute> {
        self.variants
            .into_iter()
            .map(|(route_id, variants)| RawRoute {
                short_name: self.short_names.remove(&route_id),
                route_id,
                variants,
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// `{route_id}_{n}` where `n` is the survival order.
    pub id: String,
    pub stops: Vec<Id>,
}

/// Undirected link between two stops, stored with its endpoints sorted so
/// that `(a, b)` and `(b, a)` are the same edge. Serialized as a pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(Id, Id);

impl Edge {
    pub fn new(a: Id, b: Id) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn stops(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }

    pub fn contains(&self, stop_id: &str) -> bool {
        &*self.0 == stop_id || &*self.1 == stop_id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OptimizedRoute {
    /// Dense 1-based id, assigned in route id order.
    pub id: u32,
    pub route_id: Id,
    pub short_name: Id,
    pub variants: Vec<Variant>,
    pub infrastructure: Vec<Edge>,
}
