use std::{cmp::Reverse, collections::BTreeMap};

use crate::{
    repository::StopIndex,
    shared::Id,
    topology::RawVariant,
};

/// Binds every stop name met on the route to a canonical stop id. Variants
/// are scanned longest first (stable), and the first id met for a name
/// wins.
pub fn bind_names(variants: &[RawVariant], stops: &StopIndex) -> BTreeMap<Id, Id> {
    let mut ordered: Vec<&RawVariant> = variants.iter().collect();
    ordered.sort_by_key(|variant| Reverse(variant.len()));

    let mut bindings: BTreeMap<Id, Id> = BTreeMap::new();
    ordered
        .into_iter()
        .flatten()
        .filter_map(|stop_id| Some((stops.name_by_stop_id(stop_id)?, stop_id)))
        .for_each(|(name, stop_id)| {
            bindings
                .entry(name.clone())
                .or_insert_with(|| stop_id.clone());
        });
    bindings
}

/// Merges the per-direction platforms of metro stations: every stop is
/// rewritten to the canonical id of its name, repeats introduced by the
/// rewrite are collapsed and variants left with fewer than two stops are
/// dropped. Output keeps the longest first scan order.
pub fn canonicalize(mut variants: Vec<RawVariant>, stops: &StopIndex) -> Vec<RawVariant> {
    let bindings = bind_names(&variants, stops);
    variants.sort_by_key(|variant| Reverse(variant.len()));
    variants
        .into_iter()
        .filter_map(|variant| {
            let mut rewritten: RawVariant = Vec::with_capacity(variant.len());
            for stop_id in variant {
                let canonical = stops
                    .name_by_stop_id(&stop_id)
                    .and_then(|name| bindings.get(name))
                    .cloned()
                    .unwrap_or(stop_id);
                if rewritten.last() != Some(&canonical) {
                    rewritten.push(canonical);
                }
            }
            (rewritten.len() >= 2).then_some(rewritten)
        })
        .collect()
}
