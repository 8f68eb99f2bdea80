use std::{cmp::Reverse, collections::HashSet};

use crate::{
    shared::Id,
    topology::{RawVariant, Variant},
};

/// Order preserving encoding of a stop sequence. Every id is length
/// prefixed so no id content can make two different sequences collide.
pub fn signature(variant: &[Id]) -> String {
    variant
        .iter()
        .map(|stop_id| format!("{}:{}", stop_id.len(), stop_id))
        .collect()
}

/// Whether `sub` appears as a strictly shorter run of consecutive stops
/// inside `main`.
pub fn is_contiguous_subsequence(sub: &[Id], main: &[Id]) -> bool {
    sub.len() < main.len()
        && (sub.is_empty() || main.windows(sub.len()).any(|window| window == sub))
}

/// Keeps the maximal, distinct variants of a route. Candidates are visited
/// longest first (stable) and rejected when they repeat a kept variant or
/// are a run inside one.
pub fn filter_variants(route_id: &str, variants: &[RawVariant]) -> Vec<Variant> {
    let mut candidates: Vec<&RawVariant> = variants.iter().collect();
    candidates.sort_by_key(|variant| Reverse(variant.len()));

    let mut signatures: HashSet<String> = HashSet::new();
    let mut kept: Vec<&RawVariant> = Vec::new();
    for candidate in candidates {
        if kept
            .iter()
            .any(|master| is_contiguous_subsequence(candidate, master))
        {
            continue;
        }
        if !signatures.insert(signature(candidate)) {
            continue;
        }
        kept.push(candidate);
    }

    kept.into_iter()
        .enumerate()
        .map(|(i, stops)| Variant {
            id: format!("{route_id}_{i}"),
            stops: stops.clone(),
        })
        .collect()
}
