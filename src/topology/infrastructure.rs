use std::collections::{BTreeSet, HashMap};

use crate::topology::{Edge, RawVariant};

/// First and last position of a stop within one variant.
#[derive(Debug, Clone, Copy)]
struct Span {
    first: usize,
    last: usize,
}

fn spans_of(variant: &RawVariant) -> HashMap<&str, Span> {
    let mut spans: HashMap<&str, Span> = HashMap::new();
    variant.iter().enumerate().for_each(|(i, stop_id)| {
        spans
            .entry(&**stop_id)
            .and_modify(|span| span.last = i)
            .or_insert(Span { first: i, last: i });
    });
    spans
}

/// A variant proves an edge is a shortcut when it holds both endpoints
/// with at least one stop between some occurrence of each.
fn is_jump(spans: &HashMap<&str, Span>, edge: &Edge) -> bool {
    let (a, b) = edge.stops();
    match (spans.get(a), spans.get(b)) {
        (Some(a), Some(b)) => a.last.abs_diff(b.first) > 1 || b.last.abs_diff(a.first) > 1,
        _ => false,
    }
}

/// Every distinct pair of consecutive stops seen on the route.
pub fn candidate_edges(variants: &[RawVariant]) -> BTreeSet<Edge> {
    variants
        .iter()
        .flat_map(|variant| variant.windows(2))
        .filter(|pair| pair[0] != pair[1])
        .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Builds the physical adjacency of a route from its unfiltered variants.
/// Candidate edges that any variant shows skipping over a stop are
/// rejected. Edges come out sorted.
pub fn build_infrastructure(variants: &[RawVariant]) -> Vec<Edge> {
    let spans: Vec<HashMap<&str, Span>> = variants.iter().map(spans_of).collect();
    candidate_edges(variants)
        .into_iter()
        .filter(|edge| !spans.iter().any(|variant| is_jump(variant, edge)))
        .collect()
}
