use crate::{
    repository::StopIndex,
    shared::Coordinate,
    source::TraceRecord,
    topology::{RawVariant, RawVariantSet},
};

/// Snaps the points of one segment onto stops. Points without a stop are
/// skipped without breaking continuity, and a stop repeated by consecutive
/// points is kept once. Sequences with fewer than two stops are dropped.
pub fn trace_segment(points: &[Coordinate], stops: &StopIndex) -> Option<RawVariant> {
    let mut variant: RawVariant = Vec::new();
    points
        .iter()
        .filter_map(|point| stops.stop_by_coordinate(point))
        .for_each(|stop_id| {
            if variant.last() != Some(stop_id) {
                variant.push(stop_id.clone());
            }
        });
    (variant.len() >= 2).then_some(variant)
}

/// Folds trace records into raw variants grouped by route.
pub fn extract_variants<'a, I>(traces: I, stops: &StopIndex) -> RawVariantSet
where
    I: IntoIterator<Item = &'a TraceRecord>,
{
    traces
        .into_iter()
        .fold(RawVariantSet::new(), |mut variants, trace| {
            if let Some(short_name) = &trace.short_name {
                variants.name_route(&trace.route_id, short_name.clone());
            }
            trace
                .segments
                .iter()
                .filter_map(|segment| trace_segment(segment, stops))
                .for_each(|variant| variants.push(&trace.route_id, variant));
            variants
        })
}
