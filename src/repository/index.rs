use std::collections::HashMap;

use crate::{
    shared::{Coordinate, CoordinateKey, Id},
    source::StopRecord,
};

/// Quantized coordinate to stop lookup, plus the stop display names.
///
/// Two stops that round to the same key collide and the one indexed last
/// wins. There is no distance based tie break.
#[derive(Debug, Clone, Default)]
pub struct StopIndex {
    stop_lookup: HashMap<CoordinateKey, Id>,
    stop_names: HashMap<Id, Id>,
    collisions: usize,
}

impl StopIndex {
    pub fn new() -> Self {
        Default::default()
    }

    /// Indexes one stop. Stops without a location only feed the name map.
    pub fn insert(&mut self, stop: &StopRecord) {
        if let Some(coordinate) = stop.coordinate
            && coordinate.is_located()
            && let Some(previous) = self.stop_lookup.insert(coordinate.to_key(), stop.id.clone())
            && previous != stop.id
        {
            self.collisions += 1;
        }

        if let Some(name) = &stop.name {
            self.stop_names.insert(stop.id.clone(), name.clone());
        }
    }

    pub fn stop_by_coordinate(&self, coordinate: &Coordinate) -> Option<&Id> {
        self.stop_lookup.get(coordinate.to_key().as_str())
    }

    pub fn name_by_stop_id(&self, stop_id: &str) -> Option<&Id> {
        self.stop_names.get(stop_id)
    }

    /// Number of distinct keys, i.e. matchable locations.
    pub fn len(&self) -> usize {
        self.stop_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_lookup.is_empty()
    }

    pub fn named_stops(&self) -> usize {
        self.stop_names.len()
    }

    /// How many inserts replaced a different stop under the same key.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

impl<'a> FromIterator<&'a StopRecord> for StopIndex {
    fn from_iter<I: IntoIterator<Item = &'a StopRecord>>(iter: I) -> Self {
        let mut index = StopIndex::new();
        iter.into_iter().for_each(|stop| index.insert(stop));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, name: Option<&str>, coordinate: Option<(f64, f64)>) -> StopRecord {
        StopRecord {
            id: id.into(),
            name: name.map(Into::into),
            coordinate: coordinate.map(Coordinate::from),
            line_id: None,
            city: None,
        }
    }

    #[test]
    fn zero_latitude_is_not_indexed() {
        let index: StopIndex = [stop("A", Some("Alpha"), Some((0.0, 2.35)))]
            .iter()
            .collect();
        assert!(index.is_empty());
        assert_eq!(index.name_by_stop_id("A").map(|n| &**n), Some("Alpha"));
    }

    #[test]
    fn last_insert_wins_on_collision() {
        let index: StopIndex = [
            stop("A", None, Some((48.856_61, 2.352_21))),
            stop("B", None, Some((48.856_64, 2.352_18))),
        ]
        .iter()
        .collect();
        assert_eq!(index.len(), 1);
        assert_eq!(index.collisions(), 1);
        let found = index.stop_by_coordinate(&Coordinate::new(48.8566, 2.3522));
        assert_eq!(found.map(|id| &**id), Some("B"));
    }

    #[test]
    fn missing_coordinate_keeps_name() {
        let index: StopIndex = [stop("A", Some("Alpha"), None)].iter().collect();
        assert!(index.is_empty());
        assert_eq!(index.named_stops(), 1);
    }
}
