use std::collections::HashSet;

use crate::{
    shared::Id,
    source::{Config, LineRecord, TransportMode},
};

/// Route ids whose line metadata flags them as metro.
#[derive(Debug, Clone, Default)]
pub struct MetroRouteSet(HashSet<Id>);

impl MetroRouteSet {
    pub fn from_lines<'a, I>(lines: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = &'a LineRecord>,
    {
        Self(
            lines
                .into_iter()
                .filter(|line| line.mode == TransportMode::Metro)
                .map(|line| config.route_id(&line.id))
                .collect(),
        )
    }

    pub fn contains(&self, route_id: &str) -> bool {
        self.0.contains(route_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I: Into<Id>> FromIterator<I> for MetroRouteSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
