//! Turns open transit stop and trace datasets into a canonical topology per
//! route: the minimal set of stop sequences a line runs, and the graph of
//! stops that are physically adjacent.

pub mod repository;
pub mod shared;
pub mod source;
pub mod topology;

pub mod prelude {
    pub use crate::repository::{MetroRouteSet, Repository, StopIndex};
    pub use crate::shared::{Coordinate, CoordinateKey, Id};
    pub use crate::source::{self, Config, LineRecord, StopRecord, TraceRecord, TransportMode};
    pub use crate::topology::{self, Edge, OptimizedRoute, RawVariantSet, Topology, Variant};
}
