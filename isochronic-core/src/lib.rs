//! Isochronic map construction.
//!
//! Warps a road network so that the distance of every node from a chosen
//! center reflects travel time instead of geography, and bands nodes into
//! travel-time zones (isochrones).

pub mod algo;
pub mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod routing;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::Error;
pub use loading::load_network;
pub use model::{RoadEdge, RoadNetwork, RoadNode};
pub use pipeline::{IsochronicMap, MapConfig, build_isochronic_map};

/// Opaque node identifier, unique within a network (OSM ids in practice)
pub type NodeId = i64;
/// Travel time in seconds
pub type TravelTime = f64;
