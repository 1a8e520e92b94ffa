//! Road network components and graph

pub mod components;
pub mod network;

pub use components::{RoadEdge, RoadNode};
pub use network::RoadNetwork;
