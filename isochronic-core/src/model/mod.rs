//! Data model for the road network being warped
//!
//! Contains node and edge types and the graph wrapper that owns them.

pub mod streets;

pub use streets::components::{RoadEdge, RoadNode};
pub use streets::network::RoadNetwork;
