// Re-export key components
pub use crate::algo::center::locate_center;
pub use crate::algo::extent::{Extent, trim_extent};
pub use crate::algo::isochrone::{BandAssignment, Isochrone, UNASSIGNED_LABEL, assign_bands};
pub use crate::algo::scale::{BirdDistances, bird_distances, scale_factor};
pub use crate::algo::warp::{WarpedNetwork, warp_network};
pub use crate::loading::{NetworkSource, load_network};
pub use crate::pipeline::{IsochronicMap, MapConfig, build_isochronic_map};
pub use crate::routing::{RouteError, SolverOptions, SolverStrategy, TravelTimes, solve_travel_times};

// Core types for the road network
pub use crate::model::{RoadEdge, RoadNetwork, RoadNode};
pub use crate::{Error, NodeId, TravelTime};
