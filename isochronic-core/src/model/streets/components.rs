//! Road network components - nodes and edges

use geo::{LineString, Point, line_string};

use crate::{NodeId, TravelTime};

/// Road graph node
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    /// Opaque node id
    pub id: NodeId,
    /// Geographic coordinates (x = longitude, y = latitude)
    pub location: Point<f64>,
    /// Coordinates in the projected planar frame
    pub position: Point<f64>,
    /// Number of streets meeting at the node
    pub street_count: u32,
}

impl RoadNode {
    pub fn new(id: NodeId, lat: f64, lon: f64, x: f64, y: f64, street_count: u32) -> Self {
        Self {
            id,
            location: Point::new(lon, lat),
            position: Point::new(x, y),
            street_count,
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }

    /// Same node placed at a different planar position
    pub(crate) fn moved_to(&self, position: Point<f64>) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

/// Road graph edge (street segment)
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    /// Traversal time in seconds
    pub travel_time: TravelTime,
    /// Straight segment between the endpoints' planar positions
    pub geometry: LineString<f64>,
}

impl RoadEdge {
    pub(crate) fn between(from: Point<f64>, to: Point<f64>, travel_time: TravelTime) -> Self {
        Self {
            travel_time,
            geometry: line_string![
                (x: from.x(), y: from.y()),
                (x: to.x(), y: to.y()),
            ],
        }
    }
}
