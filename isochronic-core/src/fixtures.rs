//! Small hand-built networks shared by unit tests

use crate::{NodeId, RoadNetwork, RoadNode};

pub(crate) const A: NodeId = 1;
pub(crate) const B: NodeId = 2;
pub(crate) const C: NodeId = 3;
pub(crate) const D: NodeId = 4;
pub(crate) const E: NodeId = 5;
/// Isolated node, no edges at all
pub(crate) const F: NodeId = 6;

pub(crate) const EPS: f64 = 1e-9;

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// Star around `C` at planar origin. Bird distances A:5, B:10, D:15, E:20,
/// two-way spokes with travel times A:10, B:20, D:30, E:40.
pub(crate) fn star_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    let nodes = [
        RoadNode::new(A, 45.5004, -73.4996, 3.0, 4.0, 1),
        RoadNode::new(B, 45.5000, -73.5010, -10.0, 0.0, 1),
        RoadNode::new(C, 45.5000, -73.5000, 0.0, 0.0, 4),
        RoadNode::new(D, 45.4985, -73.5000, 0.0, -15.0, 1),
        RoadNode::new(E, 45.5016, -73.4988, 12.0, 16.0, 1),
        RoadNode::new(F, 45.6000, -73.6000, 50.0, 50.0, 0),
    ];
    for node in nodes {
        network.add_node(node).unwrap();
    }
    for (spoke, time) in [(A, 10.0), (B, 20.0), (D, 30.0), (E, 40.0)] {
        network.add_edge(C, spoke, time).unwrap();
        network.add_edge(spoke, C, time).unwrap();
    }
    network
}

/// One-way chain 1 -> 2 -> 3 -> 4 with cumulative times 10, 30, 60
pub(crate) fn chain_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    for id in 1..=4 {
        #[allow(clippy::cast_precision_loss)]
        let offset = id as f64;
        network
            .add_node(RoadNode::new(id, 45.0, -73.0 + offset * 0.001, offset * 100.0, 0.0, 2))
            .unwrap();
    }
    network.add_edge(1, 2, 10.0).unwrap();
    network.add_edge(2, 3, 20.0).unwrap();
    network.add_edge(3, 4, 30.0).unwrap();
    network
}
