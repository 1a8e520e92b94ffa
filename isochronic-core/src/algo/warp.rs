//! Moves nodes along the ray from the center so that distance reflects travel time

use fixedbitset::FixedBitSet;
use geo::Point;
use log::{info, warn};
use petgraph::visit::EdgeRef;

use super::scale::BirdDistances;
use crate::{Error, NodeId, RoadNetwork, TravelTime, routing::TravelTimes};

/// Result of warping: the rebuilt network plus bookkeeping on what changed
#[derive(Debug, Clone)]
pub struct WarpedNetwork {
    /// Center and every reachable node at their new positions
    pub network: RoadNetwork,
    /// Number of nodes dropped for lack of a travel time
    pub removed: usize,
    /// Non-center nodes sitting exactly on the center; they are not moved
    pub coincident: Vec<NodeId>,
}

/// Warps every reachable node and drops the rest.
///
/// A node at travel time `t` and bird distance `d` moves to
/// `center - scale * (t / d) * (center - position)`. The center stays put.
/// A non-center node at `d == 0` gets zero displacement and is reported in
/// [`WarpedNetwork::coincident`].
///
/// The output is a new network built from the kept nodes and the edges
/// between them, so all edge geometry matches the new positions.
///
/// # Errors
///
/// Returns `InvalidNodeId` if `center` is missing and `DegenerateNetwork`
/// if `scale` is not a positive finite number
#[allow(clippy::needless_pass_by_value)]
pub fn warp_network(
    network: RoadNetwork,
    center: NodeId,
    travel: &TravelTimes,
    bird: &BirdDistances,
    scale: f64,
) -> Result<WarpedNetwork, Error> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::DegenerateNetwork(format!(
            "cannot warp with scale factor {scale}"
        )));
    }
    let origin = network
        .node(center)
        .ok_or(Error::InvalidNodeId(center))?
        .position;

    let graph = network.graph();
    let mut kept = FixedBitSet::with_capacity(graph.node_count());
    let mut warped = RoadNetwork::with_capacity(travel.len(), graph.edge_count());
    let mut coincident = Vec::new();

    for idx in graph.node_indices() {
        let node = &graph[idx];
        let moved = if node.id == center {
            node.clone()
        } else {
            let Some(&time) = travel.get(&node.id) else {
                continue;
            };
            let Some(&distance) = bird.get(&node.id) else {
                warn!("Node {} has a travel time but no bird distance, dropping it", node.id);
                continue;
            };
            if distance == 0.0 {
                coincident.push(node.id);
            }
            node.moved_to(warp_position(origin, node.position, local_scale(scale, time, distance)))
        };
        warped.add_node(moved)?;
        kept.insert(idx.index());
    }

    for edge in graph.edge_references() {
        let (source, target) = (edge.source(), edge.target());
        if kept.contains(source.index()) && kept.contains(target.index()) {
            warped.add_edge(graph[source].id, graph[target].id, edge.weight().travel_time)?;
        }
    }

    if !coincident.is_empty() {
        warn!(
            "{} nodes coincide with center {center} and were left on it",
            coincident.len()
        );
    }
    let removed = network.node_count() - warped.node_count();
    info!(
        "Warped {} nodes and {} edges, removed {removed} unreachable nodes",
        warped.node_count(),
        warped.edge_count()
    );

    Ok(WarpedNetwork {
        network: warped,
        removed,
        coincident,
    })
}

/// Per-node stretch; zero for nodes on top of the center
fn local_scale(scale: f64, time: TravelTime, distance: f64) -> f64 {
    if distance == 0.0 {
        0.0
    } else {
        scale * (time / distance)
    }
}

fn warp_position(origin: Point<f64>, position: Point<f64>, local_scale: f64) -> Point<f64> {
    origin - (origin - position) * local_scale
}
