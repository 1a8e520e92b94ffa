use hashbrown::HashMap;
use log::{debug, info, trace};
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use super::dijkstra::dijkstra_travel_times;
use crate::{Error, NodeId, RoadNetwork, TravelTime};

/// Travel time from the center to every reachable node.
/// Unreachable nodes have no entry; the center maps to `0.0`.
pub type TravelTimes = HashMap<NodeId, TravelTime>;

/// Why a single node did not get a travel time.
/// Never fatal: the node is simply left out of [`TravelTimes`].
#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("Node {0} is unreachable from the center")]
    Unreachable(NodeId),
    #[error("Node {0} lies beyond the search bound of {1}s")]
    BeyondBound(NodeId, TravelTime),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    /// One shortest-path tree grown from the center
    #[default]
    SingleSource,
    /// One target-terminated query per node, spread over the rayon pool
    PerTarget,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub strategy: SolverStrategy,
    /// Upper bound on searched travel time; nodes further away count as unreachable
    pub max_travel_time: Option<TravelTime>,
}

/// Computes the shortest travel time from `center` to every node of the network.
///
/// # Errors
///
/// Returns `InvalidNodeId` if `center` is not part of the network
pub fn solve_travel_times(
    network: &RoadNetwork,
    center: NodeId,
    options: &SolverOptions,
) -> Result<TravelTimes, Error> {
    let start = network
        .node_index(center)
        .ok_or(Error::InvalidNodeId(center))?;

    let times = match options.strategy {
        SolverStrategy::SingleSource => single_source(network, start, options.max_travel_time),
        SolverStrategy::PerTarget => per_target(network, start, options.max_travel_time),
    };

    let excluded = network.node_count() - times.len();
    info!(
        "Solved travel times for {} of {} nodes",
        times.len(),
        network.node_count()
    );
    if excluded > 0 {
        debug!("{excluded} nodes are unreachable from center {center} and will be dropped");
    }

    Ok(times)
}

fn single_source(
    network: &RoadNetwork,
    start: NodeIndex,
    max_cost: Option<TravelTime>,
) -> TravelTimes {
    dijkstra_travel_times(network, start, None, max_cost)
        .into_iter()
        .map(|(idx, time)| (network.graph[idx].id, time))
        .collect()
}

/// Scatter one query per node, then gather the successes into one map
fn per_target(network: &RoadNetwork, start: NodeIndex, max_cost: Option<TravelTime>) -> TravelTimes {
    let targets: Vec<NodeIndex> = network.graph.node_indices().collect();

    let reached: Vec<(NodeId, TravelTime)> = targets
        .par_iter()
        .filter_map(|&target| {
            let id = network.graph[target].id;
            match route_travel_time(network, start, target, max_cost) {
                Ok(time) => Some((id, time)),
                Err(e) => {
                    trace!("Skipping node {id}: {e}");
                    None
                }
            }
        })
        .collect();

    reached.into_iter().collect()
}

/// Travel time of the shortest path from `start` to `target`
fn route_travel_time(
    network: &RoadNetwork,
    start: NodeIndex,
    target: NodeIndex,
    max_cost: Option<TravelTime>,
) -> Result<TravelTime, RouteError> {
    let id = network.graph[target].id;
    dijkstra_travel_times(network, start, Some(target), max_cost)
        .get(&target)
        .copied()
        .ok_or(match max_cost {
            Some(bound) => RouteError::BeyondBound(id, bound),
            None => RouteError::Unreachable(id),
        })
}
