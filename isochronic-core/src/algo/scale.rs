//! Global scale factor between straight-line distance and travel time

use geo::{Distance, Euclidean};
use hashbrown::HashMap;
use itertools::Itertools;
use log::info;

use crate::{Error, NodeId, RoadNetwork, routing::TravelTimes};

/// Planar straight-line distance from the center to every node.
/// The center maps to exactly `0.0`.
pub type BirdDistances = HashMap<NodeId, f64>;

/// Measures every node's planar distance from `center`, reachable or not.
///
/// # Errors
///
/// Returns `InvalidNodeId` if `center` is not part of the network
pub fn bird_distances(network: &RoadNetwork, center: NodeId) -> Result<BirdDistances, Error> {
    let origin = network
        .node(center)
        .ok_or(Error::InvalidNodeId(center))?
        .position;

    Ok(network
        .nodes()
        .map(|node| {
            let distance = if node.id == center {
                0.0
            } else {
                Euclidean.distance(&origin, &node.position)
            };
            (node.id, distance)
        })
        .collect())
}

/// Ratio of mean bird distance to mean travel time over the nodes present in both maps.
///
/// # Errors
///
/// Returns `DegenerateNetwork` if the maps share no node, or if either mean
/// is zero, since no node could be warped meaningfully then
#[allow(clippy::cast_precision_loss)]
pub fn scale_factor(bird: &BirdDistances, travel: &TravelTimes) -> Result<f64, Error> {
    // Summed in id order so the factor does not depend on map iteration order
    let (count, bird_sum, travel_sum) = travel
        .iter()
        .filter_map(|(id, &time)| bird.get(id).map(|&distance| (*id, distance, time)))
        .sorted_by_key(|&(id, _, _)| id)
        .fold((0usize, 0.0, 0.0), |(count, bird_sum, travel_sum), (_, distance, time)| {
            (count + 1, bird_sum + distance, travel_sum + time)
        });

    if count == 0 {
        return Err(Error::DegenerateNetwork(
            "no node has both a travel time and a bird distance".to_string(),
        ));
    }

    let bird_mean = bird_sum / count as f64;
    let travel_mean = travel_sum / count as f64;
    if bird_mean == 0.0 || travel_mean == 0.0 {
        return Err(Error::DegenerateNetwork(format!(
            "mean bird distance {bird_mean} and mean travel time {travel_mean} must both be non-zero"
        )));
    }

    let factor = bird_mean / travel_mean;
    if !factor.is_finite() {
        return Err(Error::DegenerateNetwork(format!(
            "scale factor {factor} is not finite"
        )));
    }

    info!(
        "Scale factor {factor:.6} from {count} nodes (mean distance {bird_mean:.1}, mean travel time {travel_mean:.1}s)"
    );
    Ok(factor)
}
