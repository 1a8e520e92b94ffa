use geo::{Distance, Euclidean, Point};
use itertools::Itertools;

use crate::{Error, NodeId, RoadNetwork};

/// Finds the node closest to the query coordinate.
///
/// Distance is measured on raw latitude/longitude differences, which is
/// enough to pick a nearest node inside one city. Nodes are visited in
/// ascending id order and ties keep the first visited node, so the smallest
/// id wins.
///
/// # Errors
///
/// Returns `EmptyNetwork` if the network has no nodes
pub fn locate_center(network: &RoadNetwork, lat: f64, lon: f64) -> Result<NodeId, Error> {
    let query = Point::new(lon, lat);

    network
        .nodes()
        .sorted_by_key(|node| node.id)
        .fold(None, |best: Option<(NodeId, f64)>, node| {
            let distance = Euclidean.distance(&node.location, &query);
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((node.id, distance)),
            }
        })
        .map(|(id, _)| id)
        .ok_or(Error::EmptyNetwork)
}
