//! Banding of nodes into travel-time zones.
//!
//! Zones are filled from the widest cutoff inwards: each pass runs a
//! radius-limited search from the center and overwrites the band of every
//! node it reaches, so a node ends up in the smallest zone that contains it.

use hashbrown::HashMap;
use itertools::Itertools;
use log::info;
use serde::Deserialize;

use crate::{Error, NodeId, RoadNetwork, TravelTime, routing::dijkstra_travel_times};

/// Label rendered for nodes outside every isochrone
pub const UNASSIGNED_LABEL: &str = "none";

/// One travel-time zone: everything reachable within `cutoff` seconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Isochrone {
    pub cutoff: TravelTime,
    pub label: String,
}

impl Isochrone {
    pub fn new(cutoff: TravelTime, label: impl Into<String>) -> Self {
        Self {
            cutoff,
            label: label.into(),
        }
    }
}

/// Innermost isochrone of every banded node
#[derive(Debug, Clone, PartialEq)]
pub struct BandAssignment {
    isochrones: Vec<Isochrone>,
    bands: HashMap<NodeId, usize>,
}

impl BandAssignment {
    pub fn isochrones(&self) -> &[Isochrone] {
        &self.isochrones
    }

    /// Index into [`Self::isochrones`], `None` when unassigned
    pub fn band_index(&self, node: NodeId) -> Option<usize> {
        self.bands.get(&node).copied()
    }

    pub fn band(&self, node: NodeId) -> Option<&Isochrone> {
        self.band_index(node).map(|idx| &self.isochrones[idx])
    }

    /// Band label, or [`UNASSIGNED_LABEL`]
    pub fn label(&self, node: NodeId) -> &str {
        self.band(node)
            .map_or(UNASSIGNED_LABEL, |isochrone| isochrone.label.as_str())
    }

    /// Labels in the network's node order, ready for a renderer
    pub fn labels_for<'a>(&'a self, network: &RoadNetwork) -> Vec<&'a str> {
        network.nodes().map(|node| self.label(node.id)).collect()
    }

    /// Number of nodes that ended up in each isochrone
    pub fn counts(&self) -> Vec<usize> {
        let per_band = self.bands.values().counts();
        (0..self.isochrones.len())
            .map(|idx| per_band.get(&idx).copied().unwrap_or_default())
            .collect()
    }

    /// Number of banded nodes
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

/// Assigns every node to the smallest isochrone whose cutoff covers its
/// travel time from `center` over the network's edges.
///
/// # Errors
///
/// Returns `InvalidNodeId` for an unknown center and `InvalidData` unless
/// cutoffs are finite, positive and strictly ascending
pub fn assign_bands(
    network: &RoadNetwork,
    center: NodeId,
    isochrones: &[Isochrone],
) -> Result<BandAssignment, Error> {
    validate_isochrones(isochrones)?;
    let start = network
        .node_index(center)
        .ok_or(Error::InvalidNodeId(center))?;

    let mut bands = HashMap::with_capacity(network.node_count());
    for (idx, isochrone) in isochrones.iter().enumerate().rev() {
        let reached = dijkstra_travel_times(network, start, None, Some(isochrone.cutoff));
        for node in reached.keys() {
            bands.insert(network.graph[*node].id, idx);
        }
    }

    let assignment = BandAssignment {
        isochrones: isochrones.to_vec(),
        bands,
    };
    info!(
        "Banded {} of {} nodes into {} isochrones {:?}",
        assignment.len(),
        network.node_count(),
        isochrones.len(),
        assignment.counts()
    );
    Ok(assignment)
}

pub(crate) fn validate_isochrones(isochrones: &[Isochrone]) -> Result<(), Error> {
    if let Some(bad) = isochrones
        .iter()
        .find(|isochrone| !isochrone.cutoff.is_finite() || isochrone.cutoff <= 0.0)
    {
        return Err(Error::InvalidData(format!(
            "Isochrone '{}' has invalid cutoff {}",
            bad.label, bad.cutoff
        )));
    }
    if let Some((a, b)) = isochrones
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.cutoff >= b.cutoff)
    {
        return Err(Error::InvalidData(format!(
            "Isochrone cutoffs must be strictly ascending, got {} before {}",
            a.cutoff, b.cutoff
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoadNode;
    use crate::fixtures::{C, F, chain_network, star_network};

    fn scenario_bands() -> Vec<Isochrone> {
        vec![
            Isochrone::new(15.0, "L1"),
            Isochrone::new(45.0, "L2"),
            Isochrone::new(75.0, "L3"),
        ]
    }

    #[test]
    fn test_innermost_band_wins() {
        let mut network = chain_network();
        network
            .add_node(RoadNode::new(5, 45.0, -72.9, 500.0, 0.0, 1))
            .unwrap();
        network.add_edge(4, 5, 40.0).unwrap();

        let bands = assign_bands(&network, 1, &scenario_bands()).unwrap();

        // Travel times 0, 10, 30, 60, 100
        assert_eq!(bands.label(1), "L1");
        assert_eq!(bands.label(2), "L1");
        assert_eq!(bands.label(3), "L2");
        assert_eq!(bands.label(4), "L3");
        assert_eq!(bands.label(5), UNASSIGNED_LABEL);
        assert_eq!(bands.band_index(5), None);
        assert_eq!(bands.counts(), vec![2, 1, 1]);
        assert_eq!(bands.labels_for(&network), vec!["L1", "L1", "L2", "L3", "none"]);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let network = chain_network();
        let bands = assign_bands(&network, 1, &[Isochrone::new(30.0, "within")]).unwrap();
        assert_eq!(bands.label(3), "within");
        assert_eq!(bands.label(4), UNASSIGNED_LABEL);
    }

    #[test]
    fn test_banding_is_idempotent() {
        let network = star_network();
        let first = assign_bands(&network, C, &scenario_bands()).unwrap();
        let second = assign_bands(&network, C, &scenario_bands()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.label(F), UNASSIGNED_LABEL);
    }

    #[test]
    fn test_bands_are_nested() {
        let network = star_network();
        let isochrones = scenario_bands();
        let bands = assign_bands(&network, C, &isochrones).unwrap();
        let start = network.node_index(C).unwrap();

        for node in network.nodes() {
            let Some(band) = bands.band_index(node.id) else {
                continue;
            };
            let idx = network.node_index(node.id).unwrap();
            for wider in &isochrones[band..] {
                let reached = dijkstra_travel_times(&network, start, None, Some(wider.cutoff));
                assert!(reached.contains_key(&idx), "node {} outside {}", node.id, wider.label);
            }
        }
    }

    #[test]
    fn test_rejects_unordered_cutoffs() {
        let network = star_network();
        for isochrones in [
            vec![Isochrone::new(45.0, "a"), Isochrone::new(15.0, "b")],
            vec![Isochrone::new(15.0, "a"), Isochrone::new(15.0, "b")],
            vec![Isochrone::new(0.0, "a")],
            vec![Isochrone::new(f64::NAN, "a")],
        ] {
            assert!(matches!(
                assign_bands(&network, C, &isochrones),
                Err(Error::InvalidData(_))
            ));
        }
    }

    #[test]
    fn test_no_isochrones_leaves_everything_unassigned() {
        let network = star_network();
        let bands = assign_bands(&network, C, &[]).unwrap();
        assert!(bands.is_empty());
        assert!(bands.counts().is_empty());
    }
}
