//! Directed road graph with id lookup

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{RoadEdge, RoadNode};
use crate::{Error, NodeId, TravelTime};

/// Road network owned by a single pipeline run.
///
/// Edges are directed; a two-way street is stored as two edges. Edge
/// geometry is derived from the endpoint positions when the edge is added,
/// so a network rebuilt from moved nodes never carries stale segments.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub(crate) graph: DiGraph<RoadNode, RoadEdge>,
    index: HashMap<NodeId, NodeIndex>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Inserts a node.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for a duplicate id or non-finite coordinates
    pub fn add_node(&mut self, node: RoadNode) -> Result<NodeIndex, Error> {
        if self.index.contains_key(&node.id) {
            return Err(Error::InvalidData(format!("Duplicate node id {}", node.id)));
        }
        let coords = [
            node.location.x(),
            node.location.y(),
            node.position.x(),
            node.position.y(),
        ];
        if !coords.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidData(format!(
                "Node {} has non-finite coordinates",
                node.id
            )));
        }

        let id = node.id;
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(idx)
    }

    /// Inserts a directed edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeId` if an endpoint is missing and `InvalidData`
    /// if the travel time is negative or not finite
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        travel_time: TravelTime,
    ) -> Result<EdgeIndex, Error> {
        if !travel_time.is_finite() || travel_time < 0.0 {
            return Err(Error::InvalidData(format!(
                "Edge {from} -> {to} has invalid travel time {travel_time}"
            )));
        }
        let source = self.node_index(from).ok_or(Error::InvalidNodeId(from))?;
        let target = self.node_index(to).ok_or(Error::InvalidNodeId(to))?;

        let edge = RoadEdge::between(
            self.graph[source].position,
            self.graph[target].position,
            travel_time,
        );
        Ok(self.graph.add_edge(source, target, edge))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&RoadNode> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.graph.node_weights()
    }

    /// Edges as `(from, to, edge)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&RoadNode, &RoadNode, &RoadEdge)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()], edge.weight()))
    }

    pub fn graph(&self) -> &DiGraph<RoadNode, RoadEdge> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;

    use super::*;

    #[test]
    fn test_edge_geometry_follows_endpoints() {
        let mut network = RoadNetwork::new();
        network
            .add_node(RoadNode::new(1, 45.0, -73.0, 0.0, 0.0, 1))
            .unwrap();
        network
            .add_node(RoadNode::new(2, 45.1, -73.1, 3.0, 4.0, 1))
            .unwrap();
        network.add_edge(1, 2, 12.5).unwrap();

        let (from, to, edge) = network.edges().next().unwrap();
        assert_eq!(from.id, 1);
        assert_eq!(to.id, 2);
        assert_eq!(
            edge.geometry.0,
            vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 }]
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut network = RoadNetwork::new();
        network
            .add_node(RoadNode::new(1, 45.0, -73.0, 0.0, 0.0, 1))
            .unwrap();
        network
            .add_node(RoadNode::new(2, 45.0, -73.0, 1.0, 0.0, 1))
            .unwrap();

        assert!(matches!(
            network.add_node(RoadNode::new(1, 0.0, 0.0, 0.0, 0.0, 0)),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            network.add_node(RoadNode::new(3, f64::NAN, 0.0, 0.0, 0.0, 0)),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            network.add_edge(1, 9, 1.0),
            Err(Error::InvalidNodeId(9))
        ));
        assert!(matches!(
            network.add_edge(1, 2, -1.0),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            network.add_edge(1, 2, f64::INFINITY),
            Err(Error::InvalidData(_))
        ));
        assert_eq!(network.edge_count(), 0);
    }
}
