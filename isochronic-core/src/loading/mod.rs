//! Loading of exported road network tables (nodes and edges as CSV)

mod parser;
mod raw_types;

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

use crate::{Error, RoadNetwork, RoadNode};
use parser::deserialize_table;
use raw_types::{RawEdge, RawNode};

/// Locations of the node and edge tables
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSource {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
}

/// Builds a road network from a node table
/// (`osmid,lat,lon,x,y,street_count`) and an edge table (`u,v,travel_time`).
///
/// # Errors
///
/// Returns an error if a file is missing, a row cannot be parsed, or the
/// rows describe an invalid network (duplicate ids, dangling edges,
/// negative travel times)
pub fn load_network(source: &NetworkSource) -> Result<RoadNetwork, Error> {
    validate_source(source)?;

    info!("Reading nodes from {}", source.nodes_path.display());
    let nodes: Vec<RawNode> = deserialize_table(&source.nodes_path)?;
    info!("Reading edges from {}", source.edges_path.display());
    let edges: Vec<RawEdge> = deserialize_table(&source.edges_path)?;

    let mut network = RoadNetwork::with_capacity(nodes.len(), edges.len());
    for node in nodes {
        network.add_node(RoadNode::new(
            node.osmid,
            node.lat,
            node.lon,
            node.x,
            node.y,
            node.street_count,
        ))?;
    }
    for edge in edges {
        network.add_edge(edge.u, edge.v, edge.travel_time)?;
    }

    info!(
        "Loaded road network with {} nodes and {} edges",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

fn validate_source(source: &NetworkSource) -> Result<(), Error> {
    for path in [&source.nodes_path, &source.edges_path] {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Network table not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_tables(dir: &str, nodes: &str, edges: &str) -> NetworkSource {
        let dir = std::env::temp_dir().join(dir);
        fs::create_dir_all(&dir).unwrap();
        let source = NetworkSource {
            nodes_path: dir.join("nodes.csv"),
            edges_path: dir.join("edges.csv"),
        };
        fs::write(&source.nodes_path, nodes).unwrap();
        fs::write(&source.edges_path, edges).unwrap();
        source
    }

    #[test]
    fn test_load_network() {
        let source = write_tables(
            "isochronic_load_ok",
            "osmid,lat,lon,x,y,street_count,highway\n\
             10,45.50,-73.57,611000.0,5040000.0,3,\n\
             11,45.51,-73.58,611100.0,5041000.0,1,traffic_signals\n",
            "u,v,key,travel_time\n10,11,0,42.5\n11,10,0,42.5\n",
        );

        let network = load_network(&source).unwrap();
        assert_eq!(network.node_count(), 2);
        assert_eq!(network.edge_count(), 2);
        let node = network.node(11).unwrap();
        assert_eq!(node.street_count, 1);
        assert_eq!(node.lat(), 45.51);
        assert_eq!(node.lon(), -73.58);
        assert_eq!(node.position.x(), 611_100.0);
    }

    #[test]
    fn test_dangling_edge_is_rejected() {
        let source = write_tables(
            "isochronic_load_dangling",
            "osmid,lat,lon,x,y,street_count\n1,0,0,0,0,1\n",
            "u,v,travel_time\n1,2,5\n",
        );
        assert!(matches!(
            load_network(&source),
            Err(Error::InvalidNodeId(2))
        ));
    }

    #[test]
    fn test_malformed_row_is_rejected() {
        let source = write_tables(
            "isochronic_load_malformed",
            "osmid,lat,lon,x,y,street_count\n1,north,0,0,0,1\n",
            "u,v,travel_time\n",
        );
        assert!(matches!(load_network(&source), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_missing_file() {
        let source = NetworkSource {
            nodes_path: PathBuf::from("/nonexistent/nodes.csv"),
            edges_path: PathBuf::from("/nonexistent/edges.csv"),
        };
        assert!(matches!(load_network(&source), Err(Error::IoError(_))));
    }
}
