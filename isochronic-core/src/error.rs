use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network has no nodes")]
    EmptyNetwork,
    #[error("Degenerate network: {0}")]
    DegenerateNetwork(String),
    #[error("Invalid node id: {0}")]
    InvalidNodeId(NodeId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
