use sep_core::errors::{ErrorInfo, SepError};
use serde::{Deserialize, Serialize};

use crate::graph::CompressedGraph;

const FORMAT_VERSION: u32 = 1;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &CompressedGraph) -> Result<Vec<u8>, SepError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| SepError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<CompressedGraph, SepError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| SepError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &CompressedGraph) -> Result<String, SepError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| SepError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<CompressedGraph, SepError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| SepError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    version: u32,
    offsets: Vec<u64>,
    neighbors: Vec<u64>,
}

impl SerializableGraph {
    fn from_graph(graph: &CompressedGraph) -> Self {
        Self {
            version: FORMAT_VERSION,
            offsets: graph.offsets().iter().map(|&o| o as u64).collect(),
            neighbors: graph.neighbor_array().iter().map(|&v| v as u64).collect(),
        }
    }

    fn into_graph(self) -> Result<CompressedGraph, SepError> {
        if self.version != FORMAT_VERSION {
            return Err(SepError::Serde(
                ErrorInfo::new("unsupported-version", "graph payload has an unknown version")
                    .with_context("version", self.version)
                    .with_context("expected", FORMAT_VERSION),
            ));
        }
        let offsets = self.offsets.into_iter().map(|o| o as usize).collect();
        let neighbors = self.neighbors.into_iter().map(|v| v as usize).collect();
        CompressedGraph::new(offsets, neighbors)
    }
}
