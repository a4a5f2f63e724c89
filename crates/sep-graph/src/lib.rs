#![deny(missing_docs)]

//! Graph encodings, component extraction and traversal helpers used by the
//! separator decomposition.
//!
//! Two encodings describe the same vertex set `0..n`: [`AdjacencyList`] (one
//! neighbor vector per vertex) and [`CompressedGraph`] (offsets plus a flat
//! neighbor array). Conversions between them are total and lossless up to the
//! order inside a neighbor list.

mod components;
mod graph;
mod hash;
mod serialization;
mod stats;
mod traversal;

pub use components::{extract_components, partition_labels, Fragment};
pub use graph::{to_adjacency_list, to_compressed, AdjacencyList, CompressedGraph, GraphView};
pub use hash::canonical_hash;
pub use stats::{average_degree, degree_distribution, degree_histogram};
pub use traversal::{bfs_distances, bfs_levels, farthest_vertex, is_connected, tree_diameter};

// bincode and JSON codecs.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
