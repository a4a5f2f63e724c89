use sha2::{Digest, Sha256};

use crate::graph::{CompressedGraph, GraphView};

/// Computes a structural hash that ignores the order inside neighbor ranges.
pub fn canonical_hash(graph: &CompressedGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.num_vertices() as u64).to_le_bytes());

    let mut scratch = Vec::new();
    for vertex in 0..graph.num_vertices() {
        scratch.clear();
        scratch.extend_from_slice(graph.neighbors(vertex));
        scratch.sort_unstable();
        hasher.update((scratch.len() as u64).to_le_bytes());
        for &neighbor in &scratch {
            hasher.update((neighbor as u64).to_le_bytes());
        }
    }

    format!("{:x}", hasher.finalize())
}
