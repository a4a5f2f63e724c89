//! Connected components of a fragment after removing a separator.

use std::collections::BTreeSet;

use sep_core::VertexId;

use crate::graph::{CompressedGraph, GraphView};

/// Independently re-indexed subgraph produced by the decomposition.
///
/// Vertices are numbered `0..size()`. `origin_ids()[i]` is the id local
/// vertex `i` had in the root graph the decomposition started from; the table
/// is plain data, a fragment holds no reference to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    graph: CompressedGraph,
    origin_ids: Vec<VertexId>,
    depth: usize,
}

impl Fragment {
    /// Wraps a whole input graph as the root fragment of a decomposition.
    pub fn root(graph: CompressedGraph) -> Self {
        let origin_ids = (0..graph.num_vertices()).collect();
        Self {
            graph,
            origin_ids,
            depth: 0,
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.graph.num_vertices()
    }

    /// Induced subgraph on the re-indexed vertices.
    pub fn graph(&self) -> &CompressedGraph {
        &self.graph
    }

    /// Root-graph id of every local vertex.
    pub fn origin_ids(&self) -> &[VertexId] {
        &self.origin_ids
    }

    /// Recursion depth; the root fragment has depth zero.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the fragment and returns its graph.
    pub fn into_graph(self) -> CompressedGraph {
        self.graph
    }
}

/// Labels every non-separator vertex with the lowest id of its component.
///
/// Separator vertices get `None`. Components are found with an explicit
/// stack, so deep fragments cannot overflow the call stack. Traversal follows
/// stored out-edges; callers pass symmetric graphs. Separator ids outside
/// `0..n` are ignored.
pub fn partition_labels(
    graph: &CompressedGraph,
    separator: &BTreeSet<VertexId>,
) -> Vec<Option<VertexId>> {
    let n = graph.num_vertices();
    let in_separator = separator_mask(n, separator);
    let mut labels = vec![None; n];
    let mut stack = Vec::new();

    for start in 0..n {
        if labels[start].is_some() || in_separator[start] {
            continue;
        }
        labels[start] = Some(start);
        stack.push(start);
        while let Some(current) = stack.pop() {
            for &next in graph.neighbors(current) {
                if labels[next].is_none() && !in_separator[next] {
                    labels[next] = Some(start);
                    stack.push(next);
                }
            }
        }
    }

    labels
}

/// Splits `fragment` minus `separator` into one fragment per component.
///
/// Output is ordered by ascending label. Inside a component, vertices keep
/// their relative order and only edges between members survive. Isolated
/// vertices become fragments of size one; separator vertices are dropped.
pub fn extract_components(fragment: &Fragment, separator: &BTreeSet<VertexId>) -> Vec<Fragment> {
    let graph = fragment.graph();
    let n = graph.num_vertices();
    let labels = partition_labels(graph, separator);

    // Labels are component start vertices, so scanning in id order meets
    // them in ascending order.
    let mut slot_of_label: Vec<Option<usize>> = vec![None; n];
    let mut local_id = vec![0usize; n];
    let mut members: Vec<Vec<VertexId>> = Vec::new();
    for vertex in 0..n {
        let Some(label) = labels[vertex] else {
            continue;
        };
        let slot = *slot_of_label[label].get_or_insert_with(|| {
            members.push(Vec::new());
            members.len() - 1
        });
        local_id[vertex] = members[slot].len();
        members[slot].push(vertex);
    }

    members
        .into_iter()
        .map(|component| {
            let mut offsets = Vec::with_capacity(component.len() + 1);
            let mut neighbors = Vec::new();
            offsets.push(0);
            for &u in &component {
                for &v in graph.neighbors(u) {
                    if labels[v] == labels[u] {
                        neighbors.push(local_id[v]);
                    }
                }
                offsets.push(neighbors.len());
            }
            let origin_ids = component
                .iter()
                .map(|&u| fragment.origin_ids[u])
                .collect();
            Fragment {
                graph: CompressedGraph::from_parts_unchecked(offsets, neighbors),
                origin_ids,
                depth: fragment.depth + 1,
            }
        })
        .collect()
}

fn separator_mask(n: usize, separator: &BTreeSet<VertexId>) -> Vec<bool> {
    let mut mask = vec![false; n];
    for &vertex in separator.range(..n) {
        mask[vertex] = true;
    }
    mask
}
