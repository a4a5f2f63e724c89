use std::collections::BTreeSet;

use sep_core::errors::{ErrorInfo, SepError};
use sep_core::VertexId;

/// Read access shared by both graph encodings.
pub trait GraphView {
    /// Number of vertices; ids are `0..num_vertices()`.
    fn num_vertices(&self) -> usize;

    /// Out-neighbors of `vertex` in stored order.
    fn neighbors(&self, vertex: VertexId) -> &[VertexId];

    /// Out-degree of `vertex`.
    fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// Linear scan over the neighbor list of `from`.
    ///
    /// Only meant for short lists (recent-neighbor checks during generation),
    /// not for dense adjacency queries.
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Total number of stored directed entries.
    fn num_directed_edges(&self) -> usize {
        (0..self.num_vertices()).map(|v| self.degree(v)).sum()
    }

    /// Returns whether every `u -> v` has a matching `v -> u`.
    fn is_symmetric(&self) -> bool {
        (0..self.num_vertices()).all(|u| {
            self.neighbors(u)
                .iter()
                .all(|&v| v < self.num_vertices() && self.has_edge(v, u))
        })
    }

    /// Undirected edges `(u, v)` with `u < v`, assuming a symmetric graph.
    fn undirected_edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for u in 0..self.num_vertices() {
            for &v in self.neighbors(u) {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Number of undirected edges, assuming a symmetric graph.
    fn num_undirected_edges(&self) -> usize {
        self.undirected_edges().len()
    }
}

/// Adjacency-list encoding: one neighbor vector per vertex.
///
/// Entries are not deduplicated; callers that need a simple graph must avoid
/// inserting an edge twice or call [`AdjacencyList::symmetrize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyList {
    lists: Vec<Vec<VertexId>>,
}

impl AdjacencyList {
    /// Creates `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            lists: vec![Vec::new(); n],
        }
    }

    /// Wraps existing neighbor lists after checking every id is in range.
    pub fn from_lists(lists: Vec<Vec<VertexId>>) -> Result<Self, SepError> {
        let graph = Self { lists };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds an undirected graph on `n` vertices from an edge list.
    pub fn from_edge_list(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self, SepError> {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(SepError::InvalidGraphEncoding(
                    ErrorInfo::new("neighbor-out-of-range", "edge endpoint exceeds vertex count")
                        .with_context("from", u)
                        .with_context("to", v)
                        .with_context("vertices", n),
                ));
            }
            graph.add_undirected_edge(u, v);
        }
        Ok(graph)
    }

    /// Checks that every neighbor id refers to an existing vertex.
    pub fn validate(&self) -> Result<(), SepError> {
        let n = self.lists.len();
        for (vertex, list) in self.lists.iter().enumerate() {
            if let Some(&bad) = list.iter().find(|&&v| v >= n) {
                return Err(SepError::InvalidGraphEncoding(
                    ErrorInfo::new("neighbor-out-of-range", "neighbor id exceeds vertex count")
                        .with_context("vertex", vertex)
                        .with_context("neighbor", bad)
                        .with_context("vertices", n),
                ));
            }
        }
        Ok(())
    }

    /// Appends `to` to the neighbor list of `from`.
    pub fn add_directed_edge(&mut self, from: VertexId, to: VertexId) {
        self.lists[from].push(to);
    }

    /// Appends both directions of `{u, v}`.
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId) {
        self.lists[u].push(v);
        self.lists[v].push(u);
    }

    /// Borrowed neighbor lists.
    pub fn lists(&self) -> &[Vec<VertexId>] {
        &self.lists
    }

    /// Consumes the graph and returns its neighbor lists.
    pub fn into_lists(self) -> Vec<Vec<VertexId>> {
        self.lists
    }

    /// Ensures `v -> u` for every `u -> v`, replacing the lists with sorted,
    /// duplicate-free ones.
    pub fn symmetrize(&mut self) {
        let sets = symmetric_sets(self);
        self.lists = sets.into_iter().map(|set| set.into_iter().collect()).collect();
    }

    /// Flattens the lists in vertex-id order, keeping per-vertex order.
    pub fn to_compressed(&self) -> CompressedGraph {
        let mut offsets = Vec::with_capacity(self.lists.len() + 1);
        let mut neighbors = Vec::with_capacity(self.lists.iter().map(Vec::len).sum());
        offsets.push(0);
        for list in &self.lists {
            neighbors.extend_from_slice(list);
            offsets.push(neighbors.len());
        }
        CompressedGraph { offsets, neighbors }
    }
}

impl GraphView for AdjacencyList {
    fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.lists[vertex]
    }
}

/// Compressed encoding: `neighbors[offsets[i]..offsets[i + 1]]` are the
/// out-neighbors of vertex `i`.
///
/// Invariants: `offsets[0] == 0`, offsets never decrease,
/// `offsets[n] == neighbors.len()` and every neighbor id is below `n`. They are
/// checked by [`CompressedGraph::new`] only; everything built inside the crate
/// upholds them by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedGraph {
    offsets: Vec<usize>,
    neighbors: Vec<VertexId>,
}

impl Default for CompressedGraph {
    fn default() -> Self {
        Self::isolated(0)
    }
}

impl CompressedGraph {
    /// Validates and wraps an externally supplied `(offsets, neighbors)` pair.
    pub fn new(offsets: Vec<usize>, neighbors: Vec<VertexId>) -> Result<Self, SepError> {
        validate_encoding(&offsets, &neighbors)?;
        Ok(Self { offsets, neighbors })
    }

    /// Builds from parts that already satisfy the encoding invariants.
    pub(crate) fn from_parts_unchecked(offsets: Vec<usize>, neighbors: Vec<VertexId>) -> Self {
        debug_assert!(validate_encoding(&offsets, &neighbors).is_ok());
        Self { offsets, neighbors }
    }

    /// Creates `n` vertices without edges.
    pub fn isolated(n: usize) -> Self {
        Self {
            offsets: vec![0; n + 1],
            neighbors: Vec::new(),
        }
    }

    /// Offset array of length `n + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Flat neighbor array.
    pub fn neighbor_array(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Consumes the graph and returns `(offsets, neighbors)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<VertexId>) {
        (self.offsets, self.neighbors)
    }

    /// Expands back into one list per vertex.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let lists = self
            .offsets
            .windows(2)
            .map(|window| self.neighbors[window[0]..window[1]].to_vec())
            .collect();
        AdjacencyList { lists }
    }

    /// Ensures `v -> u` for every `u -> v`; rebuilds both arrays with sorted,
    /// duplicate-free neighbor ranges.
    pub fn symmetrize(&mut self) {
        let sets = symmetric_sets(self);
        let mut offsets = Vec::with_capacity(sets.len() + 1);
        let mut neighbors = Vec::with_capacity(sets.iter().map(BTreeSet::len).sum());
        offsets.push(0);
        for set in sets {
            neighbors.extend(set);
            offsets.push(neighbors.len());
        }
        self.offsets = offsets;
        self.neighbors = neighbors;
    }

    /// Owned variant of [`CompressedGraph::symmetrize`].
    pub fn symmetrized(mut self) -> Self {
        self.symmetrize();
        self
    }
}

impl GraphView for CompressedGraph {
    fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.neighbors[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    fn num_directed_edges(&self) -> usize {
        self.neighbors.len()
    }
}

impl From<&AdjacencyList> for CompressedGraph {
    fn from(value: &AdjacencyList) -> Self {
        value.to_compressed()
    }
}

impl From<&CompressedGraph> for AdjacencyList {
    fn from(value: &CompressedGraph) -> Self {
        value.to_adjacency_list()
    }
}

/// Flattens an adjacency list; see [`AdjacencyList::to_compressed`].
pub fn to_compressed(graph: &AdjacencyList) -> CompressedGraph {
    graph.to_compressed()
}

/// Expands a compressed graph; see [`CompressedGraph::to_adjacency_list`].
pub fn to_adjacency_list(graph: &CompressedGraph) -> AdjacencyList {
    graph.to_adjacency_list()
}

fn symmetric_sets<G: GraphView>(graph: &G) -> Vec<BTreeSet<VertexId>> {
    let mut sets = vec![BTreeSet::new(); graph.num_vertices()];
    for u in 0..graph.num_vertices() {
        for &v in graph.neighbors(u) {
            sets[u].insert(v);
            sets[v].insert(u);
        }
    }
    sets
}

fn validate_encoding(offsets: &[usize], neighbors: &[VertexId]) -> Result<(), SepError> {
    let Some(&first) = offsets.first() else {
        return Err(SepError::encoding(
            "empty-offsets",
            "offsets must contain at least one entry",
        ));
    };
    if first != 0 {
        return Err(SepError::InvalidGraphEncoding(
            ErrorInfo::new("nonzero-first-offset", "offsets must start at zero")
                .with_context("first", first),
        ));
    }
    if let Some(position) = offsets.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(SepError::InvalidGraphEncoding(
            ErrorInfo::new("offsets-not-monotonic", "offsets must be non-decreasing")
                .with_context("vertex", position)
                .with_context("start", offsets[position])
                .with_context("end", offsets[position + 1]),
        ));
    }
    let last = offsets[offsets.len() - 1];
    if last != neighbors.len() {
        return Err(SepError::InvalidGraphEncoding(
            ErrorInfo::new(
                "offsets-length-mismatch",
                "last offset must equal the neighbor count",
            )
            .with_context("last", last)
            .with_context("neighbors", neighbors.len()),
        ));
    }
    let n = offsets.len() - 1;
    if let Some(position) = neighbors.iter().position(|&v| v >= n) {
        return Err(SepError::InvalidGraphEncoding(
            ErrorInfo::new("neighbor-out-of-range", "neighbor id exceeds vertex count")
                .with_context("position", position)
                .with_context("neighbor", neighbors[position])
                .with_context("vertices", n)
                .with_hint("neighbor ids must lie in 0..n"),
        ));
    }
    Ok(())
}
