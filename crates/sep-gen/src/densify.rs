use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use sep_core::errors::{ErrorInfo, SepError};
use sep_core::rng::RngHandle;
use sep_graph::{bfs_distances, AdjacencyList, GraphView};

use crate::distance::DistanceFn;
use crate::locality::LocalityTable;
use crate::tree::random_tree;

/// Largest number of undirected edges a simple graph on `n` vertices holds.
pub fn max_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Consecutive rejected draws tolerated before a densifier gives up.
pub fn stall_budget(n: usize) -> usize {
    1_000 + 64 * n
}

/// Random tree densified with ring-local edges `(u, u + offset)` until it
/// holds `m` undirected edges.
///
/// `u` is uniform and the offset comes from a [`LocalityTable`] for
/// `distance`. Requests below `n - 1` edges return the spanning tree.
pub fn ring_local_graph(
    n: usize,
    m: usize,
    distance: DistanceFn,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    check_edge_budget(n, m)?;
    let mut graph = random_tree(n, rng);
    if m <= n.saturating_sub(1) {
        return Ok(graph);
    }
    let table = LocalityTable::new(n, distance)?;
    densify(&mut graph, m, rng, |_, rng| {
        let u = rng.gen_range(0..n);
        Some((u, table.sample_neighbor(u, rng)))
    })?;
    Ok(graph)
}

/// Random tree densified by tree-distance locality.
///
/// Every new edge picks a uniform `u`, runs a BFS from `u` in the current
/// graph and draws `v` with weight `1 / d^exponent` among vertices at
/// distance `d > 1`. Existing neighbors and `u` itself never qualify.
pub fn tree_local_graph(
    n: usize,
    m: usize,
    exponent: f64,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    if !exponent.is_finite() || exponent < 0.0 {
        return Err(SepError::Generator(
            ErrorInfo::new("invalid-exponent", "distance exponent must be finite and >= 0")
                .with_context("exponent", exponent),
        ));
    }
    check_edge_budget(n, m)?;
    let mut graph = random_tree(n, rng);
    densify(&mut graph, m, rng, |graph, rng| {
        let u = rng.gen_range(0..n);
        let weights: Vec<f64> = bfs_distances(graph, u)
            .into_iter()
            .map(|d| match d {
                Some(d) if d > 1 => (d as f64).powf(-exponent),
                _ => 0.0,
            })
            .collect();
        // Fails only when u already reaches everything in one hop.
        let index = WeightedIndex::new(&weights).ok()?;
        Some((u, index.sample(rng)))
    })?;
    Ok(graph)
}

/// Random tree densified with uniformly random edges.
pub fn uniform_graph(n: usize, m: usize, rng: &mut RngHandle) -> Result<AdjacencyList, SepError> {
    check_edge_budget(n, m)?;
    let mut graph = random_tree(n, rng);
    if n < 2 {
        return Ok(graph);
    }
    densify(&mut graph, m, rng, |_, rng| {
        Some((rng.gen_range(0..n), rng.gen_range(0..n)))
    })?;
    Ok(graph)
}

/// Uniform densification targeting `round(avg_degree * n / 2)` edges.
pub fn average_degree_graph(
    n: usize,
    avg_degree: f64,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    if !avg_degree.is_finite() || avg_degree < 0.0 {
        return Err(SepError::Generator(
            ErrorInfo::new("invalid-average-degree", "average degree must be finite and >= 0")
                .with_context("avg_degree", avg_degree),
        ));
    }
    let m = (avg_degree * n as f64 / 2.0).round() as usize;
    uniform_graph(n, m, rng)
}

fn check_edge_budget(n: usize, m: usize) -> Result<(), SepError> {
    if m > max_edges(n) {
        return Err(SepError::Generator(
            ErrorInfo::new("too-many-edges", "requested more edges than a simple graph holds")
                .with_context("vertices", n)
                .with_context("edges", m)
                .with_context("max_edges", max_edges(n)),
        ));
    }
    Ok(())
}

/// Adds proposed edges until `graph` holds `m` undirected edges, rejecting
/// self loops and duplicates. A `None` proposal counts as a rejection.
fn densify<F>(
    graph: &mut AdjacencyList,
    m: usize,
    rng: &mut RngHandle,
    mut propose: F,
) -> Result<(), SepError>
where
    F: FnMut(&AdjacencyList, &mut RngHandle) -> Option<(usize, usize)>,
{
    let n = graph.num_vertices();
    let budget = stall_budget(n);
    let mut edges = graph.num_undirected_edges();
    let mut stalled = 0;

    while edges < m {
        match propose(&*graph, rng) {
            Some((u, v)) if u != v && !graph.has_edge(u, v) => {
                graph.add_undirected_edge(u, v);
                edges += 1;
                stalled = 0;
            }
            _ => {
                stalled += 1;
                if stalled > budget {
                    return Err(SepError::Generator(
                        ErrorInfo::new("sampling-stalled", "rejection sampling made no progress")
                            .with_context("edges", edges)
                            .with_context("target", m)
                            .with_context("attempts", stalled)
                            .with_hint("lower the edge count or pick a weaker locality bias"),
                    ));
                }
            }
        }
    }
    Ok(())
}
