use std::collections::VecDeque;

use sep_core::VertexId;

use crate::graph::GraphView;

/// Hop distances from `start`; unreachable vertices are `None`.
pub fn bfs_distances<G: GraphView>(graph: &G, start: VertexId) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.num_vertices()];
    let mut queue = VecDeque::new();
    distances[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current].map_or(0, |d| d + 1);
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// BFS levels from `start`: `levels[d]` holds the vertices at distance `d`,
/// sorted by id. Unreachable vertices appear in no level.
pub fn bfs_levels<G: GraphView>(graph: &G, start: VertexId) -> Vec<Vec<VertexId>> {
    let distances = bfs_distances(graph, start);
    let depth = distances.iter().flatten().copied().max().unwrap_or(0);
    let mut levels = vec![Vec::new(); depth + 1];
    let mut order: Vec<(usize, VertexId)> = distances
        .iter()
        .enumerate()
        .filter_map(|(vertex, d)| d.map(|d| (d, vertex)))
        .collect();
    order.sort_unstable();
    for (d, vertex) in order {
        levels[d].push(vertex);
    }
    levels
}

/// Vertex with the largest finite distance from `start` and that distance.
///
/// Ties go to the lowest id.
pub fn farthest_vertex<G: GraphView>(graph: &G, start: VertexId) -> (VertexId, usize) {
    let mut best = (start, 0);
    for (vertex, distance) in bfs_distances(graph, start).into_iter().enumerate() {
        if let Some(distance) = distance {
            if distance > best.1 {
                best = (vertex, distance);
            }
        }
    }
    best
}

/// Exact diameter of a tree by double sweep; a lower bound on general graphs.
pub fn tree_diameter<G: GraphView>(graph: &G) -> usize {
    if graph.num_vertices() == 0 {
        return 0;
    }
    let (far, _) = farthest_vertex(graph, 0);
    farthest_vertex(graph, far).1
}

/// Whether every vertex is reachable from vertex 0. The empty graph counts as
/// connected.
pub fn is_connected<G: GraphView>(graph: &G) -> bool {
    if graph.num_vertices() == 0 {
        return true;
    }
    bfs_distances(graph, 0).iter().all(Option::is_some)
}
