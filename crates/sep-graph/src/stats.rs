use crate::graph::GraphView;

/// Vertex counts per degree; the last bin collects every degree
/// `>= bins - 1`.
pub fn degree_histogram<G: GraphView>(graph: &G, bins: usize) -> Vec<usize> {
    let mut histogram = vec![0usize; bins];
    if bins == 0 {
        return histogram;
    }
    for vertex in 0..graph.num_vertices() {
        let bin = graph.degree(vertex).min(bins - 1);
        histogram[bin] += 1;
    }
    histogram
}

/// [`degree_histogram`] normalized by the vertex count.
pub fn degree_distribution<G: GraphView>(graph: &G, bins: usize) -> Vec<f64> {
    let n = graph.num_vertices();
    degree_histogram(graph, bins)
        .into_iter()
        .map(|count| if n == 0 { 0.0 } else { count as f64 / n as f64 })
        .collect()
}

/// Mean out-degree.
pub fn average_degree<G: GraphView>(graph: &G) -> f64 {
    let n = graph.num_vertices();
    if n == 0 {
        return 0.0;
    }
    graph.num_directed_edges() as f64 / n as f64
}
