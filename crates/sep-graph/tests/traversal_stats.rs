use sep_graph::{
    average_degree, bfs_distances, bfs_levels, degree_distribution, degree_histogram,
    farthest_vertex, is_connected, tree_diameter, AdjacencyList,
};

fn star_with_tail() -> AdjacencyList {
    // 0 is the hub of 1, 2, 3; the tail 3-4-5 hangs off leaf 3.
    AdjacencyList::from_edge_list(6, &[(0, 1), (0, 2), (0, 3), (3, 4), (4, 5)]).unwrap()
}

#[test]
fn bfs_reports_hop_distances() {
    let graph = star_with_tail();
    let distances = bfs_distances(&graph, 0);
    assert_eq!(
        distances,
        vec![Some(0), Some(1), Some(1), Some(1), Some(2), Some(3)]
    );
    let levels = bfs_levels(&graph, 0);
    assert_eq!(levels, vec![vec![0], vec![1, 2, 3], vec![4], vec![5]]);
}

#[test]
fn unreachable_vertices_stay_unset() {
    let graph = AdjacencyList::from_edge_list(4, &[(0, 1), (2, 3)]).unwrap();
    assert_eq!(bfs_distances(&graph, 0), vec![Some(0), Some(1), None, None]);
    assert!(!is_connected(&graph));
    assert!(is_connected(&AdjacencyList::new(0)));
}

#[test]
fn diameter_uses_double_sweep() {
    let graph = star_with_tail();
    assert_eq!(farthest_vertex(&graph, 0), (5, 3));
    assert_eq!(tree_diameter(&graph), 4);
    assert_eq!(tree_diameter(&AdjacencyList::new(1)), 0);
}

#[test]
fn degree_histogram_caps_last_bin() {
    let graph = star_with_tail();
    assert_eq!(degree_histogram(&graph, 3), vec![0, 3, 3]);
    let distribution = degree_distribution(&graph, 4);
    assert_eq!(distribution.len(), 4);
    assert!((distribution[1] - 0.5).abs() < 1e-12);
    assert!((distribution[3] - 1.0 / 6.0).abs() < 1e-12);
    assert!((average_degree(&graph) - 10.0 / 6.0).abs() < 1e-12);
}
