use std::collections::BTreeSet;

use sep_core::rng::RngHandle;
use sep_decomp::{compute_separator, LevelStructureOracle, QualityLevel, SeparatorRequest};
use sep_graph::{extract_components, AdjacencyList, CompressedGraph, Fragment};

fn path(n: usize) -> CompressedGraph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    AdjacencyList::from_edge_list(n, &edges).unwrap().to_compressed()
}

fn grid(side: usize) -> CompressedGraph {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push((v, v + 1));
            }
            if row + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    AdjacencyList::from_edge_list(side * side, &edges)
        .unwrap()
        .to_compressed()
}

fn separate(graph: &CompressedGraph, quality: QualityLevel, seed: u64) -> BTreeSet<usize> {
    let request = SeparatorRequest {
        quality,
        ..SeparatorRequest::default()
    };
    let mut rng = RngHandle::from_seed(seed);
    compute_separator(&LevelStructureOracle::default(), graph, &request, &mut rng).unwrap()
}

#[test]
fn path_is_cut_in_the_middle() {
    for seed in 0..8 {
        assert_eq!(separate(&path(101), QualityLevel::Eco, seed), BTreeSet::from([50]));
    }
}

#[test]
fn grid_is_cut_along_a_diagonal() {
    let graph = grid(10);
    let separator = separate(&graph, QualityLevel::Eco, 4);
    assert_eq!(separator.len(), 9);

    let children = extract_components(&Fragment::root(graph), &separator);
    let mut sizes: Vec<usize> = children.iter().map(Fragment::size).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![36, 55]);
}

#[test]
fn fast_separators_split_the_graph() {
    let graph = grid(12);
    for seed in 0..5 {
        let separator = separate(&graph, QualityLevel::Fast, seed);
        assert!(!separator.is_empty());
        let children = extract_components(&Fragment::root(graph.clone()), &separator);
        assert!(children.len() >= 2, "seed {seed}: {} children", children.len());
    }
}

#[test]
fn strong_is_never_worse_than_eco() {
    let graph = grid(15);
    for seed in 0..5 {
        let eco = separate(&graph, QualityLevel::Eco, seed);
        let strong = separate(&graph, QualityLevel::Strong, seed);
        assert!(strong.len() <= eco.len());
    }
}

#[test]
fn social_tiers_behave_like_their_base() {
    let graph = grid(9);
    assert_eq!(
        separate(&graph, QualityLevel::EcoSocial, 2),
        separate(&graph, QualityLevel::Eco, 2)
    );
}

#[test]
fn disconnected_graph_needs_no_separator() {
    let graph = AdjacencyList::from_edge_list(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)])
        .unwrap()
        .to_compressed();
    for quality in [QualityLevel::Fast, QualityLevel::Eco, QualityLevel::Strong] {
        assert!(separate(&graph, quality, 1).is_empty());
    }
}
