use std::collections::BTreeSet;

use sep_core::errors::SepError;
use sep_core::rng::RngHandle;
use sep_decomp::{
    compute_separator, FnOracle, LevelStructureOracle, QualityLevel, SeparatorRequest,
};
use sep_graph::{AdjacencyList, CompressedGraph};

fn path(n: usize) -> CompressedGraph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    AdjacencyList::from_edge_list(n, &edges).unwrap().to_compressed()
}

#[test]
fn answers_are_collected_into_a_set() {
    let oracle = FnOracle::new(|_, _, _| {
        Ok(vec![3, 1, 3])
    });
    let mut rng = RngHandle::from_seed(0);
    let separator =
        compute_separator(&oracle, &path(5), &SeparatorRequest::default(), &mut rng).unwrap();
    assert_eq!(separator, BTreeSet::from([1, 3]));
}

#[test]
fn empty_answer_is_valid() {
    let oracle = FnOracle::new(|_, _, _| {
        Ok(Vec::new())
    });
    let mut rng = RngHandle::from_seed(0);
    let separator =
        compute_separator(&oracle, &path(5), &SeparatorRequest::default(), &mut rng).unwrap();
    assert!(separator.is_empty());
}

#[test]
fn out_of_range_ids_are_rejected() {
    let oracle = FnOracle::new(|_, _, _| {
        Ok(vec![0, 5])
    });
    let mut rng = RngHandle::from_seed(0);
    let err = compute_separator(&oracle, &path(5), &SeparatorRequest::default(), &mut rng)
        .unwrap_err();
    match err {
        SepError::OracleFailure(info) => {
            assert_eq!(info.code, "separator-out-of-range");
            assert_eq!(info.context.get("vertex"), Some(&"5".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_requests_never_reach_the_oracle() {
    let oracle = FnOracle::new(|_, _, _| {
        panic!("oracle must not be called")
    });
    let mut rng = RngHandle::from_seed(0);
    for request in [
        SeparatorRequest {
            num_parts: 1,
            ..SeparatorRequest::default()
        },
        SeparatorRequest {
            imbalance: 0.0,
            ..SeparatorRequest::default()
        },
        SeparatorRequest {
            imbalance: 1.0,
            ..SeparatorRequest::default()
        },
    ] {
        let err = compute_separator(&oracle, &path(5), &request, &mut rng).unwrap_err();
        assert_eq!(err.code(), "invalid-request");
    }
}

#[test]
fn single_vertex_is_too_small_for_the_level_oracle() {
    let mut rng = RngHandle::from_seed(0);
    let err = compute_separator(
        &LevelStructureOracle::default(),
        &CompressedGraph::isolated(1),
        &SeparatorRequest::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, SepError::OracleFailure(_)));
    assert_eq!(err.code(), "too-small");
}

#[test]
fn quality_levels_map_to_modes_and_names() {
    let modes: Vec<u8> = QualityLevel::ALL.iter().map(|level| level.mode()).collect();
    assert_eq!(modes, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(QualityLevel::StrongSocial.base(), QualityLevel::Strong);
    assert_eq!(QualityLevel::Eco.base(), QualityLevel::Eco);
    for level in QualityLevel::ALL {
        assert_eq!(level.to_string().parse::<QualityLevel>().unwrap(), level);
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, format!("\"{level}\""));
    }
    let err = "thorough".parse::<QualityLevel>().unwrap_err();
    assert_eq!(err.code(), "unknown-quality");
}
