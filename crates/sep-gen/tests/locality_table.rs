use sep_core::rng::RngHandle;
use sep_gen::{
    distance_exponential, distance_linear, distance_quadratic, DistanceFn, LocalityTable,
    RandomSet,
};

#[test]
fn ring_distance_wraps_around() {
    assert_eq!(distance_linear(0, 1, 10), 1.0);
    assert_eq!(distance_linear(0, 9, 10), 1.0);
    assert_eq!(distance_linear(2, 7, 10), 5.0);
    assert_eq!(distance_quadratic(0, 8, 10), 4.0);
    assert_eq!(distance_exponential(1, 4, 10), 8.0);
    assert_eq!(DistanceFn::Linear.apply(3, 3, 10), 0.0);
}

#[test]
fn table_is_normalized_and_monotone() {
    let table = LocalityTable::new(100, DistanceFn::Quadratic).unwrap();
    let cumulative = table.cumulative();
    assert_eq!(table.len(), 100);
    assert_eq!(cumulative[0], 0.0);
    assert!((cumulative[99] - 1.0).abs() < 1e-12);
    assert!(cumulative.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn single_vertex_table_is_zero() {
    let table = LocalityTable::new(1, DistanceFn::Linear).unwrap();
    assert_eq!(table.cumulative(), &[0.0]);
    let mut rng = RngHandle::from_seed(0);
    assert_eq!(table.sample_offset(&mut rng), 0);
}

#[test]
fn empty_table_is_rejected() {
    let err = LocalityTable::new(0, DistanceFn::Linear).unwrap_err();
    assert_eq!(err.code(), "empty-ring");
}

#[test]
fn samples_favour_small_offsets() {
    let n = 1_000;
    let table = LocalityTable::new(n, DistanceFn::Quadratic).unwrap();
    let mut rng = RngHandle::from_seed(17);
    let draws = 10_000;
    let mut near = 0;
    for _ in 0..draws {
        let offset = table.sample_offset(&mut rng);
        assert!(offset >= 1 && offset < n);
        if distance_linear(0, offset, n) <= 2.0 {
            near += 1;
        }
    }
    // Offsets 1, 2, n-2 and n-1 carry about 76% of the quadratic mass.
    assert!(near > draws / 2, "near draws: {near}");
}

#[test]
fn random_set_supports_swap_removal() {
    let mut set = RandomSet::new();
    for v in 0..5usize {
        assert!(set.insert(v));
    }
    assert!(!set.insert(3));
    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert!(set.remove(&4));
    assert_eq!(set.len(), 3);
    assert!(set.contains(&0) && set.contains(&2) && set.contains(&3));
    assert!(!set.contains(&4));

    let mut rng = RngHandle::from_seed(8);
    for _ in 0..50 {
        let chosen = *set.choose(&mut rng).unwrap();
        assert!([0, 2, 3].contains(&chosen));
    }
    let mut remaining: Vec<usize> = set.iter().copied().collect();
    remaining.sort_unstable();
    assert_eq!(remaining, vec![0, 2, 3]);
}

#[test]
fn empty_random_set_has_no_choice() {
    let set: RandomSet<usize> = RandomSet::new();
    let mut rng = RngHandle::from_seed(8);
    assert!(set.is_empty());
    assert!(set.choose(&mut rng).is_none());
}
