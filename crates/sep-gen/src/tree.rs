use rand::Rng;
use sep_core::errors::SepError;
use sep_core::rng::RngHandle;
use sep_graph::{tree_diameter, AdjacencyList};

use crate::distance::DistanceFn;
use crate::locality::LocalityTable;

/// Random spanning tree on `n` vertices built by a random walk with retries.
///
/// Starting from vertex 0, the walk jumps to a uniform candidate in `0..n`;
/// the first visit of a candidate adds the edge `(current, candidate)`. The
/// walk moves to the candidate whether or not it was new. Expected running
/// time follows the coupon collector bound, `O(n log n)` draws.
pub fn random_tree(n: usize, rng: &mut RngHandle) -> AdjacencyList {
    walk_tree(n, rng, |_, rng| rng.gen_range(0..n))
}

/// Random spanning tree whose walk favours nearby ids on the ring.
///
/// Candidates are `current + offset (mod n)` with offsets drawn from a
/// [`LocalityTable`] for `distance`.
pub fn local_tree(
    n: usize,
    distance: DistanceFn,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    if n == 0 {
        return Ok(AdjacencyList::new(0));
    }
    let table = LocalityTable::new(n, distance)?;
    Ok(walk_tree(n, rng, |current, rng| {
        table.sample_neighbor(current, rng)
    }))
}

fn walk_tree<F>(n: usize, rng: &mut RngHandle, mut next_candidate: F) -> AdjacencyList
where
    F: FnMut(usize, &mut RngHandle) -> usize,
{
    let mut tree = AdjacencyList::new(n);
    if n == 0 {
        return tree;
    }
    let mut visited = vec![false; n];
    visited[0] = true;
    let mut unvisited = n - 1;
    let mut current = 0;

    while unvisited > 0 {
        let candidate = next_candidate(current, rng);
        if !visited[candidate] {
            visited[candidate] = true;
            unvisited -= 1;
            tree.add_undirected_edge(current, candidate);
        }
        current = candidate;
    }

    tree
}

/// Diameters of `runs` random trees for every size in `sizes`, as
/// `(size, diameter)` pairs.
pub fn diameter_overview(
    sizes: impl IntoIterator<Item = usize>,
    runs: usize,
    rng: &mut RngHandle,
) -> Vec<(usize, usize)> {
    let mut rows = Vec::new();
    for n in sizes {
        for _ in 0..runs {
            let tree = random_tree(n, rng);
            rows.push((n, tree_diameter(&tree)));
        }
    }
    rows
}
