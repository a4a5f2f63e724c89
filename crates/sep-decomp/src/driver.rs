//! Recursive decomposition driver.
//!
//! Fragments are processed one layer (recursion depth) at a time. Each layer
//! is mapped either sequentially or on the rayon pool with an
//! order-preserving collect, and every fragment draws from its own RNG
//! stream, so both modes produce the same decomposition.

use log::{debug, info, warn};
use rayon::prelude::*;
use sep_core::errors::SepError;
use sep_core::rng::{derive_substream_seed, RngHandle};
use sep_graph::{extract_components, CompressedGraph, Fragment};

use crate::config::DecompositionConfig;
use crate::oracle::{compute_separator, SeparatorOracle, SeparatorRequest};
use crate::report::{Decomposition, ReportSink, SeparatorRecord};

/// Fragment waiting to be split, with the seed of its oracle stream.
struct Pending {
    fragment: Fragment,
    seed: u64,
}

enum Outcome {
    Leaf(Fragment),
    Split {
        record: SeparatorRecord,
        children: Vec<Pending>,
    },
}

/// Recursively separates `graph` until every fragment has at most
/// `config.threshold` vertices.
///
/// The input is symmetrized first, so a directed graph decomposes as its
/// undirected closure. Oracle failures and splits that make no progress turn
/// the fragment into a leaf instead of aborting the run; the only errors are
/// configuration errors.
pub fn decompose(
    graph: CompressedGraph,
    oracle: &dyn SeparatorOracle,
    config: &DecompositionConfig,
) -> Result<Decomposition, SepError> {
    run(graph, oracle, config, None)
}

/// [`decompose`] that also hands every record to `sink` as soon as the split
/// is done.
pub fn decompose_with_sink(
    graph: CompressedGraph,
    oracle: &dyn SeparatorOracle,
    config: &DecompositionConfig,
    sink: &mut dyn ReportSink,
) -> Result<Decomposition, SepError> {
    run(graph, oracle, config, Some(sink))
}

fn run(
    graph: CompressedGraph,
    oracle: &dyn SeparatorOracle,
    config: &DecompositionConfig,
    mut sink: Option<&mut dyn ReportSink>,
) -> Result<Decomposition, SepError> {
    config.validate()?;
    let request = config.request();
    let root = Fragment::root(graph.symmetrized());
    let root_size = root.size();

    let mut leaves = Vec::new();
    let mut records = Vec::new();
    let mut layer = vec![Pending {
        fragment: root,
        seed: config.seed,
    }];

    while !layer.is_empty() {
        let outcomes: Vec<Outcome> = if config.parallel {
            layer
                .into_par_iter()
                .map(|pending| process(pending, oracle, &request, config))
                .collect()
        } else {
            layer
                .into_iter()
                .map(|pending| process(pending, oracle, &request, config))
                .collect()
        };

        let mut next = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Leaf(fragment) => leaves.push(fragment),
                Outcome::Split { record, children } => {
                    if let Some(sink) = sink.as_deref_mut() {
                        sink.record(&record);
                    }
                    records.push(record);
                    next.extend(children);
                }
            }
        }
        layer = next;
    }

    let decomposition = Decomposition { leaves, records };
    info!(
        "decomposed {} vertices: {} splits, {} leaves, {} separator vertices",
        root_size,
        decomposition.records.len(),
        decomposition.leaf_count(),
        decomposition.total_separator_size()
    );
    Ok(decomposition)
}

fn process(
    pending: Pending,
    oracle: &dyn SeparatorOracle,
    request: &SeparatorRequest,
    config: &DecompositionConfig,
) -> Outcome {
    let Pending { fragment, seed } = pending;
    let size = fragment.size();
    let depth = fragment.depth();

    if size <= config.threshold.max(1) {
        return Outcome::Leaf(fragment);
    }
    if config.max_depth.is_some_and(|max_depth| depth >= max_depth) {
        debug!("depth limit reached for a fragment of {size} vertices");
        return Outcome::Leaf(fragment);
    }

    let mut rng = RngHandle::from_seed(seed);
    let separator = match compute_separator(oracle, fragment.graph(), request, &mut rng) {
        Ok(separator) => separator,
        Err(err) => {
            warn!("fragment of {size} vertices at depth {depth} kept as leaf: {err}");
            return Outcome::Leaf(fragment);
        }
    };

    let children = extract_components(&fragment, &separator);
    if children.len() == 1 && children[0].size() == size {
        warn!("separator made no progress on a fragment of {size} vertices at depth {depth}");
        return Outcome::Leaf(fragment);
    }

    let record = SeparatorRecord {
        depth,
        fragment_size: size,
        separator_size: separator.len(),
        children: children.len(),
        separator_vertices: {
            let mut ids: Vec<_> = separator
                .iter()
                .map(|&v| fragment.origin_ids()[v])
                .collect();
            ids.sort_unstable();
            ids
        },
    };
    debug!(
        "split fragment of {} vertices at depth {}: separator {}, {} children",
        size,
        depth,
        separator.len(),
        children.len()
    );

    let children = children
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| Pending {
            fragment,
            seed: derive_substream_seed(seed, index as u64),
        })
        .collect();
    Outcome::Split { record, children }
}
