use log::info;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sep_core::errors::{ErrorInfo, SepError};
use sep_core::rng::RngHandle;
use sep_core::VertexId;
use sep_graph::{AdjacencyList, GraphView};

use crate::random_set::RandomSet;
use crate::tree::random_tree;

const PERCENTAGE_TOLERANCE: f64 = 1e-9;

/// How the next target bucket is chosen among the deficient ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketStrategy {
    /// Draw with weight `inflow / (count + 1)`, favouring rare, deficient
    /// buckets.
    #[default]
    ScarcityBiased,
    /// Always take the highest deficient bucket.
    LastUnfulfilled,
}

/// Tuning knobs of [`same_degree_graph_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SameDegreeOptions {
    /// Target bucket selection.
    #[serde(default)]
    pub strategy: BucketStrategy,
    /// Fraction of each requested share that must be met.
    #[serde(default = "default_slack")]
    pub slack: f64,
    /// Consecutive rejected pairs tolerated; `None` means `64 * n`.
    #[serde(default)]
    pub max_stalled_attempts: Option<usize>,
}

fn default_slack() -> f64 {
    0.9
}

impl Default for SameDegreeOptions {
    fn default() -> Self {
        Self {
            strategy: BucketStrategy::default(),
            slack: default_slack(),
            max_stalled_attempts: None,
        }
    }
}

/// Grows a random tree on `n` vertices until its degree distribution meets
/// `percentages` with the default options.
///
/// `percentages[b]` is the share of vertices with degree `b`; the last entry
/// covers that degree and everything above it.
pub fn same_degree_graph(
    n: usize,
    percentages: &[f64],
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    same_degree_graph_with(n, percentages, &SameDegreeOptions::default(), rng)
}

/// [`same_degree_graph`] with explicit options.
pub fn same_degree_graph_with(
    n: usize,
    percentages: &[f64],
    options: &SameDegreeOptions,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, SepError> {
    validate_percentages(percentages)?;
    if !options.slack.is_finite() || !(0.0..=1.0).contains(&options.slack) {
        return Err(SepError::Config(
            ErrorInfo::new("invalid-slack", "slack must lie in [0, 1]")
                .with_context("slack", options.slack),
        ));
    }

    let mut graph = random_tree(n, rng);
    let expected: Vec<usize> = percentages
        .iter()
        .map(|&pct| (options.slack * pct * n as f64).floor() as usize)
        .collect();
    let mut buckets = DegreeBuckets::new(&graph, expected);

    let inflow = buckets.inflow();
    if inflow[0] > 0 {
        return Err(SepError::InfeasibleDegreeTarget(
            ErrorInfo::new("unreachable-bucket", "degrees only grow, bucket 0 cannot be refilled")
                .with_context("missing", inflow[0])
                .with_hint("lower the share of low-degree buckets"),
        ));
    }

    let stall_limit = options.max_stalled_attempts.unwrap_or(64 * n);
    let mut stalled = 0;
    let mut added = 0;

    while !buckets.is_satisfied() {
        let Some(first_target) = buckets.choose_target(options.strategy, rng) else {
            return Err(no_eligible_pair(&buckets));
        };
        let Some(u) = buckets.take_from(first_target - 1, rng) else {
            return Err(no_eligible_pair(&buckets));
        };
        buckets.place(u, first_target);

        match buckets.choose_partner(u, &graph, options.strategy, rng) {
            Some(Partner { vertex, from, to }) => {
                graph.add_undirected_edge(u, vertex);
                buckets.relocate(vertex, from, to);
                added += 1;
                stalled = 0;
            }
            None => {
                buckets.revert(u, first_target);
                stalled += 1;
                if stalled > stall_limit {
                    return Err(SepError::InfeasibleDegreeTarget(
                        ErrorInfo::new("stalled", "no acceptable vertex pair found")
                            .with_context("attempts", stalled)
                            .with_context("edges_added", added),
                    ));
                }
            }
        }
    }

    info!(
        "degree-matched graph: {} vertices, {} edges added to the spanning tree",
        n, added
    );
    Ok(graph)
}

fn validate_percentages(percentages: &[f64]) -> Result<(), SepError> {
    let invalid = |message: &str| {
        SepError::InfeasibleDegreeTarget(
            ErrorInfo::new("invalid-percentages", message)
                .with_context("buckets", percentages.len()),
        )
    };
    if percentages.is_empty() {
        return Err(invalid("at least one degree bucket is required"));
    }
    if percentages.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(invalid("percentages must be finite and non-negative"));
    }
    let total: f64 = percentages.iter().sum();
    if total > 1.0 + PERCENTAGE_TOLERANCE {
        return Err(invalid("percentages sum to more than one"));
    }
    Ok(())
}

fn no_eligible_pair(buckets: &DegreeBuckets) -> SepError {
    SepError::InfeasibleDegreeTarget(
        ErrorInfo::new("no-eligible-pair", "no donor bucket can feed a deficient bucket")
            .with_context("inflow", format!("{:?}", buckets.inflow())),
    )
}

/// Second endpoint of a new edge and the bucket move it causes.
#[derive(Debug, Clone, Copy)]
struct Partner {
    vertex: VertexId,
    from: usize,
    to: usize,
}

/// Vertices grouped by `min(degree, B - 1)`.
///
/// The first endpoint moves ahead of the graph update and is reverted when no
/// partner exists; the partner moves only once the edge is added.
struct DegreeBuckets {
    buckets: Vec<RandomSet<VertexId>>,
    expected: Vec<usize>,
}

impl DegreeBuckets {
    fn new(graph: &AdjacencyList, expected: Vec<usize>) -> Self {
        let last = expected.len() - 1;
        let mut buckets = vec![RandomSet::new(); expected.len()];
        for v in 0..graph.num_vertices() {
            buckets[graph.degree(v).min(last)].insert(v);
        }
        Self { buckets, expected }
    }

    fn last(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Vertices that still have to enter each bucket from the one below.
    fn inflow(&self) -> Vec<usize> {
        let mut inflow = vec![0; self.buckets.len()];
        let mut from_above = 0;
        for b in (0..self.buckets.len()).rev() {
            let required = self.expected[b] + from_above;
            inflow[b] = required.saturating_sub(self.buckets[b].len());
            from_above = inflow[b];
        }
        inflow
    }

    fn is_satisfied(&self) -> bool {
        self.inflow().iter().all(|&need| need == 0)
    }

    fn choose_target(&self, strategy: BucketStrategy, rng: &mut RngHandle) -> Option<usize> {
        let inflow = self.inflow();
        let eligible: Vec<usize> = (1..self.buckets.len())
            .filter(|&t| inflow[t] > 0 && !self.buckets[t - 1].is_empty())
            .collect();
        match strategy {
            BucketStrategy::LastUnfulfilled => eligible.last().copied(),
            BucketStrategy::ScarcityBiased => {
                let weights = eligible
                    .iter()
                    .map(|&t| inflow[t] as f64 / (self.buckets[t].len() + 1) as f64);
                let index = WeightedIndex::new(weights).ok()?;
                Some(eligible[index.sample(rng)])
            }
        }
    }

    fn take_from(&mut self, bucket: usize, rng: &mut RngHandle) -> Option<VertexId> {
        let vertex = *self.buckets[bucket].choose(rng)?;
        self.buckets[bucket].remove(&vertex);
        Some(vertex)
    }

    /// Second endpoint for `u`, which already sits in its new bucket.
    ///
    /// The donor of a deficient bucket is tried first. Otherwise any vertex
    /// whose move keeps every inflow at its current value qualifies: a donor
    /// of a deficient bucket, a bucket holding more than it must keep, or the
    /// last bucket, whose vertices stay put.
    fn choose_partner(
        &self,
        u: VertexId,
        graph: &AdjacencyList,
        strategy: BucketStrategy,
        rng: &mut RngHandle,
    ) -> Option<Partner> {
        let last = self.last();
        let fits = |v: &VertexId| *v != u && !graph.has_edge(u, *v);

        if let Some(target) = self.choose_target(strategy, rng) {
            let donor = target - 1;
            let candidates: Vec<VertexId> =
                self.buckets[donor].iter().copied().filter(fits).collect();
            if let Some(&vertex) = candidates.choose(rng) {
                return Some(Partner {
                    vertex,
                    from: donor,
                    to: target,
                });
            }
        }

        let inflow = self.inflow();
        let mut candidates = Vec::new();
        for b in 0..=last {
            let to = (b + 1).min(last);
            let movable = b == last
                || inflow[to] > 0
                || self.buckets[b].len() > self.expected[b] + inflow[to];
            if movable {
                candidates.extend(
                    self.buckets[b]
                        .iter()
                        .copied()
                        .filter(fits)
                        .map(|vertex| Partner { vertex, from: b, to }),
                );
            }
        }
        candidates.choose(rng).copied()
    }

    fn relocate(&mut self, vertex: VertexId, from: usize, to: usize) {
        self.buckets[from].remove(&vertex);
        self.buckets[to].insert(vertex);
    }

    fn place(&mut self, vertex: VertexId, bucket: usize) {
        self.buckets[bucket].insert(vertex);
    }

    /// Undoes `take_from(bucket - 1)` followed by `place(vertex, bucket)`.
    fn revert(&mut self, vertex: VertexId, bucket: usize) {
        self.buckets[bucket].remove(&vertex);
        self.buckets[bucket - 1].insert(vertex);
    }
}
