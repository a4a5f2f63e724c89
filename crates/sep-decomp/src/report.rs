use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sep_core::VertexId;
use sep_graph::Fragment;

/// One split performed by the decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorRecord {
    /// Depth of the split fragment; the input graph has depth zero.
    pub depth: usize,
    /// Vertices of the split fragment.
    pub fragment_size: usize,
    /// Vertices in the separator.
    pub separator_size: usize,
    /// Fragments left after removing the separator.
    pub children: usize,
    /// Separator vertices as ids of the input graph, ascending.
    #[serde(default)]
    pub separator_vertices: Vec<VertexId>,
}

impl fmt::Display for SeparatorRecord {
    /// `fragment_size separator_size`, the line format of the record files.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fragment_size, self.separator_size)
    }
}

/// Receives every [`SeparatorRecord`] as soon as the split is done.
pub trait ReportSink {
    /// Consumes one record.
    fn record(&mut self, record: &SeparatorRecord);
}

impl ReportSink for Vec<SeparatorRecord> {
    fn record(&mut self, record: &SeparatorRecord) {
        self.push(record.clone());
    }
}

/// Result of a full decomposition: the leaves plus one record per split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Leaf fragments, in the order they were finalised.
    pub leaves: Vec<Fragment>,
    /// Splits, in the order they were performed.
    pub records: Vec<SeparatorRecord>,
}

impl Decomposition {
    /// Number of leaf fragments.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Size of the largest leaf, zero without leaves.
    pub fn max_leaf_size(&self) -> usize {
        self.leaves.iter().map(Fragment::size).max().unwrap_or(0)
    }

    /// Sum of all separator sizes.
    pub fn total_separator_size(&self) -> usize {
        self.records.iter().map(|record| record.separator_size).sum()
    }

    /// Records grouped by depth.
    pub fn records_by_depth(&self) -> BTreeMap<usize, Vec<&SeparatorRecord>> {
        let mut grouped: BTreeMap<usize, Vec<&SeparatorRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.depth).or_default().push(record);
        }
        grouped
    }

    /// `(fragment_size, separator_size)` pairs of every split.
    pub fn size_pairs(&self) -> Vec<(usize, usize)> {
        self.records
            .iter()
            .map(|record| (record.fragment_size, record.separator_size))
            .collect()
    }
}

/// Averages of one log2-scaled bin, see [`binned_statistic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinnedStatistic {
    /// Bin index in `0..=num_bins`.
    pub bin: usize,
    /// Number of pairs in the bin.
    pub count: usize,
    /// Mean `log2(fragment_size)`.
    pub mean_log_fragment_size: f64,
    /// Mean `log2(separator_size)`.
    pub mean_log_separator_size: f64,
}

/// Bins `(fragment_size, separator_size)` pairs by `log2(fragment_size)`.
///
/// Bin `b` collects pairs with `floor(num_bins * log2(n) / max log2(n)) == b`,
/// so the largest fragment lands in bin `num_bins`. Pairs with a zero size
/// have no logarithm and are skipped; empty bins are omitted.
pub fn binned_statistic(pairs: &[(usize, usize)], num_bins: usize) -> Vec<BinnedStatistic> {
    let logs: Vec<(f64, f64)> = pairs
        .iter()
        .filter(|&&(n, s)| n > 0 && s > 0)
        .map(|&(n, s)| ((n as f64).log2(), (s as f64).log2()))
        .collect();
    let max_log = logs.iter().map(|&(n, _)| n).fold(0.0, f64::max);

    let mut bins: Vec<Vec<(f64, f64)>> = vec![Vec::new(); num_bins + 1];
    for (log_n, log_s) in logs {
        let bin = if max_log > 0.0 {
            ((num_bins as f64 * log_n / max_log).floor() as usize).min(num_bins)
        } else {
            0
        };
        bins[bin].push((log_n, log_s));
    }

    bins.into_iter()
        .enumerate()
        .filter(|(_, members)| !members.is_empty())
        .map(|(bin, members)| {
            let count = members.len();
            let (sum_n, sum_s) = members
                .iter()
                .fold((0.0, 0.0), |(total_n, total_s), &(n, s)| (total_n + n, total_s + s));
            BinnedStatistic {
                bin,
                count,
                mean_log_fragment_size: sum_n / count as f64,
                mean_log_separator_size: sum_s / count as f64,
            }
        })
        .collect()
}
