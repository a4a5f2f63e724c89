use rand::Rng;
use sep_core::errors::{ErrorInfo, SepError};
use sep_core::rng::RngHandle;

use crate::distance::DistanceFn;

/// Cumulative sampling table over ring offsets `0..n`.
///
/// Offset `i` carries weight `1 / distance(0, i, n)`; offset zero carries none.
/// The table is normalized so the last entry is `1.0` and sampled by inverse
/// CDF lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityTable {
    cumulative: Vec<f64>,
}

impl LocalityTable {
    /// Builds the table once for a ring of `n` ids.
    pub fn new(n: usize, distance: DistanceFn) -> Result<Self, SepError> {
        if n == 0 {
            return Err(SepError::Generator(
                ErrorInfo::new("empty-ring", "locality table needs at least one vertex")
                    .with_hint("generate the empty graph directly for n = 0"),
            ));
        }
        let mut cumulative = vec![0.0; n];
        for i in 1..n {
            cumulative[i] = cumulative[i - 1] + 1.0 / distance.apply(0, i, n);
        }
        let total = cumulative[n - 1];
        if total > 0.0 {
            for weight in &mut cumulative {
                *weight /= total;
            }
        }
        Ok(Self { cumulative })
    }

    /// Ring size the table was built for.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always false; tables hold at least one entry.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Normalized cumulative weights.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Draws an offset: the first index whose cumulative weight reaches a
    /// uniform draw in `[0, 1)`.
    pub fn sample_offset(&self, rng: &mut RngHandle) -> usize {
        let draw: f64 = rng.gen();
        let index = self.cumulative.partition_point(|&weight| weight < draw);
        index.min(self.cumulative.len() - 1)
    }

    /// Draws a vertex near `vertex` on the ring.
    pub fn sample_neighbor(&self, vertex: usize, rng: &mut RngHandle) -> usize {
        (vertex + self.sample_offset(rng)) % self.cumulative.len()
    }
}
