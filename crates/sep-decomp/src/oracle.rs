//! Seam between the decomposition driver and whatever computes separators.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sep_core::errors::{ErrorInfo, SepError};
use sep_core::rng::RngHandle;
use sep_core::VertexId;
use sep_graph::{CompressedGraph, GraphView};

/// Effort tier requested from the oracle.
///
/// The social variants target graphs with skewed degree distributions; an
/// oracle without a dedicated strategy treats them like their base tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLevel {
    /// Cheapest tier.
    Fast,
    /// Balanced cost and quality.
    #[default]
    Eco,
    /// Most expensive tier.
    Strong,
    /// [`QualityLevel::Fast`] tuned for social networks.
    FastSocial,
    /// [`QualityLevel::Eco`] tuned for social networks.
    EcoSocial,
    /// [`QualityLevel::Strong`] tuned for social networks.
    StrongSocial,
}

impl QualityLevel {
    /// All tiers in mode-number order.
    pub const ALL: [QualityLevel; 6] = [
        QualityLevel::Fast,
        QualityLevel::Eco,
        QualityLevel::Strong,
        QualityLevel::FastSocial,
        QualityLevel::EcoSocial,
        QualityLevel::StrongSocial,
    ];

    /// Numeric mode understood by multilevel partitioners (`0..=5`).
    pub fn mode(self) -> u8 {
        match self {
            QualityLevel::Fast => 0,
            QualityLevel::Eco => 1,
            QualityLevel::Strong => 2,
            QualityLevel::FastSocial => 3,
            QualityLevel::EcoSocial => 4,
            QualityLevel::StrongSocial => 5,
        }
    }

    /// The tier with the social tuning stripped.
    pub fn base(self) -> QualityLevel {
        match self {
            QualityLevel::Fast | QualityLevel::FastSocial => QualityLevel::Fast,
            QualityLevel::Eco | QualityLevel::EcoSocial => QualityLevel::Eco,
            QualityLevel::Strong | QualityLevel::StrongSocial => QualityLevel::Strong,
        }
    }

    /// Kebab-case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Fast => "fast",
            QualityLevel::Eco => "eco",
            QualityLevel::Strong => "strong",
            QualityLevel::FastSocial => "fast-social",
            QualityLevel::EcoSocial => "eco-social",
            QualityLevel::StrongSocial => "strong-social",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = SepError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        QualityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| {
                SepError::Config(
                    ErrorInfo::new("unknown-quality", "unrecognised quality level")
                        .with_context("value", value)
                        .with_hint("use fast, eco, strong or their -social variants"),
                )
            })
    }
}

/// Parameters of a single separator computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparatorRequest {
    /// Number of parts the separator should split the graph into.
    pub num_parts: usize,
    /// Allowed imbalance between the parts, in `(0, 1)`.
    pub imbalance: f64,
    /// Effort tier.
    pub quality: QualityLevel,
}

impl Default for SeparatorRequest {
    fn default() -> Self {
        Self {
            num_parts: 2,
            imbalance: 1.0 / 3.0,
            quality: QualityLevel::Eco,
        }
    }
}

impl SeparatorRequest {
    /// Rejects requests no oracle can honour.
    pub fn validate(&self) -> Result<(), SepError> {
        if self.num_parts < 2 {
            return Err(SepError::OracleFailure(
                ErrorInfo::new("invalid-request", "a separator needs at least two parts")
                    .with_context("num_parts", self.num_parts),
            ));
        }
        if !(self.imbalance > 0.0 && self.imbalance < 1.0) {
            return Err(SepError::OracleFailure(
                ErrorInfo::new("invalid-request", "imbalance must lie strictly between 0 and 1")
                    .with_context("imbalance", self.imbalance),
            ));
        }
        Ok(())
    }
}

/// Computes a vertex separator of a graph in compressed form.
///
/// Implementations are shared across worker threads; any randomness must
/// come from the supplied `rng`, which is seeded per fragment.
pub trait SeparatorOracle: Send + Sync {
    /// Returns the separator vertex ids. Order and duplicates do not matter.
    fn compute_separator(
        &self,
        graph: &CompressedGraph,
        request: &SeparatorRequest,
        rng: &mut RngHandle,
    ) -> Result<Vec<VertexId>, SepError>;
}

/// Adapts a closure into a [`SeparatorOracle`].
pub struct FnOracle<F>(pub F);

impl<F> FnOracle<F>
where
    F: Fn(&CompressedGraph, &SeparatorRequest, &mut RngHandle) -> Result<Vec<VertexId>, SepError>
        + Send
        + Sync,
{
    /// Wraps `separator_fn`.
    pub fn new(separator_fn: F) -> Self {
        Self(separator_fn)
    }
}

impl<F> SeparatorOracle for FnOracle<F>
where
    F: Fn(&CompressedGraph, &SeparatorRequest, &mut RngHandle) -> Result<Vec<VertexId>, SepError>
        + Send
        + Sync,
{
    fn compute_separator(
        &self,
        graph: &CompressedGraph,
        request: &SeparatorRequest,
        rng: &mut RngHandle,
    ) -> Result<Vec<VertexId>, SepError> {
        (self.0)(graph, request, rng)
    }
}

/// Validates `request`, invokes `oracle` once and collects its answer.
///
/// Ids outside `0..n` are rejected with `separator-out-of-range`. An empty
/// set is a valid answer.
pub fn compute_separator(
    oracle: &dyn SeparatorOracle,
    graph: &CompressedGraph,
    request: &SeparatorRequest,
    rng: &mut RngHandle,
) -> Result<BTreeSet<VertexId>, SepError> {
    request.validate()?;
    let n = graph.num_vertices();
    let raw = oracle.compute_separator(graph, request, rng)?;
    if let Some(&bad) = raw.iter().find(|&&v| v >= n) {
        return Err(SepError::OracleFailure(
            ErrorInfo::new("separator-out-of-range", "oracle returned an unknown vertex")
                .with_context("vertex", bad)
                .with_context("vertices", n),
        ));
    }
    Ok(raw.into_iter().collect())
}
