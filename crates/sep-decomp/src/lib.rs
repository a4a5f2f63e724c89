#![deny(missing_docs)]

//! Recursive vertex-separator decomposition.
//!
//! [`decompose`] repeatedly asks a [`SeparatorOracle`] for a separator of the
//! current fragment, splits the rest into connected components and recurses
//! until every fragment is at most [`DecompositionConfig::threshold`] vertices
//! large. [`LevelStructureOracle`] is a self-contained oracle based on BFS
//! level structures.

mod config;
mod driver;
mod level;
mod oracle;
mod report;

pub use config::DecompositionConfig;
pub use driver::{decompose, decompose_with_sink};
pub use level::LevelStructureOracle;
pub use oracle::{compute_separator, FnOracle, QualityLevel, SeparatorOracle, SeparatorRequest};
pub use report::{binned_statistic, BinnedStatistic, Decomposition, ReportSink, SeparatorRecord};
