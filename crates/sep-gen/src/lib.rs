#![deny(missing_docs)]

//! Seeded synthetic graph generators: random spanning trees, locality-biased
//! densification and degree-distribution matching.
//!
//! Every generator threads an explicit [`sep_core::RngHandle`]; the same seed
//! always yields the same graph.

mod densify;
mod distance;
mod locality;
mod random_set;
mod same_degree;
mod tree;

pub use densify::{
    average_degree_graph, max_edges, ring_local_graph, stall_budget, tree_local_graph,
    uniform_graph,
};
pub use distance::{distance_exponential, distance_linear, distance_quadratic, DistanceFn};
pub use locality::LocalityTable;
pub use random_set::RandomSet;
pub use same_degree::{same_degree_graph, same_degree_graph_with, BucketStrategy, SameDegreeOptions};
pub use tree::{diameter_overview, local_tree, random_tree};
