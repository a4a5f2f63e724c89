#![deny(missing_docs)]
#![doc = "Shared error surface and seeding policy for the separator decomposition crates."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, SepError};
pub use rng::{derive_substream_seed, RngHandle};

/// Dense vertex identifier. Every graph in the workspace numbers its vertices `0..n`.
pub type VertexId = usize;
