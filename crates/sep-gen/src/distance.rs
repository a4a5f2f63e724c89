use serde::{Deserialize, Serialize};

/// Ring distance between `u` and `v` on a cycle of `n` ids.
pub fn distance_linear(u: usize, v: usize, n: usize) -> f64 {
    let direct = u.abs_diff(v);
    direct.min(n - direct) as f64
}

/// Square of [`distance_linear`].
pub fn distance_quadratic(u: usize, v: usize, n: usize) -> f64 {
    distance_linear(u, v, n).powi(2)
}

/// `2^distance_linear`; saturates to infinity for very long rings.
pub fn distance_exponential(u: usize, v: usize, n: usize) -> f64 {
    2f64.powf(distance_linear(u, v, n))
}

/// Locality notion used to bias sampling toward nearby ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceFn {
    /// Plain ring distance.
    Linear,
    /// Squared ring distance.
    #[default]
    Quadratic,
    /// Exponential in the ring distance.
    Exponential,
}

impl DistanceFn {
    /// Evaluates the distance between `u` and `v` on a ring of `n` ids.
    pub fn apply(self, u: usize, v: usize, n: usize) -> f64 {
        match self {
            DistanceFn::Linear => distance_linear(u, v, n),
            DistanceFn::Quadratic => distance_quadratic(u, v, n),
            DistanceFn::Exponential => distance_exponential(u, v, n),
        }
    }
}
