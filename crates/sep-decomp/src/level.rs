//! Reference oracle cutting a graph along one BFS level.

use rand::Rng;
use sep_core::errors::{ErrorInfo, SepError};
use sep_core::rng::RngHandle;
use sep_core::VertexId;
use sep_graph::{bfs_levels, farthest_vertex, CompressedGraph, GraphView};

use crate::oracle::{QualityLevel, SeparatorOracle, SeparatorRequest};

/// Level-structure separator: BFS from a start vertex and take the smallest
/// level whose removal leaves two sides within the imbalance bound.
///
/// `Fast` starts from a random vertex, `Eco` from a pseudo-peripheral one and
/// `Strong` keeps the best of the pseudo-peripheral start and
/// `strong_restarts` random starts. Only bisections are produced; a request
/// for more parts is served by the recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStructureOracle {
    /// Random starts evaluated on top of the peripheral one at `Strong`.
    pub strong_restarts: usize,
    /// Maximum BFS sweeps of the pseudo-peripheral search.
    pub peripheral_sweeps: usize,
}

impl Default for LevelStructureOracle {
    fn default() -> Self {
        Self {
            strong_restarts: 4,
            peripheral_sweeps: 4,
        }
    }
}

#[derive(Debug, Clone)]
struct Cut {
    separator: Vec<VertexId>,
    imbalance: usize,
}

impl Cut {
    fn better_than(&self, other: &Cut) -> bool {
        (self.separator.len(), self.imbalance) < (other.separator.len(), other.imbalance)
    }
}

enum LevelOutcome {
    /// The start does not reach every vertex.
    Disconnected,
    Cut(Cut),
}

impl LevelStructureOracle {
    fn pseudo_peripheral(&self, graph: &CompressedGraph, start: VertexId) -> VertexId {
        let (mut current, mut eccentricity) = farthest_vertex(graph, start);
        for _ in 0..self.peripheral_sweeps {
            let (next, next_eccentricity) = farthest_vertex(graph, current);
            if next_eccentricity <= eccentricity {
                break;
            }
            current = next;
            eccentricity = next_eccentricity;
        }
        current
    }
}

fn cut_from(graph: &CompressedGraph, start: VertexId, imbalance: f64) -> LevelOutcome {
    let n = graph.num_vertices();
    let levels = bfs_levels(graph, start);
    let reached: usize = levels.iter().map(Vec::len).sum();
    if reached < n {
        return LevelOutcome::Disconnected;
    }

    // Level holding the median vertex in BFS order, never the start level.
    let mut seen = 0;
    let median_level = levels
        .iter()
        .position(|level| {
            seen += level.len();
            seen > n / 2
        })
        .unwrap_or(levels.len() - 1)
        .max(1);

    let mut before_level = Vec::with_capacity(levels.len());
    let mut before = 0;
    for level in &levels {
        before_level.push(before);
        before += level.len();
    }
    let sides = |k: usize| {
        let before = before_level[k];
        (before, n - before - levels[k].len())
    };

    let chosen = (1..levels.len())
        .filter(|&k| {
            let (before, after) = sides(k);
            let bound = ((1.0 + imbalance) * (n - levels[k].len()) as f64 / 2.0).ceil() as usize;
            before <= bound && after <= bound
        })
        .min_by_key(|&k| (levels[k].len(), k.abs_diff(median_level), k))
        .unwrap_or(median_level);

    let (before, after) = sides(chosen);
    LevelOutcome::Cut(Cut {
        separator: levels[chosen].clone(),
        imbalance: before.abs_diff(after),
    })
}

impl SeparatorOracle for LevelStructureOracle {
    fn compute_separator(
        &self,
        graph: &CompressedGraph,
        request: &SeparatorRequest,
        rng: &mut RngHandle,
    ) -> Result<Vec<VertexId>, SepError> {
        let n = graph.num_vertices();
        if n < 2 {
            return Err(SepError::OracleFailure(
                ErrorInfo::new("too-small", "a separator needs at least two vertices")
                    .with_context("vertices", n),
            ));
        }

        let random_start = rng.gen_range(0..n);
        let mut starts = match request.quality.base() {
            QualityLevel::Fast => vec![random_start],
            _ => vec![self.pseudo_peripheral(graph, random_start)],
        };
        if request.quality.base() == QualityLevel::Strong {
            starts.extend((0..self.strong_restarts).map(|_| rng.gen_range(0..n)));
        }

        let mut best: Option<Cut> = None;
        for start in starts {
            match cut_from(graph, start, request.imbalance) {
                LevelOutcome::Disconnected => return Ok(Vec::new()),
                LevelOutcome::Cut(cut) => {
                    if best.as_ref().map_or(true, |current| cut.better_than(current)) {
                        best = Some(cut);
                    }
                }
            }
        }
        Ok(best.map(|cut| cut.separator).unwrap_or_default())
    }
}
