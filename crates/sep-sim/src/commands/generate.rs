use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use log::info;
use sep_core::rng::RngHandle;
use sep_gen::{
    average_degree_graph, local_tree, random_tree, ring_local_graph, same_degree_graph_with,
    tree_local_graph, uniform_graph, BucketStrategy, DistanceFn, SameDegreeOptions,
};
use sep_graph::{AdjacencyList, GraphView};

use super::write_graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphKind {
    /// Uniform random spanning tree.
    Tree,
    /// Spanning tree biased toward nearby ring ids.
    LocalTree,
    /// Tree densified with ring-local edges.
    RingLocal,
    /// Tree densified by tree-distance locality.
    TreeLocal,
    /// Tree densified with uniform edges.
    Uniform,
    /// Uniform densification to a target average degree.
    AvgDegree,
    /// Tree grown to a target degree distribution.
    SameDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceArg {
    Linear,
    Quadratic,
    Exponential,
}

impl From<DistanceArg> for DistanceFn {
    fn from(value: DistanceArg) -> Self {
        match value {
            DistanceArg::Linear => DistanceFn::Linear,
            DistanceArg::Quadratic => DistanceFn::Quadratic,
            DistanceArg::Exponential => DistanceFn::Exponential,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    ScarcityBiased,
    LastUnfulfilled,
}

impl From<StrategyArg> for BucketStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::ScarcityBiased => BucketStrategy::ScarcityBiased,
            StrategyArg::LastUnfulfilled => BucketStrategy::LastUnfulfilled,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generator to run.
    #[arg(long, value_enum)]
    pub kind: GraphKind,
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,
    /// Target number of undirected edges (ring-local, tree-local, uniform).
    #[arg(long)]
    pub edges: Option<usize>,
    /// Target average degree (avg-degree).
    #[arg(long)]
    pub avg_degree: Option<f64>,
    /// Ring distance used by the locality-biased generators.
    #[arg(long, value_enum, default_value_t = DistanceArg::Quadratic)]
    pub distance: DistanceArg,
    /// Distance exponent of the tree-local generator.
    #[arg(long, default_value_t = 3.0)]
    pub exponent: f64,
    /// Degree shares per bucket, comma separated (same-degree).
    #[arg(long, value_delimiter = ',')]
    pub percentages: Vec<f64>,
    /// Bucket selection of the same-degree generator.
    #[arg(long, value_enum, default_value_t = StrategyArg::ScarcityBiased)]
    pub strategy: StrategyArg,
    /// Deterministic seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Output file; `.bin` writes bincode, anything else JSON.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(args.seed);
    let n = args.vertices;
    let graph: AdjacencyList = match args.kind {
        GraphKind::Tree => random_tree(n, &mut rng),
        GraphKind::LocalTree => local_tree(n, args.distance.into(), &mut rng)?,
        GraphKind::RingLocal => {
            ring_local_graph(n, required_edges(args)?, args.distance.into(), &mut rng)?
        }
        GraphKind::TreeLocal => tree_local_graph(n, required_edges(args)?, args.exponent, &mut rng)?,
        GraphKind::Uniform => uniform_graph(n, required_edges(args)?, &mut rng)?,
        GraphKind::AvgDegree => {
            let avg_degree = args
                .avg_degree
                .ok_or("--avg-degree is required for avg-degree graphs")?;
            average_degree_graph(n, avg_degree, &mut rng)?
        }
        GraphKind::SameDegree => {
            if args.percentages.is_empty() {
                return Err("--percentages is required for same-degree graphs".into());
            }
            let options = SameDegreeOptions {
                strategy: args.strategy.into(),
                ..SameDegreeOptions::default()
            };
            same_degree_graph_with(n, &args.percentages, &options, &mut rng)?
        }
    };

    info!(
        "generated {:?} graph: {} vertices, {} edges",
        args.kind,
        graph.num_vertices(),
        graph.num_undirected_edges()
    );
    write_graph(&args.out, &graph.to_compressed())?;
    println!(
        "{} {} {}",
        args.out.display(),
        graph.num_vertices(),
        graph.num_undirected_edges()
    );
    Ok(())
}

fn required_edges(args: &GenerateArgs) -> Result<usize, Box<dyn Error>> {
    args.edges
        .ok_or_else(|| format!("--edges is required for {:?} graphs", args.kind).into())
}
