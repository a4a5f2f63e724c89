use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use sep_core::rng::RngHandle;
use sep_gen::diameter_overview;
use sep_graph::{
    average_degree, canonical_hash, degree_distribution, is_connected, tree_diameter, GraphView,
};

use super::read_graph;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Graph file to summarise.
    #[arg(long, required_unless_present = "tree_sizes")]
    pub graph: Option<PathBuf>,
    /// Number of degree bins; the last bin collects all larger degrees.
    #[arg(long, default_value_t = 10)]
    pub max_degree: usize,
    /// Print diameters of random trees of these sizes instead.
    #[arg(long, value_delimiter = ',')]
    pub tree_sizes: Vec<usize>,
    /// Trees sampled per size.
    #[arg(long, default_value_t = 5)]
    pub runs: usize,
    /// Seed for the sampled trees.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.graph {
        let graph = read_graph(path)?;
        println!("vertices {}", graph.num_vertices());
        println!("edges {}", graph.num_undirected_edges());
        println!("average_degree {:.4}", average_degree(&graph));
        println!("connected {}", is_connected(&graph));
        println!("diameter_lower_bound {}", tree_diameter(&graph));
        println!("hash {}", canonical_hash(&graph));
        for (degree, fraction) in degree_distribution(&graph, args.max_degree)
            .into_iter()
            .enumerate()
        {
            println!("degree {degree} {fraction:.4}");
        }
    }

    if !args.tree_sizes.is_empty() {
        let mut rng = RngHandle::from_seed(args.seed);
        for (size, diameter) in diameter_overview(args.tree_sizes.iter().copied(), args.runs, &mut rng)
        {
            println!("tree {size} {diameter}");
        }
    }
    Ok(())
}
