use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sep_decomp::{
    binned_statistic, decompose_with_sink, DecompositionConfig, LevelStructureOracle,
    QualityLevel, ReportSink, SeparatorRecord,
};

use super::read_graph;

#[derive(Args, Debug)]
pub struct DecomposeArgs {
    /// Graph file produced by `sep-sim generate`.
    #[arg(long)]
    pub graph: PathBuf,
    /// Optional YAML configuration; flags override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Leaf threshold.
    #[arg(long)]
    pub threshold: Option<usize>,
    /// Oracle effort tier (fast, eco, strong or a -social variant).
    #[arg(long)]
    pub quality: Option<QualityLevel>,
    /// Master seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Split sibling fragments in parallel.
    #[arg(long)]
    pub parallel: bool,
    /// Maximum recursion depth.
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// File receiving one `fragment_size separator_size` line per split.
    #[arg(long)]
    pub records: Option<PathBuf>,
    /// Print log2-binned separator statistics with this many bins.
    #[arg(long)]
    pub bins: Option<usize>,
}

/// Prints every record as soon as it is produced.
struct PrintSink;

impl ReportSink for PrintSink {
    fn record(&mut self, record: &SeparatorRecord) {
        println!("{record}");
    }
}

pub fn run(args: &DecomposeArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    let graph = read_graph(&args.graph)?;

    let decomposition = decompose_with_sink(
        graph,
        &LevelStructureOracle::default(),
        &config,
        &mut PrintSink,
    )?;

    if let Some(path) = &args.records {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for record in &decomposition.records {
            writeln!(file, "{record}")?;
        }
    }

    println!(
        "leaves={} max_leaf={} separators={} separator_vertices={}",
        decomposition.leaf_count(),
        decomposition.max_leaf_size(),
        decomposition.records.len(),
        decomposition.total_separator_size()
    );

    if let Some(num_bins) = args.bins {
        for bin in binned_statistic(&decomposition.size_pairs(), num_bins) {
            println!(
                "{:>5.2}: {:.2} ({} splits)",
                bin.mean_log_fragment_size, bin.mean_log_separator_size, bin.count
            );
        }
    }
    Ok(())
}

fn load_config(args: &DecomposeArgs) -> Result<DecompositionConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => DecompositionConfig::from_yaml_str(&fs::read_to_string(path)?)?,
        None => DecompositionConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(quality) = args.quality {
        config.quality = quality;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.parallel {
        config.parallel = true;
    }
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }
    config.validate()?;
    Ok(config)
}
