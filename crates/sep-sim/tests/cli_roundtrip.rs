use std::fs;
use std::path::Path;
use std::process::Command;

use sep_graph::{graph_from_bytes, graph_from_json, GraphView};
use tempfile::tempdir;

fn sep_sim(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_sep-sim"))
        .args(args)
        .output()
        .expect("failed to launch sep-sim");
    assert!(
        output.status.success(),
        "sep-sim {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn generate_writes_json_and_bincode() {
    let dir = tempdir().expect("tmp dir");
    let json_path = dir.path().join("tree.json");
    let bin_path = dir.path().join("graphs/uniform.bin");

    sep_sim(&[
        "generate", "--kind", "tree", "--vertices", "300", "--seed", "4", "--out",
        path_str(&json_path),
    ]);
    let tree = graph_from_json(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(tree.num_vertices(), 300);
    assert_eq!(tree.num_undirected_edges(), 299);

    sep_sim(&[
        "generate", "--kind", "uniform", "--vertices", "200", "--edges", "500", "--out",
        path_str(&bin_path),
    ]);
    let uniform = graph_from_bytes(&fs::read(&bin_path).unwrap()).unwrap();
    assert_eq!(uniform.num_undirected_edges(), 500);
}

#[test]
fn generate_reports_missing_parameters() {
    let dir = tempdir().expect("tmp dir");
    let out = dir.path().join("ring.json");
    let output = Command::new(env!("CARGO_BIN_EXE_sep-sim"))
        .args([
            "generate", "--kind", "ring-local", "--vertices", "50", "--out",
            path_str(&out),
        ])
        .output()
        .expect("failed to launch sep-sim");
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn decompose_appends_record_lines() {
    let dir = tempdir().expect("tmp dir");
    let graph_path = dir.path().join("graph.json");
    let config_path = dir.path().join("config.yaml");
    let records_path = dir.path().join("records.txt");

    sep_sim(&[
        "generate", "--kind", "tree-local", "--vertices", "800", "--edges", "1600", "--seed",
        "2", "--out", path_str(&graph_path),
    ]);
    fs::write(&config_path, "threshold: 500\nquality: fast\nseed: 7\n").unwrap();

    let stdout = sep_sim(&[
        "decompose", "--graph", path_str(&graph_path), "--config", path_str(&config_path),
        "--threshold", "60", "--records", path_str(&records_path), "--bins", "4",
    ]);
    assert!(stdout.contains("leaves="));

    let lines = fs::read_to_string(&records_path).unwrap();
    let first = lines.lines().next().expect("at least one split");
    let fields: Vec<usize> = first
        .split_whitespace()
        .map(|field| field.parse().unwrap())
        .collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], 800);

    let count = lines.lines().count();
    sep_sim(&[
        "decompose", "--graph", path_str(&graph_path), "--threshold", "60", "--records",
        path_str(&records_path),
    ]);
    let appended = fs::read_to_string(&records_path).unwrap();
    assert!(appended.lines().count() > count);
}

#[test]
fn stats_prints_degree_distribution() {
    let dir = tempdir().expect("tmp dir");
    let graph_path = dir.path().join("tree.json");
    sep_sim(&[
        "generate", "--kind", "tree", "--vertices", "100", "--out", path_str(&graph_path),
    ]);

    let stdout = sep_sim(&[
        "stats", "--graph", path_str(&graph_path), "--max-degree", "4",
    ]);
    assert!(stdout.contains("vertices 100"));
    assert!(stdout.contains("edges 99"));
    assert!(stdout.contains("connected true"));
    assert_eq!(stdout.lines().filter(|line| line.starts_with("degree ")).count(), 4);

    let trees = sep_sim(&["stats", "--tree-sizes", "10,20", "--runs", "2"]);
    assert_eq!(trees.lines().filter(|line| line.starts_with("tree ")).count(), 4);
}
