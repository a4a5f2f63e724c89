pub mod decompose;
pub mod generate;
pub mod stats;

use std::error::Error;
use std::fs;
use std::path::Path;

use sep_graph::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, CompressedGraph};

fn is_binary(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("bin")
}

/// Reads a graph; `.bin` files are bincode, everything else JSON.
pub fn read_graph(path: &Path) -> Result<CompressedGraph, Box<dyn Error>> {
    let graph = if is_binary(path) {
        graph_from_bytes(&fs::read(path)?)?
    } else {
        graph_from_json(&fs::read_to_string(path)?)?
    };
    Ok(graph)
}

/// Writes a graph in the format implied by the file extension.
pub fn write_graph(path: &Path, graph: &CompressedGraph) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if is_binary(path) {
        fs::write(path, graph_to_bytes(graph)?)?;
    } else {
        fs::write(path, graph_to_json(graph)?)?;
    }
    Ok(())
}
