pub mod simulate;
pub mod tree;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use types::{wire::Map, Graph};

pub fn load_graph(path: &Path) -> Result<Graph> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("could not read map file {}", path.display()))?;
    let map: Map = serde_json::from_str(&raw).wrap_err("map file is not valid JSON")?;

    let graph = Graph::from_map(&map)?;
    info!(
        sites = graph.site_count(),
        rivers = graph.river_count(),
        mines = graph.mines().len(),
        "loaded map"
    );

    Ok(graph)
}
