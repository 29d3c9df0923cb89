//! Campus walk subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use wayfarer_lib::{render_walk, CampusMap};

use crate::output::OutputFormat;

pub fn handle(data_dir: &Path, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let map = CampusMap::load(data_dir)
        .with_context(|| format!("failed to load campus data from {}", data_dir.display()))?;

    let plan = map.shortest_walk(from, to)?;
    format.emit(&plan, render_walk)
}
