//! Co-appearance path subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use wayfarer_lib::network::APPEARANCES_FILENAME;
use wayfarer_lib::{AppearanceNetwork, CostSummary, HopSummary};

use crate::output::OutputFormat;

pub fn handle_hops(data_dir: &Path, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let network = load_network(data_dir)?;
    let hops = network.fewest_hops_between(from, to)?;
    let summary = HopSummary::from_hops(from, to, &hops);
    format.emit(&summary, HopSummary::render_plain)
}

pub fn handle_cost(data_dir: &Path, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let network = load_network(data_dir)?;
    let path = network.lightest_path_between(from, to)?;
    let summary = CostSummary::from_path(from, to, &path);
    format.emit(&summary, CostSummary::render_plain)
}

fn load_network(data_dir: &Path) -> Result<AppearanceNetwork> {
    let path = data_dir.join(APPEARANCES_FILENAME);
    AppearanceNetwork::load(&path)
        .with_context(|| format!("failed to load appearances from {}", path.display()))
}
