//! Buildings listing subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use wayfarer_lib::{Building, CampusMap};

use crate::output::OutputFormat;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let map = CampusMap::load(data_dir)
        .with_context(|| format!("failed to load campus data from {}", data_dir.display()))?;

    let buildings: Vec<Building> = map.buildings().cloned().collect();
    format.emit(&buildings, |buildings| {
        let mut out = String::new();
        for building in buildings {
            out.push_str(&format!(
                "{}\t{}\n",
                building.short_name, building.long_name
            ));
        }
        out
    })
}
