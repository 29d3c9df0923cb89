//! Character listing subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use wayfarer_lib::network::APPEARANCES_FILENAME;
use wayfarer_lib::AppearanceNetwork;

use crate::output::OutputFormat;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let path = data_dir.join(APPEARANCES_FILENAME);
    let network = AppearanceNetwork::load(&path)
        .with_context(|| format!("failed to load appearances from {}", path.display()))?;

    let names: Vec<String> = network.characters().map(str::to_string).collect();
    format.emit(&names, |names| {
        let mut out = String::new();
        for name in names {
            out.push_str(name);
            out.push('\n');
        }
        out
    })
}
