//! Output format selection for command results.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// How a command renders its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Print `value` either as the plain text produced by `render` or as
    /// its JSON serialization.
    pub fn emit<T, F>(self, value: &T, render: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match self {
            OutputFormat::Text => print!("{}", render(value)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }
}
