use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walks and co-appearance path utilities")]
struct Cli {
    /// Directory holding the dataset files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every building on the campus map.
    Buildings,
    /// Narrate the shortest walk between two buildings.
    Walk {
        /// Starting building short name.
        #[arg(long = "from")]
        from: String,
        /// Destination building short name.
        #[arg(long = "to")]
        to: String,
    },
    /// List every character in the appearance network.
    Characters,
    /// Find the fewest-hops connection between two characters.
    Hops {
        /// Starting character name.
        #[arg(long = "from")]
        from: String,
        /// Destination character name.
        #[arg(long = "to")]
        to: String,
    },
    /// Find the strongest co-appearance path between two characters.
    Cost {
        /// Starting character name.
        #[arg(long = "from")]
        from: String,
        /// Destination character name.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Buildings => commands::buildings::handle(&cli.data_dir, cli.format),
        Command::Walk { from, to } => {
            commands::walk::handle(&cli.data_dir, cli.format, &from, &to)
        }
        Command::Characters => commands::characters::handle(&cli.data_dir, cli.format),
        Command::Hops { from, to } => {
            commands::costar::handle_hops(&cli.data_dir, cli.format, &from, &to)
        }
        Command::Cost { from, to } => {
            commands::costar::handle_cost(&cli.data_dir, cli.format, &from, &to)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
