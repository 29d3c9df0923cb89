// One module per subcommand; main.rs only parses and dispatches.

pub mod buildings;
pub mod characters;
pub mod costar;
pub mod walk;
