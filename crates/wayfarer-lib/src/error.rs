use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// A dataset record could not be parsed.
    #[error("malformed record in {path} at line {line}: {message}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// An operation referenced a node that is not stored in the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// Raised when a building short name could not be found in the campus
    /// dataset.
    #[error("unknown building: {name}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a character name could not be found in the appearance
    /// dataset.
    #[error("unknown character: {name}{}", format_suggestions(.suggestions))]
    UnknownCharacter {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no path connects the two requested endpoints. Distinct
    /// from the empty path, which means start and goal coincide.
    #[error("no path found between {start} and {goal}")]
    PathNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_building_lists_suggestions() {
        let err = Error::UnknownBuilding {
            name: "CSX".to_string(),
            suggestions: vec!["CSE".to_string(), "CSB".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("Did you mean one of"));
        assert!(message.contains("'CSE'"));
        assert!(message.contains("'CSB'"));
    }

    #[test]
    fn unknown_node_without_suggestions_is_terse() {
        let err = Error::UnknownNode {
            node: "(1.0, 2.0)".to_string(),
        };
        assert_eq!(err.to_string(), "unknown node: (1.0, 2.0)");
    }
}
