//! Character co-appearance dataset: characters grouped by the books they
//! appear in, convertible into labeled or weighted search graphs.
//!
//! The file format is two tab-separated columns, `character  book`, one
//! appearance per row. A character may appear with no book column at all;
//! such characters join the roster but connect to nothing.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::suggest;
use crate::unweighted::{self, Hop};
use crate::weighted::{self, WeightedPath};

/// Appearances file expected inside a data directory.
pub const APPEARANCES_FILENAME: &str = "appearances.tsv";

/// Roster of characters and the books each appears in.
#[derive(Debug, Clone, Default)]
pub struct AppearanceNetwork {
    characters: BTreeSet<String>,
    books: BTreeMap<String, BTreeSet<String>>,
}

impl AppearanceNetwork {
    /// Load an appearances file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::from_reader(File::open(path)?, path)
    }

    /// Parse an appearances file from any reader. `origin` names the source
    /// in error messages.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let mut csv = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut characters = BTreeSet::new();
        let mut books: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (row, record) in csv.records().enumerate() {
            let record = record?;
            let character = record
                .get(0)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| Error::MalformedRecord {
                    path: origin.to_path_buf(),
                    line: row + 1,
                    message: "missing character name".to_string(),
                })?;
            characters.insert(character.to_string());
            if let Some(book) = record.get(1).map(str::trim).filter(|b| !b.is_empty()) {
                books
                    .entry(book.to_string())
                    .or_default()
                    .insert(character.to_string());
            }
        }

        info!(
            characters = characters.len(),
            books = books.len(),
            "appearance network loaded"
        );
        Ok(Self { characters, books })
    }

    /// All character names in ascending order.
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(String::as_str)
    }

    pub fn contains_character(&self, name: &str) -> bool {
        self.characters.contains(name)
    }

    /// Character names similar to `name`, best match first.
    pub fn fuzzy_character_matches(&self, name: &str, limit: usize) -> Vec<String> {
        suggest::closest_matches(self.characters(), name, limit)
    }

    /// Graph with one edge per shared book per ordered character pair,
    /// labeled with the book identifier.
    pub fn unweighted_graph(&self) -> Result<Graph<String, String>> {
        let mut graph = Graph::new();
        for character in &self.characters {
            graph.add_node(character.clone());
        }
        for (book, members) in &self.books {
            for a in members {
                for b in members {
                    if a != b {
                        graph.add_edge(a, b, book.clone())?;
                    }
                }
            }
        }
        Ok(graph)
    }

    /// Graph where each pair of co-appearing characters is joined by a
    /// single edge weighing the inverse of their shared-book count.
    pub fn weighted_graph(&self) -> Result<Graph<String, f64>> {
        weighted::co_occurrence_graph(&self.characters, &self.books)
    }

    /// Path with the fewest hops between two characters, each hop labeled
    /// with a book both endpoints appear in.
    pub fn fewest_hops_between(&self, from: &str, to: &str) -> Result<Vec<Hop<String, String>>> {
        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;
        let graph = self.unweighted_graph()?;
        unweighted::fewest_hops(&graph, &start.to_string(), &goal.to_string()).ok_or_else(|| {
            Error::PathNotFound {
                start: start.to_string(),
                goal: goal.to_string(),
            }
        })
    }

    /// Minimum-total-weight path between two characters over the inverse
    /// co-appearance-count graph.
    pub fn lightest_path_between(&self, from: &str, to: &str) -> Result<WeightedPath<String>> {
        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;
        let graph = self.weighted_graph()?;
        weighted::shortest_path(&graph, &start.to_string(), &goal.to_string()).ok_or_else(|| {
            Error::PathNotFound {
                start: start.to_string(),
                goal: goal.to_string(),
            }
        })
    }

    fn resolve<'a>(&'a self, name: &str) -> Result<&'a str> {
        self.characters
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownCharacter {
                name: name.to_string(),
                suggestions: self.fuzzy_character_matches(name, 3),
            })
    }
}
