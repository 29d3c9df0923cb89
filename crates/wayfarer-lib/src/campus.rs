//! Campus walking-path dataset: buildings keyed by short name plus a
//! weighted graph of map points connected by walkway segments.
//!
//! Two files make up the dataset. `campus_buildings.tsv` holds one
//! tab-separated `short  long  x  y` row per building. `campus_paths.tsv`
//! is sectioned: an unindented `x,y` line opens a section at that origin
//! point, and every following tab-indented `x,y: distance` line records a
//! walkway segment from the origin to that endpoint. The file lists both
//! directions of every walkway itself, so segments are inserted exactly as
//! written.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::suggest;
use crate::weighted::{self, WeightedPath};

/// Buildings file expected inside a campus data directory.
pub const BUILDINGS_FILENAME: &str = "campus_buildings.tsv";
/// Walkway segments file expected inside a campus data directory.
pub const PATHS_FILENAME: &str = "campus_paths.tsv";

/// Pixel coordinate on the campus map. The origin sits in the upper-left
/// corner: x grows to the right and y grows downward.
///
/// Equality, hashing, and ordering go through the bit-level total order of
/// the coordinates (`f64::total_cmp`), so points are usable as graph keys.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    /// Eight-way compass heading of the trajectory from `self` to `end`,
    /// split into pi/8 sectors around the axes. Accounts for y growing
    /// downward on the map.
    pub fn direction_to(&self, end: &Point) -> Compass {
        let dx = end.x - self.x;
        let dy = -(end.y - self.y);
        let theta = dy.atan2(dx);
        let sector = std::f64::consts::FRAC_PI_8;

        if (-sector..=sector).contains(&theta) {
            Compass::East
        } else if theta > sector && theta < 3.0 * sector {
            Compass::NorthEast
        } else if (3.0 * sector..=5.0 * sector).contains(&theta) {
            Compass::North
        } else if theta > 5.0 * sector && theta < 7.0 * sector {
            Compass::NorthWest
        } else if theta >= 7.0 * sector || theta <= -7.0 * sector {
            Compass::West
        } else if theta > -7.0 * sector && theta < -5.0 * sector {
            Compass::SouthWest
        } else if (-5.0 * sector..=-3.0 * sector).contains(&theta) {
            Compass::South
        } else {
            Compass::SouthEast
        }
    }
}

/// Compass heading used when narrating a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    /// Short map-legend abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Compass::North => "N",
            Compass::NorthEast => "NE",
            Compass::East => "E",
            Compass::SouthEast => "SE",
            Compass::South => "S",
            Compass::SouthWest => "SW",
            Compass::West => "W",
            Compass::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Campus building with its map location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

/// Single narrated step of a planned walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkStep {
    pub distance: f64,
    pub direction: Compass,
    pub to: Point,
}

/// Least-cost walk between two buildings. An empty step list means start
/// and goal are the same building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkPlan {
    pub start: Building,
    pub goal: Building,
    pub steps: Vec<WalkStep>,
    pub total_distance: f64,
}

impl WalkPlan {
    fn from_path(start: Building, goal: Building, path: &WeightedPath<Point>) -> Self {
        let steps = path
            .edges
            .iter()
            .map(|edge| WalkStep {
                distance: edge.weight,
                direction: edge.parent.direction_to(&edge.child),
                to: edge.child,
            })
            .collect();
        Self {
            start,
            goal,
            steps,
            total_distance: path.total,
        }
    }

    /// Number of walkway segments in the plan.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Owned campus model: building directory plus the walkway graph. The graph
/// holds many points that are not buildings; those are intermediate points
/// the walkways route through.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    buildings: BTreeMap<String, Building>,
    graph: Graph<Point, f64>,
}

impl CampusMap {
    /// Load both campus files from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::from_files(
            &data_dir.join(BUILDINGS_FILENAME),
            &data_dir.join(PATHS_FILENAME),
        )
    }

    /// Load the campus model from explicit file paths.
    pub fn from_files(buildings_path: &Path, paths_path: &Path) -> Result<Self> {
        let buildings = parse_buildings(buildings_path)?;
        let segments = parse_paths(paths_path)?;

        let mut graph = Graph::new();
        for segment in &segments {
            graph.add_node(segment.from);
            graph.add_node(segment.to);
            graph.add_edge(&segment.from, &segment.to, segment.distance)?;
        }

        info!(
            buildings = buildings.len(),
            segments = segments.len(),
            points = graph.node_count(),
            "campus map loaded"
        );
        Ok(Self { buildings, graph })
    }

    /// All buildings in ascending short-name order.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Look up a building by its exact short name.
    pub fn building(&self, short_name: &str) -> Option<&Building> {
        self.buildings.get(short_name)
    }

    /// The underlying walkway graph, exposed for diagnostics.
    pub fn graph(&self) -> &Graph<Point, f64> {
        &self.graph
    }

    /// Short names similar to `name`, best match first.
    pub fn fuzzy_building_matches(&self, name: &str, limit: usize) -> Vec<String> {
        suggest::closest_matches(self.buildings.keys().map(String::as_str), name, limit)
    }

    /// Compute the least-cost walk from `from` to `to` (building short
    /// names). Unknown names surface [`Error::UnknownBuilding`] with
    /// suggestions; a disconnected pair surfaces [`Error::PathNotFound`].
    pub fn shortest_walk(&self, from: &str, to: &str) -> Result<WalkPlan> {
        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;

        let Some(path) = weighted::shortest_path(&self.graph, &start.location, &goal.location)
        else {
            return Err(Error::PathNotFound {
                start: from.to_string(),
                goal: to.to_string(),
            });
        };
        Ok(WalkPlan::from_path(start.clone(), goal.clone(), &path))
    }

    fn resolve(&self, name: &str) -> Result<&Building> {
        self.building(name).ok_or_else(|| Error::UnknownBuilding {
            name: name.to_string(),
            suggestions: self.fuzzy_building_matches(name, 3),
        })
    }
}

struct Segment {
    from: Point,
    to: Point,
    distance: f64,
}

fn parse_buildings(path: &Path) -> Result<BTreeMap<String, Building>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(path)?);

    let mut buildings = BTreeMap::new();
    for (row, record) in reader.records().enumerate() {
        let line = row + 1;
        let record = record?;
        if record.len() < 4 {
            return Err(Error::MalformedRecord {
                path: path.to_path_buf(),
                line,
                message: format!(
                    "expected 4 tab-separated fields, found {}",
                    record.len()
                ),
            });
        }
        let x = parse_coordinate(&record[2], "x", path, line)?;
        let y = parse_coordinate(&record[3], "y", path, line)?;
        let building = Building {
            short_name: record[0].to_string(),
            long_name: record[1].to_string(),
            location: Point { x, y },
        };
        buildings.insert(building.short_name.clone(), building);
    }
    Ok(buildings)
}

fn parse_coordinate(text: &str, axis: &str, path: &Path, line: usize) -> Result<f64> {
    let value: f64 = text.trim().parse().map_err(|err| Error::MalformedRecord {
        path: path.to_path_buf(),
        line,
        message: format!("invalid {axis} coordinate '{}': {err}", text.trim()),
    })?;
    if !value.is_finite() {
        return Err(Error::MalformedRecord {
            path: path.to_path_buf(),
            line,
            message: format!("non-finite {axis} coordinate '{}'", text.trim()),
        });
    }
    Ok(value)
}

fn parse_paths(path: &Path) -> Result<Vec<Segment>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut segments = Vec::new();
    let mut origin: Option<Point> = None;

    for (row, line) in reader.lines().enumerate() {
        let number = row + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('\t') {
            let Some(from) = origin else {
                return Err(Error::MalformedRecord {
                    path: path.to_path_buf(),
                    line: number,
                    message: "segment line appears before any origin point".to_string(),
                });
            };
            let Some((point_text, distance_text)) = rest.split_once(": ") else {
                return Err(Error::MalformedRecord {
                    path: path.to_path_buf(),
                    line: number,
                    message: "expected `x,y: distance`".to_string(),
                });
            };
            let to = parse_point(point_text, path, number)?;
            let distance: f64 =
                distance_text
                    .trim()
                    .parse()
                    .map_err(|err| Error::MalformedRecord {
                        path: path.to_path_buf(),
                        line: number,
                        message: format!("invalid distance '{}': {err}", distance_text.trim()),
                    })?;
            if !distance.is_finite() {
                return Err(Error::MalformedRecord {
                    path: path.to_path_buf(),
                    line: number,
                    message: format!("non-finite distance '{}'", distance_text.trim()),
                });
            }
            segments.push(Segment { from, to, distance });
        } else {
            origin = Some(parse_point(&line, path, number)?);
        }
    }
    Ok(segments)
}

fn parse_point(text: &str, path: &Path, line: usize) -> Result<Point> {
    let Some((x_text, y_text)) = text.trim().split_once(',') else {
        return Err(Error::MalformedRecord {
            path: path.to_path_buf(),
            line,
            message: format!(
                "expected comma-separated coordinates, found '{}'",
                text.trim()
            ),
        });
    };
    let x = parse_coordinate(x_text, "x", path, line)?;
    let y = parse_coordinate(y_text, "y", path, line)?;
    Ok(Point { x, y })
}
