#![deny(warnings)]
//! Core library for the wayfarer route tools.
//!
//! The crate centers on a mutable directed labeled multigraph
//! ([`Graph`]) and two searches over it: least-total-weight
//! ([`shortest_path`]) and fewest-hops ([`fewest_hops`]). On top of
//! those sit two dataset models, a campus walkway map ([`CampusMap`])
//! and a character co-appearance network ([`AppearanceNetwork`]),
//! plus display-ready summaries of their search results.

pub mod campus;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
mod suggest;
pub mod unweighted;
pub mod weighted;

pub use campus::{Building, CampusMap, Compass, Point, WalkPlan, WalkStep};
pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
pub use network::AppearanceNetwork;
pub use output::{render_walk, CostRecord, CostSummary, HopRecord, HopSummary};
pub use unweighted::{fewest_hops, Hop};
pub use weighted::{co_occurrence_graph, shortest_path, WeightedEdge, WeightedPath};
