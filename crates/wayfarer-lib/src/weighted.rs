//! Weighted least-cost search over a [`Graph`] with `f64` edge labels.
//!
//! Implements the lazy-deletion variant of Dijkstra's algorithm: the frontier
//! may hold several entries for the same node at different costs, and a node
//! is finalized the first time it is popped. All edge weights must be
//! non-negative; that precondition underwrites the early return when the
//! destination is popped and is not re-validated per call.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Directed edge of a computed least-cost path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge<N> {
    pub weight: f64,
    pub parent: N,
    pub child: N,
}

/// Ordered edge sequence from start to destination plus its cumulative
/// weight. An empty edge list means start and destination coincide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath<N> {
    pub edges: Vec<WeightedEdge<N>>,
    pub total: f64,
}

impl<N> WeightedPath<N> {
    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// True iff start and destination coincide.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Compute the least cumulative-weight path from `start` to `dest`.
///
/// Returns `Some` with an empty path when `start == dest`, `None` when the
/// frontier empties without reaching `dest` (the explicit no-path signal),
/// and `None` when either endpoint is not stored in the graph.
///
/// Parallel edges between a pair collapse to their smallest weight. Results
/// are deterministic: children are expanded in ascending node order and
/// equal-cost frontier entries pop in ascending [`NodeId`] order.
pub fn shortest_path<N>(graph: &Graph<N, f64>, start: &N, dest: &N) -> Option<WeightedPath<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    if start == dest {
        return Some(WeightedPath {
            edges: Vec::new(),
            total: 0.0,
        });
    }
    let start_id = graph.node_id(start)?;
    let dest_id = graph.node_id(dest)?;

    let mut best: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, (NodeId, f64)> = HashMap::new();
    let mut finished: HashSet<NodeId> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    best.insert(start_id, 0.0);
    frontier.push(QueueEntry::new(start_id, 0.0));

    while let Some(entry) = frontier.pop() {
        // Entries pop in ascending cost, so the first pop of the destination
        // carries its minimal cost.
        if entry.node == dest_id {
            debug!(settled = finished.len(), "weighted search reached goal");
            return Some(reconstruct(graph, &parents, start_id, dest_id));
        }
        if !finished.insert(entry.node) {
            // Stale lazy-deletion entry; the node was finalized earlier at a
            // lower cost.
            continue;
        }

        let base = entry.cost.0;
        for child in graph.child_ids(entry.node) {
            if finished.contains(&child) {
                continue;
            }
            let Some(weight) = graph.min_edge_label(entry.node, child).copied() else {
                continue;
            };
            let cost = base + weight;
            if cost < best.get(&child).copied().unwrap_or(f64::INFINITY) {
                best.insert(child, cost);
                parents.insert(child, (entry.node, weight));
                frontier.push(QueueEntry::new(child, cost));
            }
        }
    }

    debug!(settled = finished.len(), "weighted search exhausted frontier");
    None
}

/// Derive a weighted graph from a node set and a co-occurrence table.
///
/// Every node in `nodes` is added to the graph. For each unordered pair of
/// distinct nodes appearing together under at least one group identifier,
/// one directed edge is added per ordered direction, weighted as the
/// multiplicative inverse of the number of identifiers under which the pair
/// co-occurs. No self edge is ever derived: a node's self-weight is zero by
/// definition, never by counting.
///
/// A group member absent from `nodes` surfaces [`Error::UnknownNode`].
pub fn co_occurrence_graph<N, K>(
    nodes: &BTreeSet<N>,
    groups: &BTreeMap<K, BTreeSet<N>>,
) -> Result<Graph<N, f64>>
where
    N: Clone + Eq + Hash + Ord + Display,
    K: Ord,
{
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(node.clone());
    }

    let mut counts: HashMap<(NodeId, NodeId), u32> = HashMap::new();
    for members in groups.values() {
        let mut ids = Vec::with_capacity(members.len());
        for member in members {
            let id = graph.node_id(member).ok_or_else(|| Error::UnknownNode {
                node: member.to_string(),
            })?;
            ids.push(id);
        }
        for &parent in &ids {
            for &child in &ids {
                if parent != child {
                    *counts.entry((parent, child)).or_insert(0) += 1;
                }
            }
        }
    }

    debug!(
        nodes = nodes.len(),
        pairs = counts.len(),
        "derived co-occurrence weights"
    );

    for ((parent, child), count) in counts {
        let parent_key = graph.node(parent).clone();
        let child_key = graph.node(child).clone();
        graph.add_edge(&parent_key, &child_key, 1.0 / f64::from(count))?;
    }
    Ok(graph)
}

fn reconstruct<N>(
    graph: &Graph<N, f64>,
    parents: &HashMap<NodeId, (NodeId, f64)>,
    start: NodeId,
    dest: NodeId,
) -> WeightedPath<N>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut edges = Vec::new();
    let mut total = 0.0;
    let mut current = dest;
    while current != start {
        // Every finalized non-start node recorded its predecessor when it was
        // first relaxed.
        let (parent, weight) = parents[&current];
        edges.push(WeightedEdge {
            weight,
            parent: graph.node(parent).clone(),
            child: graph.node(current).clone(),
        });
        total += weight;
        current = parent;
    }
    edges.reverse();
    WeightedPath { edges, total }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // ascending node id as the deterministic secondary key.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
