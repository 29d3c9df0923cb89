//! Unweighted breadth-first search with labeled path reconstruction.
//!
//! Works over graphs with arbitrary orderable labels. Each discovered node
//! records the hop that reached it (predecessor plus the lexicographically
//! smallest label between the pair), so the reconstructed path is
//! deterministic even when parallel edges exist.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Single labeled hop of a reconstructed path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop<N, E> {
    pub label: E,
    pub parent: N,
    pub child: N,
}

/// Find a fewest-edges path from `start` to `dest` and reconstruct it as an
/// ordered hop sequence.
///
/// Returns `Some(vec![])` when `start == dest`, `None` when the queue drains
/// without dequeuing `dest` (the explicit no-path signal), and `None` when
/// either endpoint is not stored in the graph.
///
/// A node is enqueued and assigned its hop the first time it is discovered
/// and never revisited, which guarantees the fewest-hops property.
pub fn fewest_hops<N, E>(graph: &Graph<N, E>, start: &N, dest: &N) -> Option<Vec<Hop<N, E>>>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + PartialEq + PartialOrd,
{
    if start == dest {
        return Some(Vec::new());
    }
    let start_id = graph.node_id(start)?;
    let dest_id = graph.node_id(dest)?;

    let mut predecessors: HashMap<NodeId, Option<(NodeId, E)>> = HashMap::new();
    let mut queue = VecDeque::new();
    predecessors.insert(start_id, None);
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        if current == dest_id {
            debug!(discovered = predecessors.len(), "unweighted search reached goal");
            return Some(reconstruct(graph, &predecessors, dest_id));
        }
        for child in graph.child_ids(current) {
            if predecessors.contains_key(&child) {
                continue;
            }
            let Some(label) = graph.min_edge_label(current, child).cloned() else {
                continue;
            };
            predecessors.insert(child, Some((current, label)));
            queue.push_back(child);
        }
    }

    debug!(discovered = predecessors.len(), "unweighted search exhausted queue");
    None
}

fn reconstruct<N, E>(
    graph: &Graph<N, E>,
    predecessors: &HashMap<NodeId, Option<(NodeId, E)>>,
    dest: NodeId,
) -> Vec<Hop<N, E>>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + PartialEq + PartialOrd,
{
    let mut hops = Vec::new();
    let mut current = dest;
    while let Some(Some((parent, label))) = predecessors.get(&current) {
        hops.push(Hop {
            label: label.clone(),
            parent: graph.node(*parent).clone(),
            child: graph.node(current).clone(),
        });
        current = *parent;
    }
    hops.reverse();
    hops
}
