//! Generic mutable directed labeled multigraph.
//!
//! Nodes live in an append-only arena and are addressed internally by a
//! stable [`NodeId`]; a side map resolves caller-supplied keys to ids so the
//! search algorithms never hash or compare composite keys while expanding
//! the frontier. Edges are unidirectional, self loops are allowed, and
//! multiple edges (with identical or distinct labels) may connect the same
//! ordered pair of nodes.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Stable handle to a node slot inside a [`Graph`] arena.
///
/// Ids are assigned in insertion order and are never reused, so a handle
/// obtained from a graph stays valid for that graph's lifetime even across
/// node removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeEntry<N, E> {
    key: N,
    /// Outgoing adjacency. Invariant: no child maps to an empty label list.
    children: HashMap<NodeId, Vec<E>>,
}

/// Generic directed labeled multigraph keyed by a comparable node type.
///
/// `N` is the node key type, `E` the edge label type. Labels only need
/// `PartialOrd` because `f64` weights are a primary use case; ordering of
/// incomparable labels falls back to [`Ordering::Greater`] the same way the
/// rest of the crate orders floats.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    entries: Vec<NodeEntry<N, E>>,
    /// Live nodes only. Removed nodes keep their arena slot (so dangling
    /// references stay renderable) but drop out of this map.
    index: HashMap<N, NodeId>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

fn compare_labels<E: PartialOrd>(a: &E, b: &E) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Greater)
}

impl<N, E> Graph<N, E>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + PartialEq + PartialOrd,
{
    /// Construct a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` if absent. Returns whether it was newly inserted;
    /// inserting an already present node is a no-op.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        let id = NodeId(self.entries.len());
        self.index.insert(node.clone(), id);
        self.entries.push(NodeEntry {
            key: node,
            children: HashMap::new(),
        });
        true
    }

    /// Remove `node` and its outgoing adjacency record if present. Returns
    /// whether a removal occurred.
    ///
    /// Edges pointing *into* the removed node from other nodes are not
    /// cascade-cleaned; callers that remove nodes must avoid such dangling
    /// references by construction.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(id) = self.index.remove(node) else {
            return false;
        };
        self.entries[id.0].children.clear();
        true
    }

    /// Append `label` to the ordered pair `parent -> child`, creating the
    /// adjacency entry for `child` if needed. Duplicates are allowed.
    ///
    /// Both endpoints must already be stored in the graph; an absent endpoint
    /// surfaces [`Error::UnknownNode`].
    pub fn add_edge(&mut self, parent: &N, child: &N, label: E) -> Result<()>
    where
        N: Display,
    {
        let parent_id = self.require_node(parent)?;
        let child_id = self.require_node(child)?;
        self.entries[parent_id.0]
            .children
            .entry(child_id)
            .or_default()
            .push(label);
        Ok(())
    }

    /// Remove one occurrence of `label` between `parent` and `child`,
    /// dropping the child entry entirely once its label list empties.
    /// Returns whether a removal occurred.
    pub fn remove_edge(&mut self, parent: &N, child: &N, label: &E) -> bool {
        let (Some(parent_id), Some(child_id)) = (self.node_id(parent), self.node_id(child)) else {
            return false;
        };
        let Some(labels) = self.entries[parent_id.0].children.get_mut(&child_id) else {
            return false;
        };
        let Some(position) = labels.iter().position(|candidate| candidate == label) else {
            return false;
        };
        labels.remove(position);
        if labels.is_empty() {
            self.entries[parent_id.0].children.remove(&child_id);
        }
        true
    }

    /// Whether `node` is stored in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Whether at least one edge `parent -> child` carries `label`.
    pub fn contains_edge(&self, parent: &N, child: &N, label: &E) -> bool {
        let (Some(parent_id), Some(child_id)) = (self.node_id(parent), self.node_id(child)) else {
            return false;
        };
        self.entries[parent_id.0]
            .children
            .get(&child_id)
            .is_some_and(|labels| labels.contains(label))
    }

    /// Distinct children of `parent` in ascending node order. Empty if
    /// `parent` is absent.
    pub fn get_children(&self, parent: &N) -> Vec<&N> {
        let Some(parent_id) = self.node_id(parent) else {
            return Vec::new();
        };
        let mut children: Vec<&N> = self.entries[parent_id.0]
            .children
            .keys()
            .map(|id| self.node(*id))
            .collect();
        children.sort();
        children
    }

    /// All labels between `parent` and `child` in ascending label order.
    /// Empty if either endpoint is absent or no such edge exists.
    pub fn get_edges(&self, parent: &N, child: &N) -> Vec<E> {
        let (Some(parent_id), Some(child_id)) = (self.node_id(parent), self.node_id(child)) else {
            return Vec::new();
        };
        let mut labels = self.entries[parent_id.0]
            .children
            .get(&child_id)
            .cloned()
            .unwrap_or_default();
        labels.sort_by(compare_labels);
        labels
    }

    /// Ascending-sorted string views of all stored nodes. Diagnostic only.
    pub fn list_nodes(&self) -> Vec<String>
    where
        N: Display,
    {
        let mut rendered: Vec<String> = self.index.keys().map(|key| key.to_string()).collect();
        rendered.sort();
        rendered
    }

    /// Ascending-sorted `child(label)` views of every edge leaving `node`,
    /// one entry per edge occurrence. Diagnostic only; empty if `node` is
    /// absent.
    pub fn list_children(&self, node: &N) -> Vec<String>
    where
        N: Display,
        E: Display,
    {
        let Some(id) = self.node_id(node) else {
            return Vec::new();
        };
        let mut rendered = Vec::new();
        for (child_id, labels) in &self.entries[id.0].children {
            for label in labels {
                rendered.push(format!("{}({})", self.node(*child_id), label));
            }
        }
        rendered.sort();
        rendered
    }

    /// True iff no nodes are stored.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of stored nodes.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Iterate over the stored node keys in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.index.keys()
    }

    /// Resolve a node key to its arena id.
    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    /// Resolve an arena id back to its node key. Valid for any id handed out
    /// by this graph, including ids of since-removed nodes. Panics when given
    /// an id minted by a different graph whose arena is shorter.
    pub fn node(&self, id: NodeId) -> &N {
        &self.entries[id.0].key
    }

    /// Child ids of `id` in ascending order of their node keys, so frontier
    /// expansion visits children deterministically.
    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.entries[id.0].children.keys().copied().collect();
        ids.sort_by(|a, b| self.node(*a).cmp(self.node(*b)));
        ids
    }

    /// Smallest label on the ordered pair `parent -> child`, if any edge
    /// connects it.
    pub fn min_edge_label(&self, parent: NodeId, child: NodeId) -> Option<&E> {
        self.entries[parent.0]
            .children
            .get(&child)
            .and_then(|labels| labels.iter().min_by(|a, b| compare_labels(a, b)))
    }

    fn require_node(&self, node: &N) -> Result<NodeId>
    where
        N: Display,
    {
        self.node_id(node).ok_or_else(|| Error::UnknownNode {
            node: node.to_string(),
        })
    }
}
