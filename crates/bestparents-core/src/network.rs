//! Parent-set graph mutated by the structure search.
//!
//! # Edge Direction
//!
//! An edge `P → C` means "P is a parent of C": P is used to condition or
//! predict C. [`ParentSetGraph::add_parent`] takes the child first, matching
//! the usual "parent set of a node" phrasing.
//!
//! # Node Identity
//!
//! [`BayesNet`] adds exactly one petgraph node per attribute, in attribute
//! order, so `NodeIndex::new(i)` is attribute `i` for the network's whole
//! life (nodes are never removed).

#![allow(clippy::module_name_repetitions)]

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::error::LearnError;

/// The graph operations the search needs.
///
/// Degree queries must reflect the live graph: strategies interleave checks
/// and mutations, so implementations must not cache counts.
pub trait ParentSetGraph {
    /// Number of nodes (one per attribute).
    fn node_count(&self) -> usize;

    /// Whether `parent → child` is present.
    fn has_edge(&self, parent: usize, child: usize) -> bool;

    /// Current number of parents of `child`.
    fn parent_count(&self, child: usize) -> usize;

    /// Current number of children of `parent`.
    fn child_count(&self, parent: usize) -> usize;

    /// Add `parent` to the parent set of `child`.
    ///
    /// # Errors
    ///
    /// Rejects self-loops, duplicate edges and unknown nodes.
    fn add_parent(&mut self, child: usize, parent: usize) -> Result<(), LearnError>;
}

/// A directed network whose nodes are dataset attributes.
#[derive(Debug, Clone)]
pub struct BayesNet {
    graph: DiGraph<String, ()>,
}

impl BayesNet {
    /// An edgeless network with one node per name.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = DiGraph::new();
        for name in names {
            graph.add_node(name.into());
        }
        Self { graph }
    }

    /// An edgeless network with nodes named `a0`, `a1`, ...
    #[must_use]
    pub fn with_nodes(count: usize) -> Self {
        Self::new((0..count).map(|i| format!("a{i}")))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Name of node `i`.
    #[must_use]
    pub fn name(&self, i: usize) -> Option<&str> {
        self.graph.node_weight(NodeIndex::new(i)).map(String::as_str)
    }

    /// Parents of `child`, ascending.
    #[must_use]
    pub fn parents(&self, child: usize) -> Vec<usize> {
        self.neighbors(child, Direction::Incoming)
    }

    /// Children of `parent`, ascending.
    #[must_use]
    pub fn children(&self, parent: usize) -> Vec<usize> {
        self.neighbors(parent, Direction::Outgoing)
    }

    /// Every `(parent, child)` edge, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        edges.sort_unstable();
        edges
    }

    fn neighbors(&self, node: usize, dir: Direction) -> Vec<usize> {
        if node >= self.graph.node_count() {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(node), dir)
            .map(NodeIndex::index)
            .collect();
        out.sort_unstable();
        out
    }

    fn degree(&self, node: usize, dir: Direction) -> usize {
        if node >= self.graph.node_count() {
            return 0;
        }
        self.graph.neighbors_directed(NodeIndex::new(node), dir).count()
    }

    fn check_node(&self, node: usize) -> Result<NodeIndex, LearnError> {
        if node < self.graph.node_count() {
            Ok(NodeIndex::new(node))
        } else {
            Err(LearnError::UnknownAttribute {
                attribute: node,
                count: self.graph.node_count(),
            })
        }
    }
}

impl ParentSetGraph for BayesNet {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn has_edge(&self, parent: usize, child: usize) -> bool {
        let n = self.graph.node_count();
        parent < n
            && child < n
            && self
                .graph
                .contains_edge(NodeIndex::new(parent), NodeIndex::new(child))
    }

    fn parent_count(&self, child: usize) -> usize {
        self.degree(child, Direction::Incoming)
    }

    fn child_count(&self, parent: usize) -> usize {
        self.degree(parent, Direction::Outgoing)
    }

    fn add_parent(&mut self, child: usize, parent: usize) -> Result<(), LearnError> {
        let c = self.check_node(child)?;
        let p = self.check_node(parent)?;
        if child == parent {
            return Err(LearnError::SelfLoop(child));
        }
        // petgraph allows parallel edges; the parent set must not.
        if self.graph.contains_edge(p, c) {
            return Err(LearnError::DuplicateEdge { parent, child });
        }
        self.graph.add_edge(p, c, ());
        trace!(parent, child, "parent added");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
