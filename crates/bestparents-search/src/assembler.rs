//! Applies accepted edges to the target graph.
//!
//! Every strategy goes through [`GraphAssembler::try_add`], which checks the
//! shared acceptance rules before touching the graph:
//!
//! - no self-loop
//! - no edge that already exists
//! - the child stays within `max_parents`
//! - the parent stays within `max_children`
//!
//! A rejected edge is not an error; the strategy simply moves on.

use bestparents_core::{LearnError, ParentSetGraph};
use serde::Serialize;
use tracing::trace;

use crate::constraints::DegreeLimits;

/// One edge added to the graph, in acceptance order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptedEdge {
    pub parent: usize,
    pub child: usize,
    /// `H(child | parent)` in bits.
    pub entropy: f64,
}

/// Why [`GraphAssembler::check`] refused an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    SelfLoop,
    Duplicate,
    ParentLimit,
    ChildLimit,
}

impl Rejection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "self-loop",
            Self::Duplicate => "duplicate",
            Self::ParentLimit => "child has max parents",
            Self::ChildLimit => "parent has max children",
        }
    }
}

/// Mutable borrow of the target graph plus the run's accepted edges.
pub struct GraphAssembler<'g, G: ParentSetGraph + ?Sized> {
    graph: &'g mut G,
    limits: DegreeLimits,
    accepted: Vec<AcceptedEdge>,
}

impl<'g, G: ParentSetGraph + ?Sized> GraphAssembler<'g, G> {
    pub fn new(graph: &'g mut G, limits: DegreeLimits) -> Self {
        Self {
            graph,
            limits,
            accepted: Vec::new(),
        }
    }

    pub const fn limits(&self) -> DegreeLimits {
        self.limits
    }

    pub fn graph(&self) -> &G {
        self.graph
    }

    /// Check the acceptance rules for `parent → child` without mutating.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    pub fn check(&self, parent: usize, child: usize) -> Result<(), Rejection> {
        if parent == child {
            return Err(Rejection::SelfLoop);
        }
        if self.graph.has_edge(parent, child) {
            return Err(Rejection::Duplicate);
        }
        if !self.limits.can_take_parent(&*self.graph, child) {
            return Err(Rejection::ParentLimit);
        }
        if !self.limits.can_take_child(&*self.graph, parent) {
            return Err(Rejection::ChildLimit);
        }
        Ok(())
    }

    /// Add `parent → child` if it passes [`check`](Self::check).
    ///
    /// Returns `Ok(true)` when the edge was added, `Ok(false)` when it was
    /// rejected.
    ///
    /// # Errors
    ///
    /// Propagates a [`LearnError`] from the graph itself, e.g. an attribute
    /// index the graph does not know.
    pub fn try_add(&mut self, parent: usize, child: usize, entropy: f64) -> Result<bool, LearnError> {
        if let Err(reason) = self.check(parent, child) {
            trace!(parent, child, reason = reason.as_str(), "edge rejected");
            return Ok(false);
        }
        self.graph.add_parent(child, parent)?;
        trace!(parent, child, entropy, "edge accepted");
        self.accepted.push(AcceptedEdge {
            parent,
            child,
            entropy,
        });
        Ok(true)
    }

    /// Edges accepted so far, in acceptance order.
    pub fn accepted(&self) -> &[AcceptedEdge] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<AcceptedEdge> {
        self.accepted
    }
}
