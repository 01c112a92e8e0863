//! Degree bounds and per-run claimed sets.
//!
//! Degree counts are always read from the live graph at the moment of the
//! check; nothing here caches them.

use bestparents_core::{ParentSetGraph, SearchConfig};
use fixedbitset::FixedBitSet;

/// Fan-in / fan-out maxima. Zero disables that kind of edge entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeLimits {
    pub max_parents: usize,
    pub max_children: usize,
}

impl DegreeLimits {
    #[must_use]
    pub const fn new(max_parents: usize, max_children: usize) -> Self {
        Self {
            max_parents,
            max_children,
        }
    }

    #[must_use]
    pub const fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_parents, config.max_children)
    }

    /// `child` has room for one more parent.
    pub fn can_take_parent<G: ParentSetGraph + ?Sized>(&self, graph: &G, child: usize) -> bool {
        graph.parent_count(child) < self.max_parents
    }

    /// `parent` has room for one more child.
    pub fn can_take_child<G: ParentSetGraph + ?Sized>(&self, graph: &G, parent: usize) -> bool {
        graph.child_count(parent) < self.max_children
    }

    /// Adding `parent → child` keeps both endpoints within bounds.
    pub fn admits<G: ParentSetGraph + ?Sized>(&self, graph: &G, parent: usize, child: usize) -> bool {
        self.can_take_parent(graph, child) && self.can_take_child(graph, parent)
    }

    /// Upper bound on the edges one run can accept over `attributes`: every
    /// accepted edge uses a parent slot of its child and a child slot of its
    /// parent.
    #[must_use]
    pub fn edge_budget(&self, attributes: usize) -> usize {
        attributes.saturating_mul(self.max_parents.min(self.max_children))
    }
}

/// Attributes already claimed during one run. Flags only ever go from
/// unclaimed to claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedSet {
    bits: FixedBitSet,
}

impl ClaimedSet {
    #[must_use]
    pub fn new(attributes: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(attributes),
        }
    }

    /// Out-of-range attributes read as unclaimed.
    #[must_use]
    pub fn is_claimed(&self, attribute: usize) -> bool {
        self.bits.contains(attribute)
    }

    /// Returns `true` if the attribute was newly claimed.
    pub fn claim(&mut self, attribute: usize) -> bool {
        if attribute >= self.bits.len() {
            self.bits.grow(attribute + 1);
        }
        !self.bits.put(attribute)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }
}
