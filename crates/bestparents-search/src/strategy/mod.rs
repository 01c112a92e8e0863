//! Edge-selection policies.
//!
//! Every policy reads the same pair scores and writes through the same
//! [`GraphAssembler`], so the acceptance rules live in one place. What differs
//! is the order in which candidates are tried and which endpoints a policy
//! refuses to reuse within a run.
//!
//! | Strategy                   | Candidates            | Claims                        |
//! |----------------------------|-----------------------|-------------------------------|
//! | [`FullList`]               | both orientations     | both endpoints                |
//! | [`BestParentsAndChildren`] | per-attribute best    | parent or child role          |
//! | [`Wave`]                   | per-attribute top-K   | every reached attribute       |
//! | [`ChildrenOnly`]           | per-attribute children| none                          |
//! | [`ParentsOnly`]            | per-attribute parents | none                          |
//!
//! [`FullList`]: SelectionStrategy::FullList
//! [`BestParentsAndChildren`]: SelectionStrategy::BestParentsAndChildren
//! [`Wave`]: SelectionStrategy::Wave
//! [`ChildrenOnly`]: SelectionStrategy::ChildrenOnly
//! [`ParentsOnly`]: SelectionStrategy::ParentsOnly

mod children;
mod full_list;
mod paired;
mod parents;
mod wave;

use bestparents_core::{LearnError, ParentSetGraph, SearchConfig, StrategyKind};

use crate::assembler::GraphAssembler;
use crate::scorer::PairScore;

/// Which greedy policy turns ranked candidates into edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// One ascending scan over both orientations of every pair.
    FullList,
    /// Per attribute, its best child or best parent, whichever is stronger.
    BestParentsAndChildren,
    /// Breadth-first expansion from `root` (default: the last attribute).
    Wave { root: Option<usize> },
    /// Per attribute, its best children.
    ChildrenOnly,
    /// Per attribute, its best parents.
    ParentsOnly,
}

/// Bookkeeping a strategy hands back alongside the edges it accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Number of ranked candidates the strategy worked from.
    pub candidates: usize,
    /// Attributes in the order they were expanded (wave only).
    pub expansion_order: Vec<usize>,
}

impl SelectionStrategy {
    #[must_use]
    pub const fn from_config(config: &SearchConfig) -> Self {
        match config.strategy {
            StrategyKind::FullList => Self::FullList,
            StrategyKind::BestParentsAndChildren => Self::BestParentsAndChildren,
            StrategyKind::Wave => Self::Wave { root: config.root },
            StrategyKind::ChildrenOnly => Self::ChildrenOnly,
            StrategyKind::ParentsOnly => Self::ParentsOnly,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::FullList => StrategyKind::FullList,
            Self::BestParentsAndChildren => StrategyKind::BestParentsAndChildren,
            Self::Wave { .. } => StrategyKind::Wave,
            Self::ChildrenOnly => StrategyKind::ChildrenOnly,
            Self::ParentsOnly => StrategyKind::ParentsOnly,
        }
    }

    /// Select edges from `scores` over `attributes` attributes, adding each
    /// accepted one through `assembler`.
    ///
    /// # Errors
    ///
    /// - [`LearnError::UnknownAttribute`] if a wave root is out of range.
    /// - Any error the graph reports while adding an edge.
    pub fn run<G: ParentSetGraph + ?Sized>(
        &self,
        scores: &[PairScore],
        attributes: usize,
        assembler: &mut GraphAssembler<'_, G>,
    ) -> Result<SelectionOutcome, LearnError> {
        match *self {
            Self::FullList => full_list::run(scores, attributes, assembler),
            Self::BestParentsAndChildren => paired::run(scores, attributes, assembler),
            Self::Wave { root } => wave::run(scores, attributes, root, assembler),
            Self::ChildrenOnly => children::run(scores, attributes, assembler),
            Self::ParentsOnly => parents::run(scores, attributes, assembler),
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wave { root: Some(root) } => write!(f, "wave (root {root})"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_kind() {
        for kind in StrategyKind::ALL {
            let config = SearchConfig::new(kind, 1, 1);
            assert_eq!(SelectionStrategy::from_config(&config).kind(), kind);
        }
    }

    #[test]
    fn wave_carries_the_configured_root() {
        let config = SearchConfig::new(StrategyKind::Wave, 2, 2).with_root(3);
        let strategy = SelectionStrategy::from_config(&config);
        assert_eq!(strategy, SelectionStrategy::Wave { root: Some(3) });
        assert_eq!(strategy.to_string(), "wave (root 3)");
        assert_eq!(SelectionStrategy::FullList.to_string(), "full-list");
    }
}
