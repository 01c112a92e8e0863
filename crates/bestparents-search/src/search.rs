//! The structure search entry point.

use bestparents_core::{Dataset, LearnError, ParentSetGraph, SearchConfig, StrategyKind};
use serde::Serialize;
use tracing::{info, instrument};

use crate::assembler::{AcceptedEdge, GraphAssembler};
use crate::constraints::DegreeLimits;
use crate::contingency::PairTables;
use crate::scorer::score_pairs;
use crate::strategy::SelectionStrategy;

/// Summary of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub strategy: StrategyKind,
    pub max_parents: usize,
    pub max_children: usize,
    /// Accepted edges in acceptance order.
    pub edges: Vec<AcceptedEdge>,
    /// Ranked candidates the strategy worked from.
    pub candidates: usize,
    pub pairs_scored: usize,
    pub pairs_skipped: usize,
    /// Attributes with fewer than two values.
    pub degenerate_attributes: Vec<usize>,
    /// Wave strategy only: attributes in expansion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expansion_order: Vec<usize>,
    /// `blake3:<hex>` over the ordered `(parent, child)` list.
    pub fingerprint: String,
}

/// Hash the ordered edge list so two runs can be compared cheaply.
#[must_use]
pub fn edge_fingerprint(edges: &[AcceptedEdge]) -> String {
    let mut hasher = blake3::Hasher::new();
    for edge in edges {
        hasher.update(&(edge.parent as u64).to_le_bytes());
        hasher.update(&(edge.child as u64).to_le_bytes());
    }
    format!("blake3:{}", hasher.finalize().to_hex())
}

/// Immutable search settings; one value can drive any number of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureSearch {
    config: SearchConfig,
}

impl StructureSearch {
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Learn edges for `data` and add them to `graph`.
    ///
    /// Edges already in `graph` are kept and count toward the degree limits.
    ///
    /// # Errors
    ///
    /// - [`LearnError::GraphMismatch`] if the graph and dataset disagree on
    ///   the number of attributes.
    /// - [`LearnError::InvalidCardinality`] for a coded value out of range.
    /// - [`LearnError::UnknownAttribute`] for a wave root out of range.
    #[instrument(skip_all, fields(strategy = %self.config.strategy))]
    pub fn search<D, G>(&self, data: &D, graph: &mut G) -> Result<SearchReport, LearnError>
    where
        D: Dataset + ?Sized,
        G: ParentSetGraph + ?Sized,
    {
        let attributes = data.num_attributes();
        if graph.node_count() != attributes {
            return Err(LearnError::GraphMismatch {
                graph: graph.node_count(),
                dataset: attributes,
            });
        }

        let tables = PairTables::build(data)?;
        let scored = score_pairs(data, &tables);

        let strategy = SelectionStrategy::from_config(&self.config);
        let limits = DegreeLimits::from_config(&self.config);
        let mut assembler = GraphAssembler::new(graph, limits);
        let outcome = strategy.run(&scored.scores, attributes, &mut assembler)?;
        let edges = assembler.into_accepted();
        debug_assert!(
            edges.len() <= limits.edge_budget(attributes),
            "{} edges exceed the degree budget",
            edges.len()
        );
        let fingerprint = edge_fingerprint(&edges);

        info!(
            strategy = %strategy,
            attributes,
            instances = data.num_instances(),
            edges = edges.len(),
            candidates = outcome.candidates,
            skipped = scored.skipped_pairs,
            "structure search complete"
        );

        Ok(SearchReport {
            strategy: strategy.kind(),
            max_parents: self.config.max_parents,
            max_children: self.config.max_children,
            edges,
            candidates: outcome.candidates,
            pairs_scored: scored.scores.len(),
            pairs_skipped: scored.skipped_pairs,
            degenerate_attributes: scored.degenerate,
            expansion_order: outcome.expansion_order,
            fingerprint,
        })
    }
}
