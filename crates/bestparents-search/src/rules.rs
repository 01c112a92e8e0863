//! Ranked dependency rules: every informative pair's winning edge, strongest
//! first.

use std::fmt;

use bestparents_core::{Dataset, LearnError};
use serde::Serialize;
use tracing::instrument;

use crate::candidates::CandidateIndex;
use crate::contingency::PairTables;
use crate::scorer::score_pairs;

/// `child <- parent` with the conditional entropy `H(child | parent)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub parent: usize,
    pub child: usize,
    pub parent_name: String,
    pub child_name: String,
    pub entropy: f64,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.child_name, self.parent_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleReport {
    pub rules: Vec<Rule>,
    pub pairs_skipped: usize,
}

/// Rank the winning rule of every pair by entropy, then enumeration order.
///
/// # Errors
///
/// Returns [`LearnError::InvalidCardinality`] for a coded value out of range.
#[instrument(skip_all)]
pub fn ranked_rules<D: Dataset + ?Sized>(data: &D) -> Result<RuleReport, LearnError> {
    let tables = PairTables::build(data)?;
    let scored = score_pairs(data, &tables);
    let rules = CandidateIndex::lowest_only(&scored.scores)
        .iter()
        .map(|e| Rule {
            parent: e.parent,
            child: e.child,
            parent_name: data.attribute_name(e.parent),
            child_name: data.attribute_name(e.child),
            entropy: e.entropy(),
        })
        .collect();
    Ok(RuleReport {
        rules,
        pairs_skipped: scored.skipped_pairs,
    })
}
