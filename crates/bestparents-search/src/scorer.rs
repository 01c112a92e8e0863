//! Pairwise conditional-entropy scoring and edge orientation.
//!
//! # Orientation Rule
//!
//! For a pair `(i, j)` with `i > j`:
//!
//! ```text
//! H(i | j) <  H(j | i)   →  j → i   (knowing j explains i better)
//! H(i | j) >= H(j | i)   →  i → j
//! ```
//!
//! The comparison is a strict less-than, so exact ties always orient the
//! edge from the higher index to the lower one. The winning entropy is the
//! smaller of the two values.
//!
//! The tie direction is deliberate and fixed: a tied pair never yields
//! `j → i`, and [`PairScore::both_edges`] lists `i → j` first.
//!
//! # Degenerate Attributes
//!
//! An attribute with fewer than two values carries no information; any pair
//! touching one is skipped and never becomes a candidate.

use bestparents_core::{
    ContingencyTable, Dataset, entropy_conditioned_on_columns, entropy_conditioned_on_rows,
};
use tracing::{debug, instrument, trace};

use crate::contingency::PairTables;

/// Which way a scored pair points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The lower index is the parent: `j → i`.
    LowerToHigher,
    /// The higher index is the parent: `i → j`.
    HigherToLower,
}

/// One directed reading of a pair with its conditional entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedScore {
    pub parent: usize,
    pub child: usize,
    /// `H(child | parent)` in bits.
    pub entropy: f64,
}

/// Both conditional entropies of one attribute pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// The higher attribute index `i` (rows of the table).
    pub higher: usize,
    /// The lower attribute index `j` (columns of the table).
    pub lower: usize,
    /// `H(i | j)`.
    pub higher_given_lower: f64,
    /// `H(j | i)`.
    pub lower_given_higher: f64,
}

impl PairScore {
    /// Score the table of `(higher, lower)`; rows must index `higher`.
    #[must_use]
    pub fn from_table(higher: usize, lower: usize, table: &ContingencyTable) -> Self {
        Self {
            higher,
            lower,
            higher_given_lower: entropy_conditioned_on_columns(table),
            lower_given_higher: entropy_conditioned_on_rows(table),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.higher_given_lower < self.lower_given_higher {
            Orientation::LowerToHigher
        } else {
            Orientation::HigherToLower
        }
    }

    /// The lowest-entropy directed edge of this pair.
    #[must_use]
    pub fn best_edge(&self) -> DirectedScore {
        match self.orientation() {
            Orientation::LowerToHigher => self.lower_to_higher(),
            Orientation::HigherToLower => self.higher_to_lower(),
        }
    }

    /// Both readings, tie-winner (`i → j`) first.
    #[must_use]
    pub fn both_edges(&self) -> [DirectedScore; 2] {
        [self.higher_to_lower(), self.lower_to_higher()]
    }

    const fn higher_to_lower(&self) -> DirectedScore {
        DirectedScore {
            parent: self.higher,
            child: self.lower,
            entropy: self.lower_given_higher,
        }
    }

    const fn lower_to_higher(&self) -> DirectedScore {
        DirectedScore {
            parent: self.lower,
            child: self.higher,
            entropy: self.higher_given_lower,
        }
    }
}

/// Scores for every informative pair, in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct PairScores {
    pub scores: Vec<PairScore>,
    /// Pairs dropped because one side is degenerate.
    pub skipped_pairs: usize,
    /// Attributes with fewer than two values, ascending.
    pub degenerate: Vec<usize>,
}

/// Score every pair table of `data`.
#[instrument(skip_all, fields(pairs = tables.len()))]
pub fn score_pairs<D: Dataset + ?Sized>(data: &D, tables: &PairTables) -> PairScores {
    let degenerate: Vec<usize> = (0..tables.attributes())
        .filter(|&a| data.cardinality(a) < 2)
        .collect();

    let mut out = PairScores {
        scores: Vec::with_capacity(tables.len()),
        skipped_pairs: 0,
        degenerate,
    };

    for (i, j, table) in tables.pairs() {
        if out.degenerate.binary_search(&i).is_ok() || out.degenerate.binary_search(&j).is_ok() {
            out.skipped_pairs += 1;
            trace!(i, j, "pair skipped: degenerate attribute");
            continue;
        }
        let score = PairScore::from_table(i, j, table);
        trace!(
            i,
            j,
            h_i_given_j = score.higher_given_lower,
            h_j_given_i = score.lower_given_higher,
            "pair scored"
        );
        out.scores.push(score);
    }

    debug!(
        scored = out.scores.len(),
        skipped = out.skipped_pairs,
        degenerate = out.degenerate.len(),
        "pairwise entropies computed"
    );
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
