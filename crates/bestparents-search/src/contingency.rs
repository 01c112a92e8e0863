//! Joint-occurrence tables for every attribute pair.
//!
//! Pairs are enumerated `i = 1..N`, `j = 0..i` and stored in that order, so
//! the table for `(i, j)` lives at slot `i·(i−1)/2 + j`. Rows index the
//! values of the higher attribute `i`, columns those of `j`.

use bestparents_core::{ContingencyTable, Dataset, LearnError};
use tracing::{debug, instrument};

/// All pairwise contingency tables of one dataset snapshot.
#[derive(Debug, Clone)]
pub struct PairTables {
    attributes: usize,
    tables: Vec<ContingencyTable>,
}

impl PairTables {
    /// Scan every instance once and count each pair's value combinations.
    ///
    /// # Errors
    ///
    /// Returns [`LearnError::InvalidCardinality`] for the first coded value
    /// outside `[0, cardinality)`.
    #[instrument(skip_all, fields(attributes = data.num_attributes(), instances = data.num_instances()))]
    pub fn build<D: Dataset + ?Sized>(data: &D) -> Result<Self, LearnError> {
        let n = data.num_attributes();
        let cardinalities: Vec<usize> = (0..n).map(|a| data.cardinality(a)).collect();

        let mut tables = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 1..n {
            for j in 0..i {
                tables.push(ContingencyTable::zeros(cardinalities[i], cardinalities[j]));
            }
        }

        let mut codes = vec![0usize; n];
        for instance in 0..data.num_instances() {
            for (attribute, code) in codes.iter_mut().enumerate() {
                *code = checked_code(data, instance, attribute, cardinalities[attribute])?;
            }
            for i in 1..n {
                for j in 0..i {
                    tables[slot(i, j)].increment(codes[i], codes[j])?;
                }
            }
        }

        debug!(pairs = tables.len(), "contingency tables built");
        Ok(Self {
            attributes: n,
            tables,
        })
    }

    #[must_use]
    pub const fn attributes(&self) -> usize {
        self.attributes
    }

    /// Number of stored pair tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// `(i, j, table)` in enumeration order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, &ContingencyTable)> + '_ {
        (1..self.attributes)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .zip(&self.tables)
            .map(|((i, j), t)| (i, j, t))
    }
}

const fn slot(i: usize, j: usize) -> usize {
    i * (i - 1) / 2 + j
}

fn checked_code<D: Dataset + ?Sized>(
    data: &D,
    instance: usize,
    attribute: usize,
    cardinality: usize,
) -> Result<usize, LearnError> {
    let value = data.value_at(instance, attribute);
    usize::try_from(value)
        .ok()
        .filter(|code| *code < cardinality)
        .ok_or(LearnError::InvalidCardinality {
            instance,
            attribute,
            value,
            cardinality,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
