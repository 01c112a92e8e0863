//! Dense contingency tables and the conditional-entropy primitives over them.
//!
//! # Orientation
//!
//! A table's rows index the values of one attribute and its columns the
//! values of another. [`entropy_conditioned_on_rows`] is the entropy of the
//! column attribute given the row attribute, `H(columns | rows)`;
//! [`entropy_conditioned_on_columns`] is `H(rows | columns)`. Both are in
//! bits.
//!
//! # Formula
//!
//! With `f(x) = x·ln x` (and `f(0) = 0`), `T` the grand total and `R_r` the
//! total of row `r`:
//!
//! ```text
//! H(columns | rows) = -( Σ_rc f(n_rc) - Σ_r f(R_r) ) / (T · ln 2)
//! ```
//!
//! and symmetrically for columns. An all-zero table has entropy `0`.

use std::f64::consts::LN_2;

use crate::error::LearnError;

/// A rectangular table of non-negative joint counts, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl ContingencyTable {
    /// An all-zero table with the given dimensions.
    ///
    /// Zero-sized dimensions are allowed; they occur for attributes with no
    /// declared values and yield zero entropy.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        }
    }

    /// Build a table from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`LearnError::TableShape`] if the input is empty, ragged, or
    /// holds a negative or non-finite cell.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LearnError> {
        let Some(first) = rows.first() else {
            return Err(LearnError::TableShape("table has no rows".to_string()));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(LearnError::TableShape("table has no columns".to_string()));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(LearnError::TableShape(format!(
                    "row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(LearnError::TableShape(format!(
                    "row {r} holds invalid count {bad}"
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Count stored at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Add one observation to `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LearnError::TableShape`] if the cell is outside the table.
    pub fn increment(&mut self, row: usize, col: usize) -> Result<(), LearnError> {
        if row >= self.rows || col >= self.cols {
            return Err(LearnError::TableShape(format!(
                "cell ({row}, {col}) outside {}x{} table",
                self.rows, self.cols
            )));
        }
        self.cells[row * self.cols + col] += 1.0;
        Ok(())
    }

    /// Sum of every cell.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Per-row totals.
    #[must_use]
    pub fn row_totals(&self) -> Vec<f64> {
        if self.cols == 0 {
            return vec![0.0; self.rows];
        }
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Per-column totals.
    #[must_use]
    pub fn col_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.cols];
        for row in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            for (t, v) in totals.iter_mut().zip(row) {
                *t += v;
            }
        }
        totals
    }
}

/// `H(columns | rows)` in bits.
#[must_use]
pub fn entropy_conditioned_on_rows(table: &ContingencyTable) -> f64 {
    let joint: f64 = table.cells.iter().copied().map(x_ln_x).sum();
    let marginal: f64 = table.row_totals().into_iter().map(x_ln_x).sum();
    conditional_bits(joint, marginal, table.total())
}

/// `H(rows | columns)` in bits.
#[must_use]
pub fn entropy_conditioned_on_columns(table: &ContingencyTable) -> f64 {
    let joint: f64 = table.cells.iter().copied().map(x_ln_x).sum();
    let marginal: f64 = table.col_totals().into_iter().map(x_ln_x).sum();
    conditional_bits(joint, marginal, table.total())
}

fn conditional_bits(joint: f64, marginal: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    let bits = -(joint - marginal) / (total * LN_2);
    // Rounding can leave a tiny negative residue (or -0.0) for perfectly
    // dependent tables; entropy is never below zero.
    if bits <= 0.0 { 0.0 } else { bits }
}

fn x_ln_x(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { x * x.ln() }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
