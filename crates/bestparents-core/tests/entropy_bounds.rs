//! Property tests for the conditional-entropy primitives.
//!
//! For any non-negative count table with `R` rows and `C` columns:
//!
//! - `0 <= H(columns | rows) <= log2(C)` and `0 <= H(rows | columns) <= log2(R)`
//! - transposing the table swaps the two quantities
//! - scaling every count by a positive constant leaves both unchanged

use bestparents_core::table::{
    ContingencyTable, entropy_conditioned_on_columns, entropy_conditioned_on_rows,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn arb_table() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u32..50, cols), rows)
            .prop_map(|t| {
                t.into_iter()
                    .map(|row| row.into_iter().map(f64::from).collect())
                    .collect()
            })
    })
}

fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let cols = rows[0].len();
    (0..cols)
        .map(|c| rows.iter().map(|row| row[c]).collect())
        .collect()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn entropies_are_bounded(cells in arb_table()) {
        let rows = cells.len() as f64;
        let cols = cells[0].len() as f64;
        let t = ContingencyTable::from_rows(cells).expect("valid table");

        let on_rows = entropy_conditioned_on_rows(&t);
        let on_cols = entropy_conditioned_on_columns(&t);
        prop_assert!(on_rows >= 0.0);
        prop_assert!(on_cols >= 0.0);
        prop_assert!(on_rows <= cols.log2() + EPS);
        prop_assert!(on_cols <= rows.log2() + EPS);
    }

    #[test]
    fn transpose_swaps_orientation(cells in arb_table()) {
        let t = ContingencyTable::from_rows(cells.clone()).expect("valid table");
        let tt = ContingencyTable::from_rows(transpose(&cells)).expect("valid transpose");

        prop_assert!((entropy_conditioned_on_rows(&t) - entropy_conditioned_on_columns(&tt)).abs() < EPS);
        prop_assert!((entropy_conditioned_on_columns(&t) - entropy_conditioned_on_rows(&tt)).abs() < EPS);
    }

    #[test]
    fn scaling_counts_is_invariant(cells in arb_table(), factor in 1u32..20) {
        let scaled: Vec<Vec<f64>> = cells
            .iter()
            .map(|row| row.iter().map(|v| v * f64::from(factor)).collect())
            .collect();
        let t = ContingencyTable::from_rows(cells).expect("valid table");
        let s = ContingencyTable::from_rows(scaled).expect("valid table");

        prop_assert!((entropy_conditioned_on_rows(&t) - entropy_conditioned_on_rows(&s)).abs() < EPS);
        prop_assert!((entropy_conditioned_on_columns(&t) - entropy_conditioned_on_columns(&s)).abs() < EPS);
    }
}
