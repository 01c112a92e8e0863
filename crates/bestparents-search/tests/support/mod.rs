//! Dataset generators shared by the integration tests.

#![allow(dead_code)]

use bestparents_core::CategoricalDataset;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random cardinalities (including degenerate ones) and matching rows.
pub fn arb_dataset() -> impl Strategy<Value = CategoricalDataset> {
    (prop::collection::vec(1usize..4, 0..7), 0usize..40).prop_flat_map(|(cards, rows)| {
        let row = cards
            .iter()
            .map(|&c| (0..c as i64).boxed())
            .collect::<Vec<_>>();
        prop::collection::vec(row, rows).prop_map(move |instances| {
            CategoricalDataset::from_codes(&cards, instances).expect("generated rows are rectangular")
        })
    })
}

/// Seeded dataset where attribute `k` copies attribute `k - 1` with
/// probability `fidelity`, otherwise draws uniformly.
pub fn seeded_chain(seed: u64, attributes: usize, instances: usize, fidelity: f64) -> CategoricalDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let cards = vec![3usize; attributes];
    let rows = (0..instances)
        .map(|_| {
            let mut row: Vec<i64> = Vec::with_capacity(attributes);
            for k in 0..attributes {
                let value = if k > 0 && rng.gen_bool(fidelity) {
                    row[k - 1]
                } else {
                    rng.gen_range(0..3)
                };
                row.push(value);
            }
            row
        })
        .collect();
    CategoricalDataset::from_codes(&cards, rows).expect("rectangular rows")
}

/// 0 determines 1 (`a1 = a0 mod 2`), 2 is independent of both.
pub fn determined_pair_with_noise() -> CategoricalDataset {
    let rows = (0..4)
        .flat_map(|a0| (0..2).map(move |a2| vec![a0, a0 % 2, a2]))
        .collect();
    CategoricalDataset::from_codes(&[4, 2, 2], rows).expect("rectangular rows")
}
