//! Structural invariants over random datasets, for every strategy:
//!
//! - no self-loops and no duplicate edges
//! - every attribute stays within `max_parents` / `max_children`
//! - accepted edges <= N * min(max_parents, max_children)
//! - the graph holds exactly the reported edges

mod support;

use std::collections::HashSet;

use bestparents_core::{BayesNet, CategoricalDataset, Dataset, ParentSetGraph, SearchConfig, StrategyKind};
use bestparents_search::StructureSearch;
use bestparents_search::constraints::DegreeLimits;
use proptest::prelude::*;
use support::{arb_dataset, seeded_chain};

fn arb_kind() -> impl Strategy<Value = StrategyKind> {
    prop::sample::select(StrategyKind::ALL.to_vec())
}

fn check_invariants(
    data: &CategoricalDataset,
    config: &SearchConfig,
) -> Result<(), TestCaseError> {
    let n = data.num_attributes();
    let mut net = BayesNet::with_nodes(n);
    let report = StructureSearch::new(config.clone())
        .search(data, &mut net)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    let mut seen = HashSet::new();
    for edge in &report.edges {
        prop_assert_ne!(edge.parent, edge.child);
        prop_assert!(seen.insert((edge.parent, edge.child)), "duplicate {:?}", edge);
        prop_assert!(edge.entropy >= 0.0 && edge.entropy.is_finite());
    }
    for a in 0..n {
        prop_assert!(net.parent_count(a) <= config.max_parents);
        prop_assert!(net.child_count(a) <= config.max_children);
    }
    prop_assert!(report.edges.len() <= DegreeLimits::from_config(config).edge_budget(n));

    let mut reported: Vec<(usize, usize)> = seen.into_iter().collect();
    reported.sort_unstable();
    prop_assert_eq!(reported, net.edges());
    Ok(())
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn random_datasets_respect_the_acceptance_rules(
        data in arb_dataset(),
        kind in arb_kind(),
        max_parents in 0usize..4,
        max_children in 0usize..4,
    ) {
        check_invariants(&data, &SearchConfig::new(kind, max_parents, max_children))?;
    }

    #[test]
    fn wave_accepts_any_valid_root(
        data in arb_dataset(),
        root_seed in any::<usize>(),
        limit in 1usize..3,
    ) {
        prop_assume!(data.num_attributes() > 0);
        let root = root_seed % data.num_attributes();
        let config = SearchConfig::new(StrategyKind::Wave, limit, limit).with_root(root);
        check_invariants(&data, &config)?;
    }
}

#[test]
fn seeded_chains_respect_the_acceptance_rules() {
    for seed in 0..8u64 {
        let data = seeded_chain(seed, 9, 150, 0.75);
        for kind in StrategyKind::ALL {
            for (mp, mc) in [(1, 1), (2, 1), (1, 3), (3, 3)] {
                check_invariants(&data, &SearchConfig::new(kind, mp, mc))
                    .unwrap_or_else(|e| panic!("seed {seed}, {kind}, ({mp}, {mc}): {e}"));
            }
        }
    }
}
