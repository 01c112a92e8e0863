//! End-to-end behavior of every selection strategy on small datasets.

mod support;

use bestparents_core::{BayesNet, CategoricalDataset, SearchConfig, StrategyKind};
use bestparents_search::{SearchReport, StructureSearch};
use support::{determined_pair_with_noise, seeded_chain};

fn run(data: &CategoricalDataset, config: SearchConfig) -> (SearchReport, BayesNet) {
    let mut net = BayesNet::with_nodes(data.attributes().len());
    let report = StructureSearch::new(config)
        .search(data, &mut net)
        .expect("search succeeds");
    (report, net)
}

fn edge_pairs(report: &SearchReport) -> Vec<(usize, usize)> {
    report.edges.iter().map(|e| (e.parent, e.child)).collect()
}

#[test]
fn full_list_links_the_determined_pair_only() {
    let data = determined_pair_with_noise();
    let (report, net) = run(&data, SearchConfig::new(StrategyKind::FullList, 1, 1));

    assert_eq!(edge_pairs(&report), vec![(0, 1)]);
    assert_eq!(report.edges[0].entropy, 0.0);
    assert!(net.parents(2).is_empty() && net.children(2).is_empty());
}

#[test]
fn uniform_pair_orients_from_the_higher_index() {
    let data = CategoricalDataset::from_codes(
        &[2, 2],
        vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
    )
    .expect("dataset");
    let (report, _) = run(&data, SearchConfig::new(StrategyKind::FullList, 1, 1));

    assert_eq!(edge_pairs(&report), vec![(1, 0)]);
    assert!((report.edges[0].entropy - 1.0).abs() < 1e-12);
}

#[test]
fn zero_max_parents_accepts_nothing() {
    let data = seeded_chain(7, 6, 200, 0.8);
    for kind in StrategyKind::ALL {
        let (report, net) = run(&data, SearchConfig::new(kind, 0, 3));
        assert!(report.edges.is_empty(), "{kind} accepted {:?}", report.edges);
        assert_eq!(net.edge_count(), 0);
    }
}

#[test]
fn wave_grows_a_tree_from_the_root() {
    let data = seeded_chain(11, 8, 300, 0.7);
    for root in [None, Some(0), Some(4)] {
        let mut config = SearchConfig::new(StrategyKind::Wave, 2, 2);
        config.root = root;
        let (report, _) = run(&data, config);

        let root = root.unwrap_or(7);
        assert_eq!(report.expansion_order.first(), Some(&root));
        assert_eq!(report.edges.len() + 1, report.expansion_order.len());

        // Every edge joins an already reached attribute to a new one, so the
        // undirected skeleton is a tree spanning the reached set.
        let mut reached = vec![root];
        for edge in &report.edges {
            let (known, fresh) = if reached.contains(&edge.parent) {
                (edge.parent, edge.child)
            } else {
                (edge.child, edge.parent)
            };
            assert!(reached.contains(&known), "edge {edge:?} is detached");
            assert!(!reached.contains(&fresh), "edge {edge:?} closes a cycle");
            assert_ne!(fresh, root);
            reached.push(fresh);
        }
        let mut order = report.expansion_order.clone();
        order.sort_unstable();
        reached.sort_unstable();
        assert_eq!(order, reached);
    }
}

#[test]
fn wave_on_the_determined_pair_starts_at_the_class_column() {
    let data = determined_pair_with_noise();
    let (report, _) = run(&data, SearchConfig::default());
    assert_eq!(report.strategy, StrategyKind::Wave);
    assert_eq!(edge_pairs(&report), vec![(0, 2), (2, 1)]);
    assert_eq!(report.expansion_order, vec![2, 0, 1]);
}

#[test]
fn repeated_runs_are_identical() {
    let data = seeded_chain(42, 7, 250, 0.6);
    for kind in StrategyKind::ALL {
        let config = SearchConfig::new(kind, 2, 2);
        let (first, first_net) = run(&data, config.clone());
        let (second, second_net) = run(&data, config);
        assert_eq!(first, second, "{kind} is not deterministic");
        assert_eq!(first_net.edges(), second_net.edges());
    }
}

#[test]
fn degenerate_columns_never_become_endpoints() {
    let rows = (0..12).map(|i| vec![i % 3, 0, (i / 3) % 2, i % 3]).collect();
    let data = CategoricalDataset::from_codes(&[3, 1, 2, 3], rows).expect("dataset");
    for kind in StrategyKind::ALL {
        let (report, _) = run(&data, SearchConfig::new(kind, 2, 2));
        assert_eq!(report.degenerate_attributes, vec![1]);
        assert_eq!(report.pairs_skipped, 3);
        assert!(report.edges.iter().all(|e| e.parent != 1 && e.child != 1));
    }
}
