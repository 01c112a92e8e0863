//! Children-only greedy: each attribute, in index order, takes its strongest
//! ranked children until it reaches `max_children`.
//!
//! Nothing is claimed; an attribute can be picked as a child by several
//! parents as long as its own parent count allows it.

use bestparents_core::{LearnError, ParentSetGraph};
use tracing::{debug, trace};

use super::SelectionOutcome;
use crate::assembler::GraphAssembler;
use crate::candidates::NeighborLists;
use crate::scorer::PairScore;

pub(super) fn run<G: ParentSetGraph + ?Sized>(
    scores: &[PairScore],
    attributes: usize,
    asm: &mut GraphAssembler<'_, G>,
) -> Result<SelectionOutcome, LearnError> {
    let lists = NeighborLists::from_scores(attributes, scores);
    let max_children = asm.limits().max_children;

    for i in 0..attributes {
        let mut added = 0usize;
        for (key, child) in lists.children_of(i).iter() {
            if added >= max_children {
                break;
            }
            if asm.try_add(i, child, key.entropy)? {
                added += 1;
            }
        }
        trace!(attribute = i, added, "children scanned");
    }

    debug!(
        candidates = lists.edge_count(),
        accepted = asm.accepted().len(),
        "children-only greedy finished"
    );
    Ok(SelectionOutcome {
        candidates: lists.edge_count(),
        expansion_order: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::DegreeLimits;
    use bestparents_core::BayesNet;

    fn pair(higher: usize, lower: usize, h_hl: f64, h_lh: f64) -> PairScore {
        PairScore {
            higher,
            lower,
            higher_given_lower: h_hl,
            lower_given_higher: h_lh,
        }
    }

    #[test]
    fn takes_children_in_rank_order_up_to_the_limit() {
        let scores = [
            pair(1, 0, 0.3, 0.9), // 0 → 1 @ 0.3
            pair(2, 0, 0.1, 0.9), // 0 → 2 @ 0.1
            pair(2, 1, 0.9, 0.9), // 2 → 1 @ 0.9
            pair(3, 0, 0.2, 0.9), // 0 → 3 @ 0.2
        ];
        let mut net = BayesNet::with_nodes(4);
        let mut asm = GraphAssembler::new(&mut net, DegreeLimits::new(1, 2));
        let outcome = run(&scores, 4, &mut asm).expect("run");

        // 0 takes 2 and 3; 1 is left for 2, its only other ranked parent.
        let edges: Vec<(usize, usize)> = asm.accepted().iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, vec![(0, 2), (0, 3), (2, 1)]);
        assert_eq!(outcome.candidates, 4);
    }

    #[test]
    fn full_parent_sets_are_skipped_not_fatal() {
        let scores = [
            pair(2, 0, 0.1, 0.9), // 0 → 2 @ 0.1
            pair(2, 1, 0.2, 0.9), // 1 → 2 @ 0.2
        ];
        let mut net = BayesNet::with_nodes(3);
        let mut asm = GraphAssembler::new(&mut net, DegreeLimits::new(1, 1));
        run(&scores, 3, &mut asm).expect("run");
        let edges: Vec<(usize, usize)> = asm.accepted().iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, vec![(0, 2)]);
    }
}
