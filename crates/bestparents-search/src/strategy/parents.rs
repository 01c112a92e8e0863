//! Parents-only greedy: each attribute, in index order, takes its strongest
//! ranked parents until it reaches `max_parents`.

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
    let max_parents = asm.limits().max_parents;

    for i in 0..attributes {
        let mut added = 0usize;
        for (key, parent) in lists.parents_of(i).iter() {
            if added >= max_parents {
                break;
            }
            if asm.try_add(parent, i, key.entropy)? {
                added += 1;
            }
        }
        trace!(attribute = i, added, "parents scanned");
    }

    debug!(
        candidates = lists.edge_count(),
        accepted = asm.accepted().len(),
        "parents-only greedy finished"
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
    fn takes_parents_until_the_child_is_full() {
        let scores = [
            pair(2, 0, 0.4, 0.9), // 0 → 2 @ 0.4
            pair(2, 1, 0.2, 0.9), // 1 → 2 @ 0.2
            pair(3, 2, 0.9, 0.1), // 3 → 2 @ 0.1
        ];
        let mut net = BayesNet::with_nodes(4);
        let mut asm = GraphAssembler::new(&mut net, DegreeLimits::new(2, 1));
        run(&scores, 4, &mut asm).expect("run");

        let edges: Vec<(usize, usize)> = asm.accepted().iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, vec![(3, 2), (1, 2)]);
    }

    #[test]
    fn busy_parents_are_passed_over() {
        let scores = [
            pair(1, 0, 0.1, 0.9), // 0 → 1 @ 0.1
            pair(2, 0, 0.1, 0.9), // 0 → 2 @ 0.1
            pair(2, 1, 0.3, 0.9), // 1 → 2 @ 0.3
        ];
        let mut net = BayesNet::with_nodes(3);
        let mut asm = GraphAssembler::new(&mut net, DegreeLimits::new(1, 1));
        run(&scores, 3, &mut asm).expect("run");

        // 0 already feeds 1, so 2 falls back to 1.
        let edges: Vec<(usize, usize)> = asm.accepted().iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }
}
