//! Per-attribute greedy: each attribute, visited once in index order, takes
//! either its best child or its best parent, whichever has the lower
//! entropy.
//!
//! Claims are role-specific. An attribute taken as someone's child cannot be
//! taken as a child again, and likewise for parents. Each branch also
//! requires the *other* branch's best candidate to exist and be unclaimed in
//! its role; an attribute with only children or only parents ranked never
//! adds an edge.

use bestparents_core::{LearnError, ParentSetGraph};
use tracing::{debug, trace};

use super::SelectionOutcome;
use crate::assembler::GraphAssembler;
use crate::candidates::{NeighborLists, RankKey};
use crate::constraints::ClaimedSet;
use crate::scorer::PairScore;

fn entropy_or_inf(best: Option<(RankKey, usize)>) -> f64 {
    best.map_or(f64::INFINITY, |(key, _)| key.entropy)
}

pub(super) fn run<G: ParentSetGraph + ?Sized>(
    scores: &[PairScore],
    attributes: usize,
    asm: &mut GraphAssembler<'_, G>,
) -> Result<SelectionOutcome, LearnError> {
    let lists = NeighborLists::from_scores(attributes, scores);
    let limits = asm.limits();
    let mut claimed_as_child = ClaimedSet::new(attributes);
    let mut claimed_as_parent = ClaimedSet::new(attributes);

    for i in 0..attributes {
        let best_child = lists.children_of(i).first();
        let best_parent = lists.parents_of(i).first();
        let mut added = 0usize;

        if entropy_or_inf(best_child) < entropy_or_inf(best_parent) {
            let Some((key, child)) = best_child else {
                continue;
            };
            let counterpart_free = best_parent.is_some_and(|(_, p)| !claimed_as_parent.is_claimed(p));
            let admissible = added < limits.max_children
                && limits.admits(asm.graph(), i, child)
                && !asm.graph().has_edge(i, child)
                && !claimed_as_child.is_claimed(child)
                && counterpart_free;
            if admissible && asm.try_add(i, child, key.entropy)? {
                claimed_as_child.claim(child);
                added += 1;
            } else {
                trace!(attribute = i, child, "best child not taken");
            }
        } else {
            let Some((key, parent)) = best_parent else {
                continue;
            };
            let counterpart_free = best_child.is_some_and(|(_, c)| !claimed_as_child.is_claimed(c));
            let admissible = added < limits.max_parents
                && limits.admits(asm.graph(), parent, i)
                && !asm.graph().has_edge(parent, i)
                && !claimed_as_parent.is_claimed(parent)
                && counterpart_free;
            if admissible && asm.try_add(parent, i, key.entropy)? {
                claimed_as_parent.claim(parent);
                added += 1;
            } else {
                trace!(attribute = i, parent, "best parent not taken");
            }
        }
        trace!(attribute = i, added, "attribute visited");
    }

    debug!(
        candidates = lists.edge_count(),
        accepted = asm.accepted().len(),
        "per-attribute greedy finished"
    );
    Ok(SelectionOutcome {
        candidates: lists.edge_count(),
        expansion_order: Vec::new(),
    })
}
