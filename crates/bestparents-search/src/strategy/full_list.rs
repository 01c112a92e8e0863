//! Full-list greedy: one ascending scan over every directed candidate.
//!
//! Both orientations of each pair are ranked. An accepted edge claims both
//! of its endpoints, so every attribute joins at most one edge per run.

use bestparents_core::{LearnError, ParentSetGraph};
use tracing::{debug, trace};

use super::SelectionOutcome;
use crate::assembler::GraphAssembler;
use crate::candidates::CandidateIndex;
use crate::constraints::ClaimedSet;
use crate::scorer::PairScore;

pub(super) fn run<G: ParentSetGraph + ?Sized>(
    scores: &[PairScore],
    attributes: usize,
    asm: &mut GraphAssembler<'_, G>,
) -> Result<SelectionOutcome, LearnError> {
    let index = CandidateIndex::both_orientations(scores);
    let mut claimed = ClaimedSet::new(attributes);

    for edge in index.iter() {
        if claimed.is_claimed(edge.parent) || claimed.is_claimed(edge.child) {
            trace!(parent = edge.parent, child = edge.child, "endpoint already claimed");
            continue;
        }
        if asm.try_add(edge.parent, edge.child, edge.entropy())? {
            claimed.claim(edge.parent);
            claimed.claim(edge.child);
        }
    }

    debug!(
        candidates = index.len(),
        accepted = asm.accepted().len(),
        "full-list scan finished"
    );
    Ok(SelectionOutcome {
        candidates: index.len(),
        expansion_order: Vec::new(),
    })
}
