//! Wave expansion: breadth-first growth from a root attribute.
//!
//! The root is claimed up front. Each dequeued attribute looks at the first
//! `max_parents` entries of its ranked parent list, then the first
//! `max_children` entries of its ranked child list. Every unclaimed neighbor
//! whose edge is accepted gets claimed and buffered for the next wave. A
//! buffered wave is replayed in ascending entropy order (enumeration order on
//! ties) once the current queue drains.
//!
//! Claimed neighbors still occupy one of the `K` examined slots.

use std::collections::{BTreeMap, VecDeque};

use bestparents_core::{LearnError, ParentSetGraph};
use tracing::{debug, trace};

use super::SelectionOutcome;
use crate::assembler::GraphAssembler;
use crate::candidates::{NeighborLists, RankKey};
use crate::constraints::ClaimedSet;
use crate::scorer::PairScore;

/// Mutable state of one wave run.
struct Expansion {
    lists: NeighborLists,
    claimed: ClaimedSet,
    next_wave: BTreeMap<RankKey, usize>,
    order: Vec<usize>,
}

/// Which endpoint of the examined edge the dequeued attribute is.
#[derive(Clone, Copy)]
enum Side {
    Parents,
    Children,
}

impl Expansion {
    fn expand<G: ParentSetGraph + ?Sized>(
        &mut self,
        attribute: usize,
        side: Side,
        asm: &mut GraphAssembler<'_, G>,
    ) -> Result<(), LearnError> {
        let limits = asm.limits();
        let slots = match side {
            Side::Parents => self.lists.parents_of(attribute).first_k(limits.max_parents),
            Side::Children => self.lists.children_of(attribute).first_k(limits.max_children),
        };

        for (key, neighbor) in slots {
            if self.claimed.is_claimed(neighbor) {
                trace!(attribute, neighbor, "neighbor already claimed");
                continue;
            }
            let (parent, child) = match side {
                Side::Parents => (neighbor, attribute),
                Side::Children => (attribute, neighbor),
            };
            if asm.try_add(parent, child, key.entropy)? {
                self.claimed.claim(neighbor);
                self.lists.claim(&key, parent, child);
                self.next_wave.insert(key, neighbor);
            }
        }
        Ok(())
    }
}

pub(super) fn run<G: ParentSetGraph + ?Sized>(
    scores: &[PairScore],
    attributes: usize,
    root: Option<usize>,
    asm: &mut GraphAssembler<'_, G>,
) -> Result<SelectionOutcome, LearnError> {
    let lists = NeighborLists::from_scores(attributes, scores);
    let candidates = lists.edge_count();
    if attributes == 0 {
        return Ok(SelectionOutcome {
            candidates,
            expansion_order: Vec::new(),
        });
    }

    let root = root.unwrap_or(attributes - 1);
    if root >= attributes {
        return Err(LearnError::UnknownAttribute {
            attribute: root,
            count: attributes,
        });
    }

    let mut state = Expansion {
        lists,
        claimed: ClaimedSet::new(attributes),
        next_wave: BTreeMap::new(),
        order: Vec::new(),
    };
    state.claimed.claim(root);

    let mut queue = VecDeque::from([root]);
    let mut waves = 0usize;
    loop {
        while let Some(attribute) = queue.pop_front() {
            state.claimed.claim(attribute);
            state.order.push(attribute);
            state.expand(attribute, Side::Parents, asm)?;
            state.expand(attribute, Side::Children, asm)?;
        }
        if state.next_wave.is_empty() {
            break;
        }
        waves += 1;
        queue.extend(std::mem::take(&mut state.next_wave).into_values());
        trace!(wave = waves, size = queue.len(), "next wave queued");
    }

    debug!(
        root,
        waves,
        reached = state.order.len(),
        claimed = state.claimed.count(),
        accepted = asm.accepted().len(),
        "wave expansion finished"
    );
    Ok(SelectionOutcome {
        candidates,
        expansion_order: state.order,
    })
}
