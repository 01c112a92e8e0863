//! Ranked candidate edges.
//!
//! Two views of the same pairwise scores:
//!
//! - [`CandidateIndex`] — one global ascending list of directed candidates,
//!   optionally holding both orientations of every pair.
//! - [`NeighborLists`] — per attribute, its ranked parent candidates and its
//!   ranked child candidates, built from each pair's winning orientation.
//!
//! # Ordering
//!
//! Candidates are ordered by [`RankKey`]: entropy ascending, then the
//! sequence number assigned in pair-enumeration order. Equal entropies never
//! collapse into one entry, and the tie order is reproducible.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::scorer::PairScore;

/// Sort key of a candidate: entropy, then insertion sequence.
#[derive(Debug, Clone, Copy)]
pub struct RankKey {
    pub entropy: f64,
    pub seq: usize,
}

impl RankKey {
    #[must_use]
    pub const fn new(entropy: f64, seq: usize) -> Self {
        Self { entropy, seq }
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entropy
            .total_cmp(&other.entropy)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A directed candidate `parent → child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateEdge {
    pub parent: usize,
    pub child: usize,
    pub key: RankKey,
}

impl CandidateEdge {
    #[must_use]
    pub const fn entropy(&self) -> f64 {
        self.key.entropy
    }
}

// ---------------------------------------------------------------------------
// Global ranking
// ---------------------------------------------------------------------------

/// Every directed candidate in ascending [`RankKey`] order.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    edges: Vec<CandidateEdge>,
}

impl CandidateIndex {
    /// One candidate per pair: its winning orientation.
    #[must_use]
    pub fn lowest_only(scores: &[PairScore]) -> Self {
        let edges = scores
            .iter()
            .enumerate()
            .map(|(seq, s)| {
                let e = s.best_edge();
                CandidateEdge {
                    parent: e.parent,
                    child: e.child,
                    key: RankKey::new(e.entropy, seq),
                }
            })
            .collect();
        Self::sorted(edges)
    }

    /// Two candidates per pair, one per orientation; the tie-winner of each
    /// pair gets the smaller sequence number.
    #[must_use]
    pub fn both_orientations(scores: &[PairScore]) -> Self {
        let edges = scores
            .iter()
            .flat_map(PairScore::both_edges)
            .enumerate()
            .map(|(seq, e)| CandidateEdge {
                parent: e.parent,
                child: e.child,
                key: RankKey::new(e.entropy, seq),
            })
            .collect();
        Self::sorted(edges)
    }

    fn sorted(mut edges: Vec<CandidateEdge>) -> Self {
        edges.sort_by_key(|e| e.key);
        Self { edges }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateEdge> + '_ {
        self.edges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Per-attribute rankings
// ---------------------------------------------------------------------------

/// One attribute's ranked neighbors: key → neighbor index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedNeighbors {
    entries: BTreeMap<RankKey, usize>,
}

impl RankedNeighbors {
    pub fn insert(&mut self, key: RankKey, neighbor: usize) {
        self.entries.insert(key, neighbor);
    }

    /// Lowest-entropy entry.
    #[must_use]
    pub fn first(&self) -> Option<(RankKey, usize)> {
        self.entries.first_key_value().map(|(k, v)| (*k, *v))
    }

    /// The `k` lowest-entropy entries, ascending.
    #[must_use]
    pub fn first_k(&self, k: usize) -> Vec<(RankKey, usize)> {
        self.entries.iter().take(k).map(|(k, v)| (*k, *v)).collect()
    }

    pub fn remove(&mut self, key: &RankKey) -> Option<usize> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RankKey, usize)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranked parent and child candidates for every attribute.
///
/// Each pair contributes its winning edge `p → c` once to `parents[c]` and
/// once to `children[p]`, under the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborLists {
    parents: Vec<RankedNeighbors>,
    children: Vec<RankedNeighbors>,
}

impl NeighborLists {
    #[must_use]
    pub fn from_scores(attributes: usize, scores: &[PairScore]) -> Self {
        let mut lists = Self {
            parents: vec![RankedNeighbors::default(); attributes],
            children: vec![RankedNeighbors::default(); attributes],
        };
        for (seq, score) in scores.iter().enumerate() {
            let e = score.best_edge();
            let key = RankKey::new(e.entropy, seq);
            lists.parents[e.child].insert(key, e.parent);
            lists.children[e.parent].insert(key, e.child);
        }
        lists
    }

    /// Ranked candidates to become a parent of `attribute`.
    #[must_use]
    pub fn parents_of(&self, attribute: usize) -> &RankedNeighbors {
        &self.parents[attribute]
    }

    /// Ranked candidates to become a child of `attribute`.
    #[must_use]
    pub fn children_of(&self, attribute: usize) -> &RankedNeighbors {
        &self.children[attribute]
    }

    /// Drop the claimed edge `parent → child` from both endpoint lists.
    pub fn claim(&mut self, key: &RankKey, parent: usize, child: usize) {
        self.parents[child].remove(key);
        self.children[parent].remove(key);
    }

    /// Total number of ranked edges (each counted once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(RankedNeighbors::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(higher: usize, lower: usize, h_hl: f64, h_lh: f64) -> PairScore {
        PairScore {
            higher,
            lower,
            higher_given_lower: h_hl,
            lower_given_higher: h_lh,
        }
    }

    #[test]
    fn equal_entropies_keep_every_entry_in_insertion_order() {
        let scores = [
            pair(1, 0, 0.7, 0.5), // 1 → 0 @ 0.5
            pair(2, 0, 0.5, 0.9), // 0 → 2 @ 0.5
            pair(2, 1, 0.2, 0.3), // 1 → 2 @ 0.2
        ];
        let index = CandidateIndex::lowest_only(&scores);
        let order: Vec<(usize, usize)> = index.iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(order, vec![(1, 2), (1, 0), (0, 2)]);
    }

    #[test]
    fn full_list_holds_both_orientations() {
        let scores = [pair(1, 0, 1.0, 1.0), pair(2, 1, 0.1, 0.8)];
        let index = CandidateIndex::both_orientations(&scores);
        assert_eq!(index.len(), 4);
        let order: Vec<(usize, usize, f64)> = index
            .iter()
            .map(|e| (e.parent, e.child, e.entropy()))
            .collect();
        assert_eq!(
            order,
            vec![(1, 2, 0.1), (2, 1, 0.8), (1, 0, 1.0), (0, 1, 1.0)]
        );
    }

    #[test]
    fn neighbor_lists_mirror_each_winning_edge() {
        let scores = [
            pair(1, 0, 0.9, 0.4), // 1 → 0
            pair(2, 0, 0.3, 0.6), // 0 → 2
            pair(2, 1, 0.8, 0.2), // 2 → 1
        ];
        let lists = NeighborLists::from_scores(3, &scores);

        assert_eq!(lists.edge_count(), 3);
        assert_eq!(lists.parents_of(0).first().map(|(_, n)| n), Some(1));
        assert_eq!(lists.children_of(0).first().map(|(_, n)| n), Some(2));
        assert_eq!(lists.parents_of(1).first().map(|(_, n)| n), Some(2));
        let kids_of_1: Vec<usize> = lists.children_of(1).iter().map(|(_, n)| n).collect();
        assert_eq!(kids_of_1, vec![0]);
        assert!(lists.children_of(0).len() == 1 && lists.parents_of(2).len() == 1);
    }

    #[test]
    fn first_k_and_claim() {
        let scores = [
            pair(1, 0, 0.9, 0.4), // 1 → 0 @ 0.4
            pair(2, 0, 0.9, 0.1), // 2 → 0 @ 0.1
            pair(3, 0, 0.9, 0.4), // 3 → 0 @ 0.4 (tie with seq 0)
        ];
        let mut lists = NeighborLists::from_scores(4, &scores);
        let top: Vec<usize> = lists.parents_of(0).first_k(2).into_iter().map(|(_, n)| n).collect();
        assert_eq!(top, vec![2, 1]);
        assert_eq!(lists.parents_of(0).first_k(10).len(), 3);

        let (key, parent) = lists.parents_of(0).first().expect("non-empty");
        lists.claim(&key, parent, 0);
        assert_eq!(lists.parents_of(0).len(), 2);
        assert!(lists.children_of(2).is_empty());
        assert_eq!(lists.parents_of(0).first().map(|(_, n)| n), Some(1));
    }

    #[test]
    fn rank_key_orders_by_entropy_then_sequence() {
        let a = RankKey::new(0.5, 3);
        let b = RankKey::new(0.5, 1);
        let c = RankKey::new(0.25, 9);
        let mut keys = vec![a, b, c];
        keys.sort();
        assert_eq!(keys, vec![c, b, a]);
        assert_ne!(a, b);
        assert_eq!(RankKey::new(0.0, 0), RankKey::new(0.0, 0));
    }
}
