//! Transposition table: a fixed, always-replace cache from Zobrist hash to
//! the best search result found for that position so far.

use crate::r#move::Move;
use crate::movelist::null_move;

/// Table size per spec.md §4.4: 2^20 entries, a fixed budget rather than a
/// user-configurable size in megabytes.
const TT_SIZE: usize = 1 << 20;
const TT_MASK: u64 = (TT_SIZE - 1) as u64;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Bound {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Debug, Copy, Clone)]
pub struct TTEntry {
    pub hash: u64,
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

impl TTEntry {
    fn empty() -> Self {
        Self {
            hash: 0,
            best_move: null_move(),
            score: 0,
            depth: 0,
            bound: Bound::Exact,
        }
    }
}

/// Always-replace transposition table: every store overwrites whatever was
/// in that slot, trading a higher miss rate for a trivial, branch-free
/// write path (spec.md §4.4: "always-replace; no depth-preferred slots").
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: vec![TTEntry::empty(); TT_SIZE],
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash & TT_MASK) as usize
    }

    /// Returns the slot's entry iff its stored hash matches; a mismatch
    /// means either an empty slot or a different position hashed here.
    pub fn probe(&self, hash: u64) -> Option<&TTEntry> {
        let entry = &self.entries[self.index(hash)];
        if entry.hash == hash {
            Some(entry)
        } else {
            None
        }
    }

    pub fn store(&mut self, hash: u64, best_move: Move, score: i32, depth: u8, bound: Bound) {
        let idx = self.index(hash);
        self.entries[idx] = TTEntry { hash, best_move, score, depth, bound };
    }

    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = TTEntry::empty();
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
