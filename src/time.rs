//! Wall-clock search budget.
//!
//! The engine's only time control is a single millisecond budget handed in
//! by the caller (spec.md §6); there is no UCI-style clock/increment
//! negotiation, so this is a stripped-down `TimeManager`: one deadline,
//! checked cheaply from deep inside the search.

use std::time::Instant;

pub struct SearchClock {
    start: Instant,
    limit_ms: u64,
}

impl SearchClock {
    pub fn new(limit_ms: u64) -> Self {
        Self { start: Instant::now(), limit_ms }
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// True once the budget has been exceeded. Checked at the top of every
    /// `alpha_beta` call rather than after every node, since `Instant::now`
    /// is cheap but not free.
    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed_ms() > self.limit_ms
    }
}
