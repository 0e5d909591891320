//! Small serde-derived configuration and diagnostics types. The flat-vector
//! entry point takes depth/time directly as call arguments (spec.md §6), so
//! these exist for callers that want to configure or observe the engine
//! independent of a single `find_best_move` call, mirroring the teacher's
//! `EngineOptions`/`SearchInfo` pair.

use serde::{Deserialize, Serialize};

/// Tunable knobs for an `Engine` instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Informational only: the transposition table is always `2^20` entries
    /// (spec.md §3) to match the reference implementation's fixed sizing.
    /// Kept for API parity with configurable-size engines.
    pub tt_size_mb: u32,
    pub max_ply_for_killers: u32,
    pub max_q_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tt_size_mb: 16,
            max_ply_for_killers: 30,
            max_q_depth: 4,
        }
    }
}

/// Diagnostics for one `find_best_move` call, the typed counterpart to the
/// flat result vector's indices 6-9.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDiagnostics {
    pub depth_reached: u32,
    pub nodes: u64,
    pub score: i32,
    pub status: SearchStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Ok,
    NoLegalMove,
    GeneratorEmpty,
}

impl SearchStatus {
    pub fn code(self) -> i32 {
        match self {
            SearchStatus::Ok => 0,
            SearchStatus::NoLegalMove => 1,
            SearchStatus::GeneratorEmpty => 2,
        }
    }
}
