//! # Jungle Engine
//!
//! A search engine for Dou Shou Qi (Jungle / Animal Chess): move generation
//! under the full ruleset (river jumps, trap neutralisation, the Rat/Elephant
//! exception), Zobrist-hashed transposition table, MVV-LVA plus killer/history
//! move ordering, and an iterative-deepening alpha-beta search with null-move
//! and late-move reductions.
//!
//! The engine has no notion of a persistent session: a caller hands in a flat
//! board vector, a search depth and a millisecond budget, and reads a flat
//! result vector back (see [`io`]). [`Engine`] wraps the reusable search state
//! (transposition table, killer/history tables, evaluator) across calls.
//!
//! ## Core modules
//!
//! - [`board`] - board representation, terrain and game-status logic
//! - [`piece`] - piece types, sides and the rank/value table
//! - [`r#move`] / [`movelist`] - move representation and fixed-capacity move lists
//! - [`movegen`] - legal move generation
//! - [`zobrist`] - incremental position hashing
//! - [`tt`] - the transposition table
//! - [`move_order`] - MVV-LVA, killer and history move ordering
//! - [`eval`] - the static evaluator
//! - [`search`] - iterative deepening over the alpha-beta core
//! - [`time`] - the wall-clock search budget
//! - [`io`] - flat-vector board/result transport
//! - [`perft`] - move-count sanity checking

pub mod board;
pub mod eval;
pub mod io;
#[allow(clippy::module_inception)]
pub mod r#move;
pub mod move_order;
pub mod movegen;
pub mod movelist;
pub mod perft;
pub mod piece;
pub mod search;
pub mod time;
pub mod tt;
pub mod types;
pub mod zobrist;

use board::Board;
use eval::Evaluator;
use io::{board_from_flat, write_result, FLAT_BOARD_LEN};
use move_order::MoveOrder;
use time::SearchClock;
use tt::TranspositionTable;
use types::{EngineConfig, SearchDiagnostics, SearchStatus};

/// Owns the state that is reused across `find_best_move` calls: the
/// transposition table and the killer/history tables. Both are cleared at
/// the start of every call, matching the reference implementation's
/// per-call reinitialisation (there is no notion of carrying a table across
/// unrelated searches).
pub struct Engine {
    config: EngineConfig,
    tt: TranspositionTable,
    order: MoveOrder,
    evaluator: Evaluator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tt: TranspositionTable::new(),
            order: MoveOrder::new(),
            evaluator: Evaluator::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reset the transposition table and the killer/history tables. Called
    /// automatically at the top of [`Engine::find_best_move`]; exposed
    /// separately for callers that want to reuse an `Engine` across
    /// unrelated games without reallocating it.
    pub fn initialize(&mut self) {
        self.tt.clear();
        self.order.clear();
    }

    /// Parse `flat_board`, search it to `max_depth` plies (or until
    /// `time_limit_ms` elapses, whichever comes first), and write the result
    /// into `out` as the ten-index vector described in [`io::write_result`].
    ///
    /// A malformed `flat_board` is treated the same as "no legal move found"
    /// (status 2, `GeneratorEmpty`): the caller handed in something the
    /// board parser could not make sense of, which in practice means the
    /// move generator never even ran.
    pub fn find_best_move(
        &mut self,
        flat_board: &[i32],
        max_depth: u32,
        time_limit_ms: u64,
        out: &mut [i32],
    ) -> SearchDiagnostics {
        self.initialize();

        let board = match board_from_flat(flat_board) {
            Ok(board) => board,
            Err(err) => {
                tracing::debug!(%err, "rejected malformed flat board");
                write_result(out, false, None, None, None, 0, 0, 0, SearchStatus::GeneratorEmpty.code());
                return SearchDiagnostics {
                    depth_reached: 0,
                    nodes: 0,
                    score: 0,
                    status: SearchStatus::GeneratorEmpty,
                };
            }
        };

        let clock = SearchClock::new(time_limit_ms);
        let result = search::iterative_deepening(
            &board,
            max_depth,
            &clock,
            &self.evaluator,
            &mut self.tt,
            &mut self.order,
            self.config.max_q_depth as i32,
        );

        match result {
            Some((mv, score, depth_reached, nodes)) => {
                write_result(
                    out,
                    true,
                    Some((mv.from_row, mv.from_col)),
                    Some((mv.to_row, mv.to_col)),
                    Some(mv.piece_type),
                    depth_reached,
                    nodes,
                    score,
                    SearchStatus::Ok.code(),
                );
                tracing::info!(depth_reached, nodes, score, "find_best_move complete");
                SearchDiagnostics { depth_reached, nodes, score, status: SearchStatus::Ok }
            }
            None => {
                write_result(out, false, None, None, None, 0, 0, 0, SearchStatus::NoLegalMove.code());
                SearchDiagnostics {
                    depth_reached: 0,
                    nodes: 0,
                    score: 0,
                    status: SearchStatus::NoLegalMove,
                }
            }
        }
    }
}

/// Convenience for callers that just want an empty flat-board-sized result
/// buffer to pass to [`Engine::find_best_move`].
pub fn new_result_buffer() -> Vec<i32> {
    vec![0; 10]
}

/// Re-exported so callers checking a flat board's length before calling
/// `find_best_move` don't have to reach into `io` for it.
pub const BOARD_VECTOR_LEN: usize = FLAT_BOARD_LEN;
