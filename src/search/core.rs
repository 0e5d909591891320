//! Alpha-beta search core: the recursive heart of the engine. Holds
//! borrowed access to the shared transposition table and move orderer for
//! the duration of one `find_best_move` call, and a running node count.

use crate::board::{Board, GameStatus};
use crate::eval::{Evaluator, DRAW_SCORE, LOSE_SCORE, WIN_SCORE};
use crate::movegen::{apply_move, generate_moves};
use crate::move_order::MoveOrder;
use crate::piece::Player;
use crate::r#move::Move;
use crate::search::lmr::{lmr_applicable, LMR_REDUCTION_BASE};
use crate::search::pruning::{nmp_applicable, NMP_REDUCTION};
use crate::time::SearchClock;
use crate::tt::{Bound, TranspositionTable};
use crate::zobrist::{flip_side_to_move, update_hash};
use tracing::debug;

/// Safely larger than any real score (`WIN_SCORE` is 20000) without risking
/// overflow on negation, unlike the reference's literal `INT_MIN`/`INT_MAX`.
pub const INFINITY: i32 = 1_000_000;

/// Sentinel returned by every search function once the time budget has
/// expired; every caller checks for it and propagates it unchanged rather
/// than folding it into a score comparison.
pub const TIMEOUT: i32 = 888_888;

/// Mate scores within this many plies of the horizon are treated as "close
/// enough" for the driver's early-exit check.
pub const MAX_PLY_FOR_KILLERS: i32 = 30;

pub struct Searcher<'a> {
    evaluator: &'a Evaluator,
    tt: &'a mut TranspositionTable,
    order: &'a mut MoveOrder,
    clock: &'a SearchClock,
    max_q_depth: i32,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(
        evaluator: &'a Evaluator,
        tt: &'a mut TranspositionTable,
        order: &'a mut MoveOrder,
        clock: &'a SearchClock,
        max_q_depth: i32,
    ) -> Self {
        Self { evaluator, tt, order, clock, max_q_depth, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// `is_maximizing` is true when it's Player1's (the AI's) turn: the AI
    /// always plays Player1, so unlike a generic negamax engine this search
    /// keeps an explicit maximiser/minimiser split rather than flipping the
    /// score's sign at every ply.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        hash: u64,
        depth: i32,
        alpha: i32,
        beta: i32,
        is_maximizing: bool,
        ply: i32,
        path_hashes: &mut Vec<u64>,
        allow_null: bool,
    ) -> i32 {
        self.nodes += 1;
        if self.clock.expired() {
            return TIMEOUT;
        }

        let is_root_child = ply == 0;

        if ply > 0 {
            let occurrences = path_hashes.iter().filter(|&&h| h == hash).count();
            if occurrences >= 2 {
                return DRAW_SCORE;
            }
        }

        path_hashes.push(hash);
        let result = self.alpha_beta_inner(
            board,
            hash,
            depth,
            alpha,
            beta,
            is_maximizing,
            ply,
            path_hashes,
            allow_null,
            is_root_child,
        );
        path_hashes.pop();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta_inner(
        &mut self,
        board: &Board,
        hash: u64,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        is_maximizing: bool,
        ply: i32,
        path_hashes: &mut Vec<u64>,
        allow_null: bool,
        is_root_child: bool,
    ) -> i32 {
        if ply > 0 {
            if let Some(entry) = self.tt.probe(hash) {
                if entry.depth as i32 >= depth {
                    match entry.bound {
                        Bound::Exact => return entry.score,
                        Bound::LowerBound => alpha = alpha.max(entry.score),
                        Bound::UpperBound => beta = beta.min(entry.score),
                    }
                    if alpha >= beta {
                        return entry.score;
                    }
                }
            }
        }

        match board.game_status() {
            GameStatus::Player1Wins => return WIN_SCORE - ply,
            GameStatus::Player0Wins => return LOSE_SCORE + ply,
            GameStatus::Draw => return DRAW_SCORE,
            GameStatus::Ongoing => {}
        }

        if depth <= 0 {
            return self.quiescence(board, alpha, beta, is_maximizing, 0);
        }

        if nmp_applicable(depth, allow_null, is_root_child) {
            // The null move only flips the side-to-move key; it never
            // actually happens on the board, so it must not become an entry
            // in the repetition path. Recurse into `alpha_beta_inner`
            // directly rather than `alpha_beta`, which would push/pop
            // `null_hash` onto `path_hashes`.
            let null_hash = flip_side_to_move(hash);
            let null_result = self.alpha_beta_inner(
                board,
                null_hash,
                depth - 1 - NMP_REDUCTION as i32,
                -beta,
                -beta + 1,
                !is_maximizing,
                ply + 1,
                path_hashes,
                false,
                false,
            );
            if null_result == TIMEOUT {
                return TIMEOUT;
            }
            if -null_result >= beta {
                return beta;
            }
        }

        let side = if is_maximizing { Player::Player1 } else { Player::Player0 };
        let mut moves = generate_moves(board, side, false);

        if moves.is_empty() {
            return if is_maximizing { LOSE_SCORE + ply } else { WIN_SCORE - ply };
        }

        let tt_move = self.tt.probe(hash).map(|e| e.best_move);
        self.order.order_moves(&mut moves, ply.max(0) as usize, tt_move);

        let mut best_score = if is_maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<Move> = None;
        let original_alpha = alpha;
        let mut moves_searched_full_depth = 0usize;

        for mv in moves.as_slice().to_vec() {
            let child_board = apply_move(board, &mv, side);
            let child_hash = update_hash(
                hash,
                side,
                mv.piece_type,
                mv.captured,
                (mv.from_row, mv.from_col),
                (mv.to_row, mv.to_col),
            );

            let is_quiet = !mv.is_capture();
            let mut search_depth = depth - 1;
            if lmr_applicable(depth, moves_searched_full_depth, is_quiet, is_root_child) {
                search_depth = depth - 1 - LMR_REDUCTION_BASE;
            }

            let mut score = self.alpha_beta(
                &child_board,
                child_hash,
                search_depth,
                alpha,
                beta,
                !is_maximizing,
                ply + 1,
                path_hashes,
                true,
            );

            if search_depth < depth - 1 && score > alpha && score != TIMEOUT {
                score = self.alpha_beta(
                    &child_board,
                    child_hash,
                    depth - 1,
                    alpha,
                    beta,
                    !is_maximizing,
                    ply + 1,
                    path_hashes,
                    true,
                );
            }

            if score == TIMEOUT {
                return TIMEOUT;
            }

            if is_maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            moves_searched_full_depth += 1;

            if alpha >= beta {
                if is_quiet {
                    self.order.record_killer(mv, ply.max(0) as usize);
                    self.order.record_history(mv, depth.max(0) as u8);
                }
                break;
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::UpperBound
        } else if best_score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        if let Some(mv) = best_move {
            debug_assert_eq!(
                hash,
                crate::zobrist::compute_full(board, side),
                "incremental hash diverged from a full recompute at store time"
            );
            self.tt.store(hash, mv, best_score, depth.max(0) as u8, bound);
        }

        best_score
    }

    /// Captures-only search beyond the nominal horizon, capped at
    /// `max_q_depth`, to avoid misjudging positions mid-capture-sequence.
    fn quiescence(&mut self, board: &Board, mut alpha: i32, mut beta: i32, is_maximizing: bool, q_depth: i32) -> i32 {
        self.nodes += 1;
        if self.clock.expired() {
            return TIMEOUT;
        }

        let stand_pat = self.evaluator.evaluate(board);

        if q_depth >= self.max_q_depth {
            return stand_pat;
        }

        if is_maximizing {
            if stand_pat >= beta {
                return beta;
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            if stand_pat < beta {
                beta = stand_pat;
            }
        }

        let side = if is_maximizing { Player::Player1 } else { Player::Player0 };
        let mut moves = generate_moves(board, side, true);
        self.order.order_moves(&mut moves, 0, None);

        for mv in moves.as_slice().to_vec() {
            let child_board = apply_move(board, &mv, side);
            let score = self.quiescence(&child_board, alpha, beta, !is_maximizing, q_depth + 1);
            if score == TIMEOUT {
                return TIMEOUT;
            }

            if is_maximizing {
                if score > alpha {
                    alpha = score;
                }
                if alpha >= beta {
                    return beta;
                }
            } else {
                if score < beta {
                    beta = score;
                }
                if alpha >= beta {
                    return alpha;
                }
            }
        }

        if is_maximizing {
            alpha
        } else {
            beta
        }
    }
}

/// One iterative-deepening search from `board` (Player1 to move, per
/// spec.md's "AI is always Player1"), returning the best root move, its
/// score, the deepest completed depth, and the total node count.
#[allow(clippy::too_many_arguments)]
pub fn iterative_deepening(
    board: &Board,
    max_depth: u32,
    clock: &SearchClock,
    evaluator: &Evaluator,
    tt: &mut TranspositionTable,
    order: &mut MoveOrder,
    max_q_depth: i32,
) -> Option<(Move, i32, u32, u64)> {
    let root_hash = crate::zobrist::compute_full(board, Player::Player1);
    let root_moves = generate_moves(board, Player::Player1, false);
    if root_moves.is_empty() {
        return None;
    }

    let mut best_move = root_moves.as_slice()[0];
    let mut best_score = 0;
    let mut depth_reached = 0;
    let mut searcher = Searcher::new(evaluator, tt, order, clock, max_q_depth);

    for depth in 1..=max_depth {
        if clock.expired() {
            break;
        }

        let mut moves = root_moves.clone();
        let tt_move = searcher.tt.probe(root_hash).map(|e| e.best_move);
        searcher.order.order_moves(&mut moves, 0, tt_move);

        let mut iter_best_score = -INFINITY;
        let mut iter_best_move = moves.as_slice()[0];
        let mut timed_out = false;

        for mv in moves.as_slice().to_vec() {
            let child_board = apply_move(board, &mv, Player::Player1);
            let child_hash = update_hash(
                root_hash,
                Player::Player1,
                mv.piece_type,
                mv.captured,
                (mv.from_row, mv.from_col),
                (mv.to_row, mv.to_col),
            );
            // `alpha_beta` itself pushes `child_hash` onto the path at
            // `ply == 0`, so seed empty here rather than pre-seeding with
            // `child_hash` (which would double-count it).
            let mut path = Vec::new();

            let score = searcher.alpha_beta(
                &child_board,
                child_hash,
                depth as i32 - 1,
                -INFINITY,
                INFINITY,
                false,
                0,
                &mut path,
                true,
            );

            if score == TIMEOUT {
                timed_out = true;
                break;
            }

            if score > iter_best_score {
                iter_best_score = score;
                iter_best_move = mv;
            }
        }

        if timed_out {
            break;
        }

        depth_reached = depth;
        best_score = iter_best_score;
        best_move = iter_best_move;

        debug!(depth, nodes = searcher.nodes(), score = best_score, "iteration complete");

        if best_score > WIN_SCORE - MAX_PLY_FOR_KILLERS * 2 || best_score < LOSE_SCORE + MAX_PLY_FOR_KILLERS * 2 {
            break;
        }
    }

    Some((best_move, best_score, depth_reached, searcher.nodes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::{Piece, PieceType};

    fn searcher<'a>(
        evaluator: &'a Evaluator,
        tt: &'a mut TranspositionTable,
        order: &'a mut MoveOrder,
        clock: &'a SearchClock,
    ) -> Searcher<'a> {
        Searcher::new(evaluator, tt, order, clock, 4)
    }

    #[test]
    fn immediate_winning_capture_is_preferred() {
        let mut board = Board::empty();
        board.set_piece(4, 3, Some(Piece::new(PieceType::Lion, Player::Player1)));
        board.set_piece(5, 3, Some(Piece::new(PieceType::Cat, Player::Player0)));

        let evaluator = Evaluator::new();
        let mut tt = TranspositionTable::new();
        let mut order = MoveOrder::new();
        let clock = SearchClock::new(5000);

        let (best_move, score, depth, _nodes) =
            iterative_deepening(&board, 4, &clock, &evaluator, &mut tt, &mut order, 4).unwrap();

        assert_eq!((best_move.to_row, best_move.to_col), (5, 3));
        assert!(score > 0);
        assert!(depth >= 1);
    }

    #[test]
    fn terminal_position_returns_mate_distance_adjusted_score() {
        let evaluator = Evaluator::new();
        let mut tt = TranspositionTable::new();
        let mut order = MoveOrder::new();
        let clock = SearchClock::new(1000);
        let mut s = searcher(&evaluator, &mut tt, &mut order, &clock);

        let mut board = Board::empty();
        board.set_piece(8, 3, Some(Piece::new(PieceType::Rat, Player::Player1)));
        let mut path = Vec::new();
        let score = s.alpha_beta(&board, 0, 3, -INFINITY, INFINITY, true, 1, &mut path, true);
        assert_eq!(score, WIN_SCORE - 1);
    }

    #[test]
    fn no_legal_moves_returns_none() {
        let board = Board::empty();
        let evaluator = Evaluator::new();
        let mut tt = TranspositionTable::new();
        let mut order = MoveOrder::new();
        let clock = SearchClock::new(1000);
        assert!(iterative_deepening(&board, 3, &clock, &evaluator, &mut tt, &mut order, 4).is_none());
    }

    #[test]
    fn strict_budget_still_returns_a_legal_move() {
        let mut board = Board::empty();
        board.set_piece(4, 3, Some(Piece::new(PieceType::Lion, Player::Player1)));
        board.set_piece(5, 3, Some(Piece::new(PieceType::Cat, Player::Player0)));

        let evaluator = Evaluator::new();
        let mut tt = TranspositionTable::new();
        let mut order = MoveOrder::new();
        let clock = SearchClock::new(0);

        let result = iterative_deepening(&board, 10, &clock, &evaluator, &mut tt, &mut order, 4);
        assert!(result.is_some());
    }
}
