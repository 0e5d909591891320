//! Static position evaluation: material, advancement, key squares, trap and
//! defence penalties, den proximity and immediate capture threats, combined
//! into a single side-relative score.

use crate::board::{Board, GameStatus, Terrain, COLS, PLAYER0_DEN, PLAYER1_DEN, ROWS};
use crate::movegen::can_capture;
use crate::piece::{Piece, PieceType, Player};

/// Terminal scores, shared with the search module for mate-distance
/// adjustment.
pub const WIN_SCORE: i32 = 20_000;
pub const LOSE_SCORE: i32 = -20_000;
pub const DRAW_SCORE: i32 = 0;

const MATERIAL_W: f64 = 1.0;
const ADVANCEMENT_W: f64 = 0.2;
const DEN_PROXIMITY_W: f64 = 6.0;
const ATTACK_THREAT_W: f64 = 1.5;
const KEY_SQUARE_W: f64 = 0.3;
const TRAPPED_PENALTY_W: f64 = -3.0;
const DEFENSE_PENALTY_W: f64 = -0.7;
const ADVANCEMENT_VALUE_SCALE_DIVISOR: f64 = 150.0;
const GENERAL_VALUE_SCALE_DIVISOR: f64 = 100.0;
const DEN_PROXIMITY_MAX_DISTANCE: f64 = 15.0;
const DEFENSE_PENALTY_START_ROW_OFFSET: i32 = 3;

/// Player0's three home-row key squares plus the den-adjacent square.
fn is_key_sq_p0(r: usize, c: usize) -> bool {
    (r == 4 && matches!(c, 2 | 3 | 4)) || (r == 1 && matches!(c, 2 | 4)) || (r == 2 && c == 3)
}

fn is_key_sq_p1(r: usize, c: usize) -> bool {
    (r == 4 && matches!(c, 2 | 3 | 4)) || (r == 7 && matches!(c, 2 | 4)) || (r == 6 && c == 3)
}

/// Stateless position evaluator. Kept as a struct, rather than a bare
/// function, so the search layer can hold one by reference the same way
/// it holds the move orderer and transposition table.
#[derive(Debug, Clone, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `board` from Player1's perspective: positive favors
    /// Player1, negative favors Player0. Terminal positions short-circuit
    /// to the fixed win/lose/draw scores.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.game_status() {
            GameStatus::Player1Wins => return WIN_SCORE,
            GameStatus::Player0Wins => return LOSE_SCORE,
            GameStatus::Draw => return DRAW_SCORE,
            GameStatus::Ongoing => {}
        }

        let mut player1_score = 0.0f64;
        let mut player0_score = 0.0f64;
        let mut p0_count = 0u32;
        let mut p1_count = 0u32;

        for r in 0..ROWS {
            for c in 0..COLS {
                let Some(piece) = board.piece_at(r, c) else { continue };
                match piece.owner {
                    Player::Player0 => p0_count += 1,
                    Player::Player1 => p1_count += 1,
                }
                let score = self.piece_term(board, piece, r, c);
                match piece.owner {
                    Player::Player1 => player1_score += score,
                    Player::Player0 => player0_score += score,
                }
            }
        }

        if p1_count == 0 && p0_count > 0 {
            return LOSE_SCORE;
        }
        if p0_count == 0 && p1_count > 0 {
            return WIN_SCORE;
        }

        (player1_score - player0_score) as i32
    }

    fn piece_term(&self, board: &Board, piece: Piece, r: usize, c: usize) -> f64 {
        let value = piece.value() as f64;
        let mut score = value * MATERIAL_W;

        let advance = if piece.owner == Player::Player1 { r as i32 } else { (ROWS as i32 - 1) - r as i32 };
        score += advance as f64 * ADVANCEMENT_W * (value / ADVANCEMENT_VALUE_SCALE_DIVISOR);

        if piece.piece_type != PieceType::Rat {
            if piece.owner == Player::Player1 && (r as i32) < DEFENSE_PENALTY_START_ROW_OFFSET {
                score += (r as i32 - DEFENSE_PENALTY_START_ROW_OFFSET) as f64
                    * DEFENSE_PENALTY_W
                    * (value / GENERAL_VALUE_SCALE_DIVISOR);
            }
            let back_row_threshold = (ROWS as i32 - 1) - DEFENSE_PENALTY_START_ROW_OFFSET;
            if piece.owner == Player::Player0 && (r as i32) > back_row_threshold {
                score += (((ROWS as i32 - 1) - r as i32) - DEFENSE_PENALTY_START_ROW_OFFSET) as f64
                    * DEFENSE_PENALTY_W
                    * (value / GENERAL_VALUE_SCALE_DIVISOR);
            }
        }

        if board.effective_rank(piece, r, c) == 0 && board.terrain_at(r, c) == Terrain::Trap {
            score += TRAPPED_PENALTY_W * (value / GENERAL_VALUE_SCALE_DIVISOR);
        }

        let on_key_square = match piece.owner {
            Player::Player0 => is_key_sq_p0(r, c),
            Player::Player1 => is_key_sq_p1(r, c),
        };
        if on_key_square {
            score += KEY_SQUARE_W * (value / GENERAL_VALUE_SCALE_DIVISOR);
        }

        let (den_r, den_c) = if piece.owner == Player::Player1 { PLAYER0_DEN } else { PLAYER1_DEN };
        let dist_to_den = (r as i32 - den_r as i32).abs() + (c as i32 - den_c as i32).abs();
        let past_midline = (piece.owner == Player::Player1 && r < ROWS / 2)
            || (piece.owner == Player::Player0 && r > ROWS / 2);
        let advance_factor = if past_midline { 0.1 } else { 1.0 };
        score += (DEN_PROXIMITY_MAX_DISTANCE - dist_to_den as f64).max(0.0)
            * DEN_PROXIMITY_W
            * (value / GENERAL_VALUE_SCALE_DIVISOR)
            * advance_factor;

        const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dr, dc) in ORTHOGONAL {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if !Board::in_bounds(nr, nc) {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if let Some(target) = board.piece_at(nr, nc) {
                if target.owner != piece.owner && can_capture(board, piece, target, r, c, nr, nc) {
                    score += target.value() as f64 * ATTACK_THREAT_W / GENERAL_VALUE_SCALE_DIVISOR;
                }
            }
        }

        score
    }
}
