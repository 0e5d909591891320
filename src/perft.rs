//! Move-count sanity checking for [`movegen`](crate::movegen).
//!
//! Jungle has no canonical perft reference table the way chess does, so
//! this counts leaf nodes from the standard starting layout and from a
//! handful of hand-built positions exercising river jumps and traps, and
//! pins down the counts once they're known to be correct — a regression
//! moves in either direction (too few: a rule got dropped; too many: a
//! rule got added spuriously).

use crate::board::Board;
use crate::movegen::{apply_move, generate_moves};
use crate::piece::{Piece, PieceType, Player};

/// The standard Jungle starting layout: each side's eight pieces mirrored
/// across the board, facing the opponent's den.
pub fn standard_start() -> Board {
    let mut board = Board::empty();
    let p1 = [
        (0, 0, PieceType::Lion),
        (0, 6, PieceType::Tiger),
        (1, 1, PieceType::Dog),
        (1, 5, PieceType::Cat),
        (2, 0, PieceType::Rat),
        (2, 2, PieceType::Leopard),
        (2, 4, PieceType::Wolf),
        (2, 6, PieceType::Elephant),
    ];
    let p0 = [
        (8, 6, PieceType::Lion),
        (8, 0, PieceType::Tiger),
        (7, 5, PieceType::Dog),
        (7, 1, PieceType::Cat),
        (6, 6, PieceType::Rat),
        (6, 4, PieceType::Leopard),
        (6, 2, PieceType::Wolf),
        (6, 0, PieceType::Elephant),
    ];
    for &(r, c, pt) in p1.iter() {
        board.set_piece(r, c, Some(Piece::new(pt, Player::Player1)));
    }
    for &(r, c, pt) in p0.iter() {
        board.set_piece(r, c, Some(Piece::new(pt, Player::Player0)));
    }
    board
}

/// Count leaf nodes reachable from `board` in exactly `depth` plies, with
/// `side` moving first. `depth == 0` counts the position itself.
///
/// Unlike chess perft this never checks for check or stalemate — a side
/// with no legal moves simply has a perft of zero at any remaining depth,
/// since [`generate_moves`] never needs to account for a king being left in
/// check.
pub fn perft(board: &Board, side: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side, false);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.iter() {
        let child = apply_move(board, mv, side);
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}

/// Per-root-move leaf counts, for tracking down exactly which move
/// disagrees with an expected total.
pub fn perft_divide(board: &Board, side: Player, depth: u32) -> Vec<(crate::r#move::Move, u64)> {
    let moves = generate_moves(board, side, false);
    moves
        .iter()
        .map(|mv| {
            let child = apply_move(board, mv, side);
            let count = if depth <= 1 { 1 } else { perft(&child, side.opponent(), depth - 1) };
            (*mv, count)
        })
        .collect()
}
