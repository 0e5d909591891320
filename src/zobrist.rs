//! Zobrist hashing: XOR-combination of per-(piece type, owner, square) keys
//! plus a side-to-move key, with incremental updates on move application.

use crate::board::{Board, COLS, ROWS};
use crate::piece::{Piece, PieceType, Player, NUM_PIECE_TYPES};
use once_cell::sync::Lazy;

/// Linear-congruential generator with the exact constants spec.md §4.3
/// calls for, so hashes are reproducible across runs and match the
/// reference implementation bit-for-bit.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }
}

/// Per-(piece type, owner, row, col) keys plus the side-to-move key.
pub struct ZobristKeys {
    pieces: [[[[u64; COLS]; ROWS]; 2]; NUM_PIECE_TYPES],
    pub player1_to_move: u64,
}

fn generate_keys() -> ZobristKeys {
    let mut lcg = Lcg(1_234_567_890_123_456_789);
    let mut pieces = [[[[0u64; COLS]; ROWS]; 2]; NUM_PIECE_TYPES];
    for pt in pieces.iter_mut() {
        for owner in pt.iter_mut() {
            for row in owner.iter_mut() {
                for key in row.iter_mut() {
                    *key = lcg.next();
                }
            }
        }
    }
    let player1_to_move = lcg.next();
    ZobristKeys { pieces, player1_to_move }
}

/// Global Zobrist keys, lazily initialised on first use (spec.md §7: "If
/// Zobrist keys were never initialised, the full-hash compute initialises
/// them lazily").
pub static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(generate_keys);

#[inline]
fn piece_key(piece_type: PieceType, owner: Player, r: usize, c: usize) -> u64 {
    ZOBRIST.pieces[piece_type.index()][owner.index()][r][c]
}

/// Full recompute of a position's hash: XOR every occupied square's key,
/// plus the side-to-move key iff `side_to_move` is Player1.
pub fn compute_full(board: &Board, side_to_move: Player) -> u64 {
    let mut hash = 0u64;
    for (r, c, piece) in board.pieces() {
        hash ^= piece_key(piece.piece_type, piece.owner, r, c);
    }
    if side_to_move == Player::Player1 {
        hash ^= ZOBRIST.player1_to_move;
    }
    hash
}

/// Incremental update for applying a move: XOR out the moving piece at its
/// origin, XOR out a captured piece at the destination (typed as the
/// opponent of `mover`), XOR in the moving piece at its destination, and
/// flip the side-to-move key.
pub fn update_hash(
    hash: u64,
    mover: Player,
    moving_type: PieceType,
    captured_type: Option<PieceType>,
    from: (usize, usize),
    to: (usize, usize),
) -> u64 {
    let mut h = hash;
    h ^= piece_key(moving_type, mover, from.0, from.1);
    if let Some(captured) = captured_type {
        h ^= piece_key(captured, mover.opponent(), to.0, to.1);
    }
    h ^= piece_key(moving_type, mover, to.0, to.1);
    h ^= ZOBRIST.player1_to_move;
    h
}

/// Flip only the side-to-move key, for null-move pruning.
#[inline]
pub fn flip_side_to_move(hash: u64) -> u64 {
    hash ^ ZOBRIST.player1_to_move
}
