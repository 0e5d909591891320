//! Flat-vector board transport.
//!
//! The engine is consulted by an external driver that owns board
//! serialisation; it hands in a flat integer vector and reads a flat
//! result vector back (spec.md §6). This module is the only place those
//! formats are interpreted.

use crate::board::{Board, Terrain, COLS, ROWS};
use crate::piece::{Piece, PieceType, Player, NUM_PIECE_TYPES};
use thiserror::Error;

/// `2 (rows, cols header) + rows * cols * 3 (terrain, piece_type, owner)`.
pub const FLAT_BOARD_LEN: usize = 2 + ROWS * COLS * 3;

/// Sentinel `piece_type` value (and anything `>= NUM_PIECE_TYPES`) marking
/// an empty square.
pub const NO_PIECE: i32 = NUM_PIECE_TYPES as i32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("flat board vector has length {actual}, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("flat board header declares {rows}x{cols}, expected {ROWS}x{COLS}")]
    WrongDimensions { rows: i32, cols: i32 },
    #[error("square ({row}, {col}) has out-of-range terrain code {code}")]
    InvalidTerrain { row: usize, col: usize, code: i32 },
    #[error("square ({row}, {col}) has out-of-range owner code {code}")]
    InvalidOwner { row: usize, col: usize, code: i32 },
}

fn terrain_from_code(row: usize, col: usize, code: i32) -> Result<Terrain, BoardError> {
    match code {
        0 => Ok(Terrain::Land),
        1 => Ok(Terrain::Water),
        2 => Ok(Terrain::Trap),
        3 => Ok(Terrain::Player0Den),
        4 => Ok(Terrain::Player1Den),
        _ => Err(BoardError::InvalidTerrain { row, col, code }),
    }
}

fn owner_from_code(row: usize, col: usize, code: i32) -> Result<Option<Player>, BoardError> {
    match code {
        -1 => Ok(None),
        0 => Ok(Some(Player::Player0)),
        1 => Ok(Some(Player::Player1)),
        _ => Err(BoardError::InvalidOwner { row, col, code }),
    }
}

/// Parse the flat board vector into a [`Board`].
///
/// Trusts the caller for piece placement legality (at most 16 pieces, one
/// piece per side-type) — only the wire format itself is validated.
pub fn board_from_flat(flat: &[i32]) -> Result<Board, BoardError> {
    if flat.len() != FLAT_BOARD_LEN {
        return Err(BoardError::WrongLength { expected: FLAT_BOARD_LEN, actual: flat.len() });
    }
    let (rows, cols) = (flat[0], flat[1]);
    if rows != ROWS as i32 || cols != COLS as i32 {
        return Err(BoardError::WrongDimensions { rows, cols });
    }

    let mut board = Board::empty();
    let mut idx = 2;
    for r in 0..ROWS {
        for c in 0..COLS {
            let terrain_code = flat[idx];
            let piece_type_code = flat[idx + 1];
            let owner_code = flat[idx + 2];
            idx += 3;

            board.set_terrain(r, c, terrain_from_code(r, c, terrain_code)?);

            let owner = owner_from_code(r, c, owner_code)?;
            let piece = match (owner, piece_type_code) {
                (Some(owner), code) if (0..NUM_PIECE_TYPES as i32).contains(&code) => {
                    PieceType::from_index(code as usize).map(|pt| Piece::new(pt, owner))
                }
                _ => None,
            };
            board.set_piece(r, c, piece);
        }
    }
    Ok(board)
}

/// Write a flat result vector per spec.md §6's ten-index layout. Indices
/// not covered by a found move (no legal move, generator empty) default to
/// zero except `status`.
#[allow(clippy::too_many_arguments)]
pub fn write_result(
    out: &mut [i32],
    found: bool,
    from: Option<(usize, usize)>,
    to: Option<(usize, usize)>,
    moving_type: Option<PieceType>,
    depth_reached: u32,
    nodes: u64,
    score: i32,
    status: i32,
) {
    debug_assert!(out.len() >= 10, "result buffer must hold at least 10 ints");
    out[0] = if found { 1 } else { 0 };
    let (from_r, from_c) = from.unwrap_or((0, 0));
    let (to_r, to_c) = to.unwrap_or((0, 0));
    out[1] = from_r as i32;
    out[2] = from_c as i32;
    out[3] = to_r as i32;
    out[4] = to_c as i32;
    out[5] = moving_type.map(|pt| pt.index() as i32).unwrap_or(NO_PIECE);
    out[6] = depth_reached as i32;
    out[7] = nodes as i32;
    out[8] = score;
    out[9] = status;
}
