//! Move generation under the full Jungle ruleset: orthogonal steps, the
//! rank-based capture rule (with the Rat/Elephant and water exceptions),
//! and Lion/Tiger river jumps.

use crate::board::{is_river, Board, Terrain, COLS, ROWS};
use crate::movelist::MoveList;
use crate::piece::{Piece, PieceType, Player};
use crate::r#move::Move;

/// Own-trap-neutralised rank followed by the four rank-exception rules from
/// spec.md §4.1. `board` is needed because effective rank depends on which
/// trap (if any) the attacker is standing on.
pub fn can_capture(
    board: &Board,
    attacker: Piece,
    defender: Piece,
    att_r: usize,
    att_c: usize,
    def_r: usize,
    def_c: usize,
) -> bool {
    if attacker.owner == defender.owner {
        return false;
    }

    let attacker_in_water = board.terrain_at(att_r, att_c) == Terrain::Water;
    let defender_in_water = board.terrain_at(def_r, def_c) == Terrain::Water;

    if attacker_in_water && attacker.piece_type != PieceType::Rat {
        return false;
    }

    if attacker_in_water && !defender_in_water {
        // A Rat in water may only ever take an Elephant on land; every
        // other land target is out of reach.
        return attacker.piece_type == PieceType::Rat && defender.piece_type == PieceType::Elephant;
    }

    if attacker.piece_type == PieceType::Rat && defender.piece_type == PieceType::Elephant {
        // Already know attacker isn't in water here (handled above).
        return true;
    }
    if attacker.piece_type == PieceType::Elephant && defender.piece_type == PieceType::Rat {
        return false;
    }

    board.effective_rank(attacker, att_r, att_c) >= board.effective_rank(defender, def_r, def_c)
}

const ORTHOGONAL_DR: [i32; 4] = [-1, 1, 0, 0];
const ORTHOGONAL_DC: [i32; 4] = [0, 0, -1, 1];

fn own_den(player: Player) -> Terrain {
    match player {
        Player::Player0 => Terrain::Player0Den,
        Player::Player1 => Terrain::Player1Den,
    }
}

fn push_if_legal(
    board: &Board,
    moves: &mut MoveList,
    piece: Piece,
    r: usize,
    c: usize,
    nr: usize,
    nc: usize,
    captures_only: bool,
    allow_water: bool,
) {
    let target_terrain = board.terrain_at(nr, nc);
    let target_piece = board.piece_at(nr, nc);

    if target_terrain == own_den(piece.owner) {
        return;
    }
    if target_terrain == Terrain::Water && !allow_water {
        return;
    }

    let captured = match target_piece {
        Some(defender) => {
            if defender.owner == piece.owner {
                return;
            }
            if !can_capture(board, piece, defender, r, c, nr, nc) {
                return;
            }
            Some(defender.piece_type)
        }
        None => {
            if captures_only {
                return;
            }
            None
        }
    };

    moves.push(Move::new(r, c, nr, nc, piece.piece_type, captured));
}

fn generate_orthogonal(
    board: &Board,
    moves: &mut MoveList,
    piece: Piece,
    r: usize,
    c: usize,
    captures_only: bool,
) {
    let allow_water = piece.piece_type == PieceType::Rat;
    for i in 0..4 {
        let nr = r as i32 + ORTHOGONAL_DR[i];
        let nc = c as i32 + ORTHOGONAL_DC[i];
        if !Board::in_bounds(nr, nc) {
            continue;
        }
        push_if_legal(
            board,
            moves,
            piece,
            r,
            c,
            nr as usize,
            nc as usize,
            captures_only,
            allow_water,
        );
    }
}

/// One river-jump template: the landing square and the three river cells
/// that must be empty for the jump to be clear. Horizontal templates pad
/// the unused third cell with a sentinel that is always vacant river.
struct JumpTemplate {
    to: (usize, usize),
    path: [(usize, usize); 3],
}

/// All eight jump templates for a Lion/Tiger standing at `(r, c)`, mirroring
/// the reference implementation's jump-table construction verbatim
/// (including its quirk of blocking on *any* piece in the river, not just a
/// Rat — see spec.md §9, an open design question preserved for parity).
fn jump_templates(r: usize, c: usize) -> Vec<JumpTemplate> {
    let mut templates = Vec::with_capacity(2);

    // Vertical jumps across the river rows 2..6, at columns 1,2,4,5.
    if is_river(3, c) {
        if r == 2 {
            templates.push(JumpTemplate {
                to: (6, c),
                path: [(3, c), (4, c), (5, c)],
            });
        } else if r == 6 {
            templates.push(JumpTemplate {
                to: (2, c),
                path: [(5, c), (4, c), (3, c)],
            });
        }
    }

    // Horizontal jumps (Lion only — callers only invoke this for Lion/Tiger
    // and must gate horizontal templates to the Lion themselves since this
    // helper has no piece-type context).
    if is_river(r, 1) && is_river(r, 2) {
        if c == 0 {
            templates.push(JumpTemplate {
                to: (r, 3),
                path: [(r, 1), (r, 2), (r, 2)],
            });
        } else if c == 3 {
            templates.push(JumpTemplate {
                to: (r, 0),
                path: [(r, 2), (r, 1), (r, 1)],
            });
        }
    }
    if is_river(r, 4) && is_river(r, 5) {
        if c == 3 {
            templates.push(JumpTemplate {
                to: (r, 6),
                path: [(r, 4), (r, 5), (r, 5)],
            });
        } else if c == 6 {
            templates.push(JumpTemplate {
                to: (r, 3),
                path: [(r, 5), (r, 4), (r, 4)],
            });
        }
    }

    templates
}

fn generate_jumps(
    board: &Board,
    moves: &mut MoveList,
    piece: Piece,
    r: usize,
    c: usize,
    captures_only: bool,
) {
    let is_lion = piece.piece_type == PieceType::Lion;
    let is_tiger = piece.piece_type == PieceType::Tiger;
    if !is_lion && !is_tiger {
        return;
    }

    for tpl in jump_templates(r, c) {
        // Horizontal jumps belong to the Lion only (spec.md §4.1).
        let vertical = tpl.to.1 == c;
        if !vertical && !is_lion {
            continue;
        }

        let blocked = tpl.path.iter().any(|&(pr, pc)| {
            !is_river(pr, pc) || board.piece_at(pr, pc).is_some()
        });
        if blocked {
            continue;
        }

        let (nr, nc) = tpl.to;
        // Landing rules match orthogonal steps exactly; landing on water is
        // never allowed for a jump.
        push_if_legal(board, moves, piece, r, c, nr, nc, captures_only, false);
    }
}

/// All legal moves for `side` in row-major board order. When
/// `captures_only` is set, only moves landing on an enemy piece are
/// emitted (used by quiescence search).
pub fn generate_moves(board: &Board, side: Player, captures_only: bool) -> MoveList {
    let mut moves = MoveList::new();
    for r in 0..ROWS {
        for c in 0..COLS {
            if let Some(piece) = board.piece_at(r, c) {
                if piece.owner != side {
                    continue;
                }
                generate_orthogonal(board, &mut moves, piece, r, c, captures_only);
                generate_jumps(board, &mut moves, piece, r, c, captures_only);
            }
        }
    }
    moves
}

/// Apply `mv` to a fresh copy of `board`, returning the resulting position.
/// Search simulates moves this way rather than make/unmake (spec.md §5:
/// board snapshots are stack-owned, copy-on-recurse).
pub fn apply_move(board: &Board, mv: &Move, mover: Player) -> Board {
    let mut next = board.clone();
    next.set_piece(mv.to_row, mv.to_col, Some(Piece::new(mv.piece_type, mover)));
    next.set_piece(mv.from_row, mv.from_col, None);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn board_with(pieces: &[(usize, usize, PieceType, Player)]) -> Board {
        let mut board = Board::empty();
        for &(r, c, pt, owner) in pieces {
            board.set_piece(r, c, Some(Piece::new(pt, owner)));
        }
        board
    }

    #[test]
    fn rat_cannot_attack_non_elephant_from_water() {
        // Scenario 6: P1 Rat at (3,1) water, P0 Cat at (3,0) land.
        let board = board_with(&[
            (3, 1, PieceType::Rat, Player::Player1),
            (3, 0, PieceType::Cat, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves
            .iter()
            .any(|m| m.from_row == 3 && m.from_col == 1 && m.to_row == 3 && m.to_col == 0));
    }

    #[test]
    fn rat_in_water_can_attack_elephant_on_land() {
        let board = board_with(&[
            (3, 1, PieceType::Rat, Player::Player1),
            (3, 0, PieceType::Elephant, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(moves
            .iter()
            .any(|m| m.from_row == 3 && m.from_col == 1 && m.to_row == 3 && m.to_col == 0));
    }

    #[test]
    fn rat_on_land_captures_elephant() {
        // Scenario 5.
        let board = board_with(&[
            (4, 4, PieceType::Rat, Player::Player1),
            (4, 5, PieceType::Elephant, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(moves.iter().any(|m| m.to_row == 4
            && m.to_col == 5
            && m.captured == Some(PieceType::Elephant)));
    }

    #[test]
    fn elephant_cannot_capture_rat() {
        let board = board_with(&[
            (4, 3, PieceType::Elephant, Player::Player1),
            (5, 3, PieceType::Rat, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves
            .iter()
            .any(|m| m.to_row == 5 && m.to_col == 3 && m.captured == Some(PieceType::Rat)));
    }

    #[test]
    fn lion_jumps_river_and_captures() {
        // Scenario 2.
        let board = board_with(&[
            (2, 1, PieceType::Lion, Player::Player1),
            (6, 1, PieceType::Dog, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(moves.iter().any(|m| m.from_row == 2
            && m.from_col == 1
            && m.to_row == 6
            && m.to_col == 1
            && m.captured == Some(PieceType::Dog)));
    }

    #[test]
    fn lion_jump_blocked_by_piece_in_river() {
        // Scenario 3: a piece anywhere in the river path blocks the jump,
        // including a Rat — the reference implementation's quirk.
        let board = board_with(&[
            (2, 1, PieceType::Lion, Player::Player1),
            (4, 1, PieceType::Rat, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves
            .iter()
            .any(|m| m.from_row == 2 && m.from_col == 1 && m.to_row == 6 && m.to_col == 1));
        // Only orthogonal moves remain for the Lion.
        assert!(moves.iter().any(|m| m.from_row == 2 && m.from_col == 1));
    }

    #[test]
    fn tiger_has_no_horizontal_jump() {
        let board = board_with(&[(4, 0, PieceType::Tiger, Player::Player1)]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves
            .iter()
            .any(|m| m.from_row == 4 && m.from_col == 0 && m.to_row == 4 && m.to_col == 3));
    }

    #[test]
    fn lion_has_horizontal_jump() {
        let board = board_with(&[(4, 0, PieceType::Lion, Player::Player1)]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(moves
            .iter()
            .any(|m| m.from_row == 4 && m.from_col == 0 && m.to_row == 4 && m.to_col == 3));
    }

    #[test]
    fn captures_only_mode_emits_only_captures() {
        let board = board_with(&[
            (4, 3, PieceType::Dog, Player::Player1),
            (5, 3, PieceType::Cat, Player::Player0),
        ]);
        let moves = generate_moves(&board, Player::Player1, true);
        assert!(moves.iter().all(|m| m.is_capture()));
        assert!(!moves.is_empty());
    }

    #[test]
    fn cannot_step_onto_own_den() {
        let board = board_with(&[(1, 3, PieceType::Cat, Player::Player1)]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves
            .iter()
            .any(|m| m.to_row == 0 && m.to_col == 3));
    }

    #[test]
    fn only_rat_may_enter_water() {
        let board = board_with(&[(2, 1, PieceType::Cat, Player::Player1)]);
        let moves = generate_moves(&board, Player::Player1, false);
        assert!(!moves.iter().any(|m| m.to_row == 3 && m.to_col == 1));
    }
}
