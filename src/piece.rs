//! Piece types, side identifiers and the canonical rank/value table.

/// Which side a piece belongs to. The AI always plays `Player1` (see
/// `search::driver`); a generalised engine would thread the side through
/// instead of hard-coding it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    Player0 = 0,
    Player1 = 1,
}

impl Player {
    /// Get the opposite side.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Player0 => Player::Player1,
            Player::Player1 => Player::Player0,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The eight animal types, ordered by rank (Rat weakest, Elephant strongest
/// except for the Rat/Elephant exception in `movegen::can_capture`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    Rat = 0,
    Cat = 1,
    Dog = 2,
    Wolf = 3,
    Leopard = 4,
    Tiger = 5,
    Lion = 6,
    Elephant = 7,
}

/// Number of distinct piece types; also used as the empty-square sentinel
/// threshold when decoding the flat board vector.
pub const NUM_PIECE_TYPES: usize = 8;

impl PieceType {
    /// All eight piece types, in rank order.
    pub const ALL: [PieceType; NUM_PIECE_TYPES] = [
        PieceType::Rat,
        PieceType::Cat,
        PieceType::Dog,
        PieceType::Wolf,
        PieceType::Leopard,
        PieceType::Tiger,
        PieceType::Lion,
        PieceType::Elephant,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PieceType::Rat),
            1 => Some(PieceType::Cat),
            2 => Some(PieceType::Dog),
            3 => Some(PieceType::Wolf),
            4 => Some(PieceType::Leopard),
            5 => Some(PieceType::Tiger),
            6 => Some(PieceType::Lion),
            7 => Some(PieceType::Elephant),
            _ => None,
        }
    }

    #[inline]
    pub const fn rank(self) -> i32 {
        PIECE_INFO[self.index()].rank
    }

    #[inline]
    pub const fn value(self) -> i32 {
        PIECE_INFO[self.index()].value
    }
}

/// Static rank/value descriptor for a piece type. `rank` governs ordinary
/// capture eligibility; `value` feeds the evaluator and MVV-LVA ordering.
/// The Elephant's value sits below the Tiger/Lion on purpose: its
/// vulnerability to the Rat makes it less reliable material.
#[derive(Debug, Copy, Clone)]
pub struct PieceInfo {
    pub rank: i32,
    pub value: i32,
}

pub const PIECE_INFO: [PieceInfo; NUM_PIECE_TYPES] = [
    PieceInfo { rank: 1, value: 200 }, // Rat
    PieceInfo { rank: 2, value: 200 }, // Cat
    PieceInfo { rank: 3, value: 300 }, // Dog
    PieceInfo { rank: 4, value: 400 }, // Wolf
    PieceInfo { rank: 5, value: 500 }, // Leopard
    PieceInfo { rank: 6, value: 700 }, // Tiger
    PieceInfo { rank: 7, value: 800 }, // Lion
    PieceInfo { rank: 8, value: 650 }, // Elephant
];

/// A piece on the board: its type and owner. Rank/value are looked up from
/// `PIECE_INFO` rather than duplicated on the struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, owner: Player) -> Self {
        Self { piece_type, owner }
    }

    #[inline]
    pub const fn rank(self) -> i32 {
        self.piece_type.rank()
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.piece_type.value()
    }
}
