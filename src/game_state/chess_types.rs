//! Primitive chess value types shared by every subsystem.
//!
//! Squares are plain `u8` indices (`0 == a1`, `7 == h1`, `63 == h8`), pieces
//! are a closed thirteen-value tag, and castling rights are a 4-bit mask.

pub use crate::game_state::position::Position;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank index pawns of this color start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Rank index pawns of this color promote on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Inverse of [`PieceKind::to_char`]; accepts either case.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Content of a single board square.
///
/// Kept as one closed tag so every consumer matches all thirteen cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty,
    LightPawn,
    LightKnight,
    LightBishop,
    LightRook,
    LightQueen,
    LightKing,
    DarkPawn,
    DarkKnight,
    DarkBishop,
    DarkRook,
    DarkQueen,
    DarkKing,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::Light, PieceKind::Pawn) => Piece::LightPawn,
            (Color::Light, PieceKind::Knight) => Piece::LightKnight,
            (Color::Light, PieceKind::Bishop) => Piece::LightBishop,
            (Color::Light, PieceKind::Rook) => Piece::LightRook,
            (Color::Light, PieceKind::Queen) => Piece::LightQueen,
            (Color::Light, PieceKind::King) => Piece::LightKing,
            (Color::Dark, PieceKind::Pawn) => Piece::DarkPawn,
            (Color::Dark, PieceKind::Knight) => Piece::DarkKnight,
            (Color::Dark, PieceKind::Bishop) => Piece::DarkBishop,
            (Color::Dark, PieceKind::Rook) => Piece::DarkRook,
            (Color::Dark, PieceKind::Queen) => Piece::DarkQueen,
            (Color::Dark, PieceKind::King) => Piece::DarkKing,
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::LightPawn
            | Piece::LightKnight
            | Piece::LightBishop
            | Piece::LightRook
            | Piece::LightQueen
            | Piece::LightKing => Some(Color::Light),
            Piece::DarkPawn
            | Piece::DarkKnight
            | Piece::DarkBishop
            | Piece::DarkRook
            | Piece::DarkQueen
            | Piece::DarkKing => Some(Color::Dark),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::LightPawn | Piece::DarkPawn => Some(PieceKind::Pawn),
            Piece::LightKnight | Piece::DarkKnight => Some(PieceKind::Knight),
            Piece::LightBishop | Piece::DarkBishop => Some(PieceKind::Bishop),
            Piece::LightRook | Piece::DarkRook => Some(PieceKind::Rook),
            Piece::LightQueen | Piece::DarkQueen => Some(PieceKind::Queen),
            Piece::LightKing | Piece::DarkKing => Some(PieceKind::King),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// FEN letter: uppercase for Light, lowercase for Dark.
    pub const fn to_fen_char(self) -> Option<char> {
        match (self.color(), self.kind()) {
            (Some(Color::Light), Some(kind)) => Some(kind.to_char().to_ascii_uppercase()),
            (Some(Color::Dark), Some(kind)) => Some(kind.to_char()),
            _ => None,
        }
    }

    pub const fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        match PieceKind::from_char(ch) {
            Some(kind) => Some(Piece::new(color, kind)),
            None => None,
        }
    }
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_NONE: CastlingRights = 0;
pub const CASTLE_ALL: CastlingRights = 0b1111;
