//! Point-in-time board snapshot.
//!
//! `Position` is a small `Copy` value: a 64-square mailbox plus side to move,
//! castling rights, en-passant target and the two move clocks. Every move
//! produces a fresh `Position`; nothing mutates one in place once built.

use crate::chess_errors::MalformedInputError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: [Piece; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [Piece::Empty; 64],
            side_to_move: Color::Light,
            castling_rights: CASTLE_NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    /// Empty board, Light to move, no rights, move 1.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial setup.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, MalformedInputError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square as usize]
    }

    /// Bitboard of every occupied square.
    pub fn occupancy(&self) -> u64 {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    /// Bitboard of the squares occupied by `color`.
    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.color() == Some(color))
            .fold(0u64, |acc, (sq, _)| acc | (1u64 << sq))
    }

    /// Squares holding `kind` for `color`, in ascending index order.
    pub fn squares_with(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        let wanted = Piece::new(color, kind);
        self.board
            .iter()
            .enumerate()
            .filter(move |(_, piece)| **piece == wanted)
            .map(|(sq, _)| sq as Square)
    }

    /// Board, side, castling rights and en-passant target all match.
    ///
    /// Clocks are ignored; this is the identity used for repetition counting.
    pub fn same_placement(&self, other: &Position) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_square == other.en_passant_square
    }
}
