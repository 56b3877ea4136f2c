//! Errors returned at the rules-engine boundary.
//!
//! Two failure kinds exist. `MalformedInputError` covers text that fails to
//! decode (FEN, squares, long algebraic moves). `IllegalMoveError` covers a
//! well-formed move that is not in the current legal-move list. Both are
//! ordinary recoverable values; nothing passed in is modified on failure.
//! `ChessError` wraps both for callers that can hit either, such as replaying
//! a list of text moves.

use thiserror::Error;

use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("FEN must have 6 fields separated by single spaces, found {0}")]
    FieldCount(usize),
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files instead of 8")]
    RankWidth { rank: u8, files: usize },
    #[error("invalid empty-square run '{0}' in board layout")]
    EmptyRun(char),
    #[error("invalid piece character '{0}' in board layout")]
    UnknownPiece(char),
    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),
    #[error("invalid castling rights field: {0}")]
    CastlingRights(String),
    #[error("invalid en-passant field: {0}")]
    EnPassant(String),
    #[error("invalid halfmove clock: {0}")]
    HalfmoveClock(String),
    #[error("invalid fullmove number: {0}")]
    FullmoveNumber(String),
    #[error("invalid algebraic square: {0}")]
    Square(String),
    #[error("square index out of bounds: {0}")]
    SquareIndex(u8),
    #[error("invalid long algebraic move: {0}")]
    MoveText(String),
}

impl MalformedInputError {
    pub fn kind(&self) -> &'static str {
        match self {
            MalformedInputError::FieldCount(_) => "field_count",
            MalformedInputError::RankCount(_) => "rank_count",
            MalformedInputError::RankWidth { .. } => "rank_width",
            MalformedInputError::EmptyRun(_) => "empty_run",
            MalformedInputError::UnknownPiece(_) => "unknown_piece",
            MalformedInputError::SideToMove(_) => "side_to_move",
            MalformedInputError::CastlingRights(_) => "castling_rights",
            MalformedInputError::EnPassant(_) => "en_passant",
            MalformedInputError::HalfmoveClock(_) => "halfmove_clock",
            MalformedInputError::FullmoveNumber(_) => "fullmove_number",
            MalformedInputError::Square(_) | MalformedInputError::SquareIndex(_) => "square",
            MalformedInputError::MoveText(_) => "move_text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal move {mv} in position {fen}")]
pub struct IllegalMoveError {
    pub mv: Move,
    pub fen: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}
