//! Game aggregate: the current position plus everything that led to it.
//!
//! A `Game` is a value. `apply_move` borrows the receiver and hands back a
//! new `Game` with one more history entry, so an earlier `Game` can always be
//! kept around and replayed from.

use log::debug;

use crate::chess_errors::{ChessError, IllegalMoveError, MalformedInputError};
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::game_result::{detect_result, GameResult};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::parse_long_algebraic;

/// One step of history: the position a move was played from, and the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub position: Position,
    pub mv: Move,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    current: Position,
    history: Vec<PlayedMove>,
    rules: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Game {
    pub fn new(position: Position) -> Self {
        Self::with_rules(position, RulesConfig::default())
    }

    pub fn with_rules(position: Position, rules: RulesConfig) -> Self {
        Self {
            current: position,
            history: Vec::new(),
            rules,
        }
    }

    pub fn new_game() -> Self {
        Self::new(Position::new_game())
    }

    pub fn from_fen(fen: &str) -> Result<Self, MalformedInputError> {
        match Position::from_fen(fen) {
            Ok(position) => Ok(Self::new(position)),
            Err(err) => {
                debug!("rejected FEN {fen:?}: {err}");
                Err(err)
            }
        }
    }

    /// Plays `mv` if it is in the current legal-move list.
    ///
    /// A pawn move to the last rank must name its promotion piece; without
    /// one it never matches a legal move.
    pub fn apply_move(&self, mv: Move) -> Result<Game, IllegalMoveError> {
        let Some(generated) = LegalMoveGenerator
            .generate_legal_moves(&self.current)
            .into_iter()
            .find(|generated| generated.mv == mv)
        else {
            let fen = self.current.get_fen();
            debug!("rejected illegal move {mv} in {fen}");
            return Err(IllegalMoveError { mv, fen });
        };

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(PlayedMove {
            position: self.current,
            mv,
        });

        debug!("played {mv}, ply {}", history.len());

        Ok(Game {
            current: generated.position_after,
            history,
            rules: self.rules,
        })
    }

    pub fn apply_long_algebraic(&self, text: &str) -> Result<Game, ChessError> {
        let mv = parse_long_algebraic(text)?;
        Ok(self.apply_move(mv)?)
    }

    /// Plays a sequence of long algebraic moves from `start`.
    pub fn replay<I, S>(start: Position, moves: I) -> Result<Game, ChessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        moves
            .into_iter()
            .try_fold(Game::new(start), |game, text| {
                game.apply_long_algebraic(text.as_ref())
            })
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.current)
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.current, self.current.side_to_move)
    }

    pub fn result(&self) -> GameResult {
        detect_result(
            &self.current,
            self.history.iter().map(|played| &played.position),
            &self.rules,
        )
    }

    #[inline]
    pub fn current_position(&self) -> Position {
        self.current
    }

    /// Earlier positions with the moves played from them, oldest first.
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn moves_played(&self) -> Vec<Move> {
        self.history.iter().map(|played| played.mv).collect()
    }

    #[inline]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        self.current.get_fen()
    }
}
