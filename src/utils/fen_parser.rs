//! FEN-to-Position parser.
//!
//! Builds a `Position` from a Forsyth-Edwards Notation string. Only the
//! canonical spelling `generate_fen` produces is accepted, so every string
//! that parses re-encodes to exactly the same bytes.

use crate::chess_errors::MalformedInputError;
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, MalformedInputError> {
    let parts: Vec<&str> = fen.split(' ').collect();
    if parts.len() != 6 || parts.iter().any(|part| part.is_empty()) {
        return Err(MalformedInputError::FieldCount(fen.split_whitespace().count()));
    }

    let mut position = Position::new_empty();

    parse_board(parts[0], &mut position)?;
    position.side_to_move = parse_side_to_move(parts[1])?;
    position.castling_rights = parse_castling_rights(parts[2])?;
    position.en_passant_square = parse_en_passant_square(parts[3])?;
    position.halfmove_clock = parse_counter(parts[4])
        .ok_or_else(|| MalformedInputError::HalfmoveClock(parts[4].to_owned()))?;
    position.fullmove_number = parse_counter(parts[5])
        .filter(|&n| n >= 1)
        .ok_or_else(|| MalformedInputError::FullmoveNumber(parts[5].to_owned()))?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), MalformedInputError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(MalformedInputError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0usize;
        let mut previous_was_digit = false;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                // "44" would re-encode as "8".
                if !(1..=8).contains(&empty_count) || previous_was_digit {
                    return Err(MalformedInputError::EmptyRun(ch));
                }
                file += empty_count as usize;
                previous_was_digit = true;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(MalformedInputError::UnknownPiece(ch))?;
            if file >= 8 {
                return Err(MalformedInputError::RankWidth {
                    rank: board_rank + 1,
                    files: file + 1,
                });
            }

            position.board[square_at(file as u8, board_rank) as usize] = piece;
            file += 1;
            previous_was_digit = false;
        }

        if file != 8 {
            return Err(MalformedInputError::RankWidth {
                rank: board_rank + 1,
                files: file,
            });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, MalformedInputError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(MalformedInputError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, MalformedInputError> {
    if castling_part == "-" {
        return Ok(CASTLE_NONE);
    }

    let mut rights: CastlingRights = CASTLE_NONE;
    let mut highest_seen: CastlingRights = 0;

    for ch in castling_part.chars() {
        let bit = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(MalformedInputError::CastlingRights(castling_part.to_owned())),
        };

        // Letters must appear once each, in KQkq order.
        if bit <= highest_seen {
            return Err(MalformedInputError::CastlingRights(castling_part.to_owned()));
        }
        highest_seen = bit;
        rights |= bit;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, MalformedInputError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| MalformedInputError::EnPassant(en_passant_part.to_owned()))
}

/// Plain decimal without sign or leading zeros.
fn parse_counter(text: &str) -> Option<u16> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::MalformedInputError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.castling_rights, CASTLE_ALL);
        assert_eq!(position.en_passant_square, None);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.piece_at(3), Piece::LightQueen);
        assert_eq!(position.piece_at(59), Piece::DarkQueen);
        assert_eq!(position.piece_at(28), Piece::Empty);
    }

    #[test]
    fn parse_reads_en_passant_and_clocks() {
        let position = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("FEN should parse");
        assert_eq!(position.en_passant_square, Some(44));
        assert_eq!(position.fullmove_number, 2);
    }

    #[test]
    fn malformed_fens_are_rejected_with_typed_errors() {
        let cases: &[(&str, &str)] = &[
            ("", "field_count"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0", "field_count"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 x", "field_count"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR  w KQkq - 0 1", "field_count"),
            ("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "rank_count"),
            ("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "rank_width"),
            ("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "rank_width"),
            ("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "empty_run"),
            ("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "empty_run"),
            ("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "unknown_piece"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", "side_to_move"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1", "castling_rights"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QK - 0 1", "castling_rights"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KK - 0 1", "castling_rights"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1", "en_passant"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e 0 1", "en_passant"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1", "halfmove_clock"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - +1 1", "halfmove_clock"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 01 1", "halfmove_clock"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1", "halfmove_clock"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0", "fullmove_number"),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one", "fullmove_number"),
        ];

        for (fen, expected_kind) in cases {
            let err = parse_fen(fen).expect_err("malformed FEN should be rejected");
            assert_eq!(err.kind(), *expected_kind, "wrong error kind for {fen:?}: {err}");
        }
    }

    #[test]
    fn field_count_error_reports_found_fields() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w -"),
            Err(MalformedInputError::FieldCount(3))
        );
    }
}
