//! FEN parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, text) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut length = 0usize;
        for c in text.chars() {
            match c {
                '1'..='8' => length += c as usize - '0' as usize,
                _ => {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    if length >= 8 {
                        return Err(FenError::BadRankLength { rank_index, length: length + 1 });
                    }
                    board.put(Square::from_coords(length as u8, rank), piece);
                    length += 1;
                }
            }
        }
        if length != 8 {
            return Err(FenError::BadRankLength { rank_index, length });
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: Option<&str>, default: u16) -> Result<u16, FenError> {
    match text {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidMoveCounter {
            field,
            found: text.to_string(),
        }),
    }
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string. The two move counters are optional and default to `0 1`.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, fields[0])?;

        board.set_side_to_move(match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidColor { found: other.to_string() }),
        });

        board.set_castling(CastleRights::from_fen(fields[2])?);

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(
                Square::from_algebraic(text)
                    .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                    .ok_or_else(|| FenError::InvalidEnPassant { found: text.to_string() })?,
            ),
        };
        board.set_en_passant(en_passant);

        board.set_halfmove_clock(parse_counter("halfmove clock", fields.get(4).copied(), 0)?);
        board.set_fullmove_number(parse_counter("fullmove number", fields.get(5).copied(), 1)?);

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Serialize as a six-field FEN string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match self.piece_on(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => write!(f, "-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn starting_fen_matches_starting_position() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn display_round_trips() {
        for fen in [
            STARTING_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let board: Board = fen.parse().unwrap();
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn counters_are_optional() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 b - -".parse().unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            "8/8/8/8/8/8/8/8 w".parse::<Board>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            "8/8/8/8/8/8/8 w - - 0 1".parse::<Board>(),
            Err(FenError::WrongRankCount { found: 7 })
        );
    }

    #[test]
    fn bad_rank_length() {
        assert_eq!(
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>(),
            Err(FenError::BadRankLength { rank_index: 1, length: 9 })
        );
        assert_eq!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>(),
            Err(FenError::BadRankLength { rank_index: 1, length: 7 })
        );
    }

    #[test]
    fn invalid_fields() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'X' })
        );
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1".parse::<Board>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1".parse::<Board>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - - x 1".parse::<Board>(),
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn side_not_to_move_in_check_is_rejected() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/4RK2 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidBoard { source: BoardError::OpponentInCheck })
        );
    }
}
