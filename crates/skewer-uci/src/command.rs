//! UCI command parsing.

use skewer_core::Board;

use crate::error::UciError;

/// Parameters for the `go` command. A bare `go` searches to the default depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth only.
    pub depth: Option<u32>,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- the board after any trailing moves.
    Position(Board),
    /// `go` -- run a search.
    Go(GoParams),
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args).map(Command::Position),
        "go" => parse_go(args).map(Command::Go),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse `startpos [moves ...]` or `fen <fields> [moves ...]`.
fn parse_position(tokens: &[&str]) -> Result<Board, UciError> {
    let moves_at = tokens.iter().position(|&t| t == "moves").unwrap_or(tokens.len());
    let (setup, moves) = tokens.split_at(moves_at);

    let mut board = match setup {
        ["startpos"] => Board::starting_position(),
        ["fen", fields @ ..] => {
            let fen = fields.join(" ");
            fen.parse::<Board>()
                .map_err(|source| UciError::InvalidFen { fen: fen.clone(), source })?
        }
        _ => return Err(UciError::MalformedPosition),
    };

    for &uci_move in moves.iter().skip(1) {
        board = board
            .find_move(uci_move)
            .and_then(|mv| board.with_move(mv))
            .ok_or_else(|| UciError::InvalidMove { uci_move: uci_move.to_string() })?;
    }

    Ok(board)
}

/// Parse `go` arguments. Only `depth` is understood; other tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<GoParams, UciError> {
    let mut params = GoParams::default();
    let mut iter = tokens.iter();
    while let Some(&token) = iter.next() {
        if token == "depth" {
            let value = iter.next().ok_or(UciError::MissingDepth)?;
            let depth = value
                .parse::<u32>()
                .ok()
                .filter(|&d| d > 0)
                .ok_or_else(|| UciError::InvalidDepth { value: value.to_string() })?;
            params.depth = Some(depth);
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use skewer_core::{Color, Piece, Square};

    use super::*;

    #[test]
    fn parse_uci() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
    }

    #[test]
    fn parse_isready() {
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
    }

    #[test]
    fn parse_quit() {
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_ucinewgame() {
        assert!(matches!(
            parse_command("ucinewgame").unwrap(),
            Command::UciNewGame
        ));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(board) => assert_eq!(board, Board::starting_position()),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5 g1f3").unwrap() {
            Command::Position(board) => {
                assert_eq!(board.side_to_move(), Color::Black);
                assert_eq!(board.piece_on(Square::F3), Some(Piece::WHITE_KNIGHT));
                assert_eq!(board.piece_on(Square::E5), Some(Piece::BLACK_PAWN));
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        match parse_command(&format!("position fen {fen}")).unwrap() {
            Command::Position(board) => assert_eq!(board.to_string(), fen),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let cmd = parse_command(
            "position fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1 moves e1g1 e8c8",
        )
        .unwrap();
        match cmd {
            Command::Position(board) => {
                assert_eq!(board.piece_on(Square::G1), Some(Piece::WHITE_KING));
                assert_eq!(board.piece_on(Square::D8), Some(Piece::BLACK_ROOK));
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_short_fen() {
        let cmd = parse_command("position fen 4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert!(matches!(cmd, Command::Position(_)));
    }

    #[test]
    fn parse_position_missing_keyword() {
        assert!(matches!(
            parse_command("position"),
            Err(UciError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position e2e4"),
            Err(UciError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_position_invalid_fen() {
        let err = parse_command("position fen not/a/fen w - - 0 1").unwrap_err();
        assert!(matches!(err, UciError::InvalidFen { .. }));
        assert!(err.to_string().starts_with("invalid FEN \"not/a/fen w - - 0 1\""));
    }

    #[test]
    fn parse_position_illegal_move() {
        match parse_command("position startpos moves e2e4 e2e4") {
            Err(UciError::InvalidMove { uci_move }) => assert_eq!(uci_move, "e2e4"),
            other => panic!("expected InvalidMove, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_depth() {
        match parse_command("go depth 6").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(6)),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_bare_defaults() {
        match parse_command("go").unwrap() {
            Command::Go(params) => assert_eq!(params, GoParams::default()),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_skips_unknown_tokens() {
        match parse_command("go wtime 1000 btime 1000 depth 3").unwrap() {
            Command::Go(params) => assert_eq!(params.depth, Some(3)),
            other => panic!("expected Go, got {other:?}"),
        }
    }

    #[test]
    fn parse_go_bad_depth() {
        assert!(matches!(
            parse_command("go depth abc"),
            Err(UciError::InvalidDepth { .. })
        ));
        assert!(matches!(
            parse_command("go depth 0"),
            Err(UciError::InvalidDepth { .. })
        ));
        assert!(matches!(parse_command("go depth"), Err(UciError::MissingDepth)));
    }

    #[test]
    fn parse_unknown_command() {
        match parse_command("setoption name Hash value 64").unwrap() {
            Command::Unknown(name) => assert_eq!(name, "setoption"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_line() {
        assert!(matches!(parse_command("   ").unwrap(), Command::Unknown(_)));
    }
}
