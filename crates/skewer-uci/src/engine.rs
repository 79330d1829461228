//! Synchronous UCI engine loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use skewer_core::{Board, Move, Position};
use skewer_engine::SearchState;

use crate::command::{Command, GoParams, parse_command};
use crate::error::UciError;

/// Depth searched by a bare `go`.
pub const DEFAULT_DEPTH: u32 = 6;

const ENGINE_NAME: &str = "skewer";
const ENGINE_AUTHOR: &str = "the skewer developers";

/// The UCI engine: the current board and the reusable search state.
///
/// Commands are handled one at a time on the calling thread; `go` blocks
/// until the search finishes.
pub struct UciEngine {
    board: Board,
    search: SearchState,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            search: SearchState::new(),
        }
    }

    /// The position the next `go` will search.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the UCI loop on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over arbitrary input and output streams.
    ///
    /// Malformed commands are logged and skipped; only I/O failures end the loop early.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(err) => warn!(error = %err, cmd = %trimmed, "ignoring command"),
            }
            output.flush()?;
        }
        info!("UCI loop finished");
        Ok(())
    }

    /// Execute one command, writing any reply to `output`.
    pub fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => {
                writeln!(output, "id name {ENGINE_NAME}")?;
                writeln!(output, "id author {ENGINE_AUTHOR}")?;
                writeln!(output, "uciok")?;
            }
            Command::IsReady => writeln!(output, "readyok")?,
            Command::UciNewGame => {
                self.board = Board::starting_position();
                self.search.reset_info();
            }
            Command::Position(board) => {
                debug!(fen = %board, "position set");
                self.board = board;
            }
            Command::Go(params) => self.go(params, output)?,
            Command::Quit => {}
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(cmd = %name, "unknown command ignored");
                }
            }
        }
        Ok(())
    }

    fn go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), UciError> {
        let depth = params.depth.unwrap_or(DEFAULT_DEPTH);
        let mut position = Position::new(self.board);
        let result = self.search.position(&mut position, depth);

        writeln!(output, "info {result}")?;
        writeln!(output, "bestmove {}", result.best_move.unwrap_or(Move::NULL))?;
        Ok(())
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}
