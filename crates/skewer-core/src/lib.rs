//! Core chess types: board representation, pseudo-legal move generation, and copy-make.

mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
pub use bitboard::Bitboard;
pub use board::Board;
pub use castle_rights::CastleRights;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use movegen::{MoveList, generate_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{MoveGuard, MoveMode, Position};
pub use square::Square;
