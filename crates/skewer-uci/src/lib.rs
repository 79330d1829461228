//! UCI protocol handling for skewer.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, GoParams, parse_command};
pub use engine::{DEFAULT_DEPTH, UciEngine};
pub use error::UciError;
