//! Toroidal Game of Life
//!
//! A fixed-size Game of Life board whose edges wrap around, with generation
//! advance, panning, and a sparse text save format, plus a headless session
//! shell that owns the current generation.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Board, BoardError, LifeRules};
pub use simulation::{Command, Outcome, Session};

use anyhow::Result;

/// Load the board named by `path`, or create an empty one of the configured default size
pub fn open_board(path: Option<&std::path::Path>, settings: &Settings) -> Result<Board> {
    let board = match path {
        Some(path) => game_of_life::load_board_from_file(path, &settings.board)?,
        None => Board::new(settings.board.default_rows, settings.board.default_columns)?,
    };
    Ok(board)
}
