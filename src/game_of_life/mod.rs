//! Game of Life core functionality

pub mod board;
pub mod error;
pub mod io;
pub mod rules;

pub use board::Board;
pub use error::BoardError;
pub use io::{
    load_board_from_file, load_saved_board_from_file, parse_board_from_str, parse_saved_board, save_board,
    save_board_to_file, SavedBoard,
};
pub use rules::LifeRules;
