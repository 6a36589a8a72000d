//! Text rendering of boards and coloured console messages

use crate::game_of_life::Board;
use crate::simulation::Viewport;

/// Draws boards as text. Only ever reads cells.
pub struct BoardFormatter;

impl BoardFormatter {
    /// The whole board, one character per cell
    pub fn format_compact(board: &Board) -> String {
        let mut output = String::with_capacity(board.rows() * (board.columns() * 3 + 1));
        for y in 0..board.rows() as i64 {
            for x in 0..board.columns() as i64 {
                output.push(if board.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// The whole board with column and row numbers
    pub fn format_with_coords(board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..board.columns() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..board.rows() as i64 {
            output.push_str(&format!("{:2} ", y));
            for x in 0..board.columns() as i64 {
                output.push_str(if board.get(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// What a window described by `viewport` would show, one character per visible cell
    pub fn render_viewport(board: &Board, viewport: &Viewport) -> String {
        let mut output = String::new();
        for row in viewport.visible_rows() {
            for col in viewport.visible_columns() {
                let (x, y) = viewport.cell_at(col, row);
                output.push(if board.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// One-line summary used by the CLI
    pub fn format_status(board: &Board, generation: u64, running: bool) -> String {
        format!(
            "{} | generation {} | {} living cells on {}x{}",
            if running { "RUNNING" } else { "PAUSED" },
            generation,
            board.living_count(),
            board.columns(),
            board.rows()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;

    #[test]
    fn test_compact_formatting() {
        let board = Board::from_living_cells(2, 3, [(0, 0), (2, 1)]).unwrap();
        assert_eq!(BoardFormatter::format_compact(&board), "█··\n··█\n");
    }

    #[test]
    fn test_coords_formatting() {
        let board = Board::from_living_cells(3, 3, [(1, 1)]).unwrap();
        let with_coords = BoardFormatter::format_with_coords(&board);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_viewport_rendering_wraps() {
        let board = Board::from_living_cells(4, 4, [(0, 0), (3, 3)]).unwrap();
        let viewport = Viewport::new(&ViewConfig {
            width: 40,
            height: 20,
            cell_size: 10,
            min_cell_size: 5,
            max_cell_size: 50,
        });

        // View columns -1..=4 and rows -1..=2 show board cells wrapped around
        let rendered = BoardFormatter::render_viewport(&board, &viewport);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "█···█·");
        assert_eq!(lines[1], "·█···█");
        assert_eq!(lines[2], "······");
        assert_eq!(lines[3], "······");
    }

    #[test]
    fn test_status_line() {
        let board = Board::from_living_cells(2, 2, [(0, 0)]).unwrap();
        assert_eq!(
            BoardFormatter::format_status(&board, 7, false),
            "PAUSED | generation 7 | 1 living cells on 2x2"
        );
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
