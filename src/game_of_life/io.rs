//! Saving and loading boards as sparse lists of living cells
//!
//! Two layouts are understood. The plain layout:
//!
//! ```text
//! <columns>x<rows>
//! <x>,<y>
//! ```
//!
//! and the verbose layout:
//!
//! ```text
//! cgol-version: 1
//! columns: <columns>
//! rows: <rows>
//! (<x>, <y>)
//! ```
//!
//! Only living cells are listed. Saving writes whichever layout is requested;
//! loading accepts either and reports which one it found.

use super::{Board, BoardError};
use crate::config::{BoardConfig, PersistenceConfig, SaveFormat};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const VERBOSE_FORMAT_VERSION: u32 = 1;

/// Serialize a board into the given writer
pub fn write_board<W: Write>(board: &Board, format: SaveFormat, mut writer: W) -> std::io::Result<()> {
    match format {
        SaveFormat::Plain => {
            writeln!(writer, "{}x{}", board.columns(), board.rows())?;
            for (x, y) in board.living_cells() {
                writeln!(writer, "{},{}", x, y)?;
            }
        }
        SaveFormat::Verbose => {
            writeln!(writer, "cgol-version: {}", VERBOSE_FORMAT_VERSION)?;
            writeln!(writer, "columns: {}", board.columns())?;
            writeln!(writer, "rows: {}", board.rows())?;
            for (x, y) in board.living_cells() {
                writeln!(writer, "({}, {})", x, y)?;
            }
        }
    }
    writer.flush()
}

/// Convert a board to its saved text form
pub fn board_to_string(board: &Board, format: SaveFormat) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_board(board, format, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// A loaded board together with the layout its header was written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedBoard {
    pub board: Board,
    /// `None` when the file had no usable header
    pub format: Option<SaveFormat>,
}

/// Parse a saved board.
///
/// A missing or malformed header is not an error: the board gets the default
/// dimensions and the whole text is read again as a cell list. The cell list
/// ends at the first line that is not a coordinate pair.
pub fn parse_board_from_str(content: &str, defaults: &BoardConfig) -> Result<Board, BoardError> {
    parse_saved_board(content, defaults).map(|saved| saved.board)
}

/// Like [`parse_board_from_str`], also reporting which header layout was found
pub fn parse_saved_board(content: &str, defaults: &BoardConfig) -> Result<SavedBoard, BoardError> {
    let lines: Vec<&str> = content.lines().collect();

    let (columns, rows, body_start, format) = match parse_header(&lines) {
        Some((columns, rows, body_start, format)) => (columns, rows, body_start, Some(format)),
        None => {
            warn!(
                "no board header found, using default size {}x{}",
                defaults.default_columns, defaults.default_rows
            );
            (defaults.default_columns, defaults.default_rows, 0, None)
        }
    };

    let mut board = Board::new(rows, columns)?;

    for line in &lines[body_start..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_coordinate(line) {
            Some((x, y)) => board.set(x, y, true),
            None => {
                debug!("cell list ends at {:?}", line);
                break;
            }
        }
    }

    Ok(SavedBoard { board, format })
}

/// Returns `(columns, rows, index of the first body line, layout)`
fn parse_header(lines: &[&str]) -> Option<(usize, usize, usize, SaveFormat)> {
    let mut significant = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (first_idx, first) = significant.next()?;

    if let Some((columns, rows)) = parse_plain_header(first) {
        return Some((columns, rows, first_idx + 1, SaveFormat::Plain));
    }

    let version: u32 = parse_field(first, "cgol-version")?;
    if version == 0 {
        return None;
    }
    let (_, columns_line) = significant.next()?;
    let columns = positive(parse_field(columns_line, "columns")?)?;
    let (rows_idx, rows_line) = significant.next()?;
    let rows = positive(parse_field(rows_line, "rows")?)?;

    Some((columns, rows, rows_idx + 1, SaveFormat::Verbose))
}

fn parse_plain_header(line: &str) -> Option<(usize, usize)> {
    let (columns, rows) = line.trim().split_once('x')?;
    Some((
        positive(columns.trim().parse().ok()?)?,
        positive(rows.trim().parse().ok()?)?,
    ))
}

fn parse_field<T: std::str::FromStr>(line: &str, key: &str) -> Option<T> {
    let (name, value) = line.split_once(':')?;
    if name.trim() != key {
        return None;
    }
    value.trim().parse().ok()
}

fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v > 0)
}

/// Parse `x,y` or `(x, y)`
fn parse_coordinate(line: &str) -> Option<(i64, i64)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(line);
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Load a board from a file
pub fn load_board_from_file<P: AsRef<Path>>(path: P, defaults: &BoardConfig) -> Result<Board, BoardError> {
    load_saved_board_from_file(path, defaults).map(|saved| saved.board)
}

/// Load a board from a file, keeping track of its header layout
pub fn load_saved_board_from_file<P: AsRef<Path>>(
    path: P,
    defaults: &BoardConfig,
) -> Result<SavedBoard, BoardError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| BoardError::io(path, e))?;
    let saved = parse_saved_board(&content, defaults)?;
    let board = &saved.board;
    info!(
        "loaded {}x{} board with {} living cells from {}",
        board.columns(),
        board.rows(),
        board.living_count(),
        path.display()
    );
    Ok(saved)
}

/// Save a board to an explicit path
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P, format: SaveFormat) -> Result<(), BoardError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BoardError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| BoardError::io(path, e))?;
    write_board(board, format, BufWriter::new(file)).map_err(|e| BoardError::io(path, e))
}

/// Name a save file after the moment it was taken
pub fn timestamped_save_path(directory: &Path, extension: &str, now: NaiveDateTime) -> PathBuf {
    directory.join(format!("{}.{}", now.format("%Y%m%d%H%M%S"), extension))
}

/// Save a board under a fresh timestamped name and return where it went
pub fn save_board(board: &Board, persistence: &PersistenceConfig) -> Result<PathBuf, BoardError> {
    let path = timestamped_save_path(
        &persistence.save_directory,
        &persistence.extension,
        chrono::Local::now().naive_local(),
    );
    save_board_to_file(board, &path, persistence.format)?;
    info!("saved {} living cells to {}", board.living_count(), path.display());
    Ok(path)
}

/// Write a few well-known patterns to `output_dir`
pub fn create_sample_patterns<P: AsRef<Path>>(
    output_dir: P,
    board_config: &BoardConfig,
    persistence: &PersistenceConfig,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let rows = board_config.default_rows;
    let columns = board_config.default_columns;
    let patterns: [(&str, &[(i64, i64)]); 4] = [
        ("glider", &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]),
        ("blinker", &[(1, 0), (1, 1), (1, 2)]),
        ("block", &[(1, 1), (2, 1), (1, 2), (2, 2)]),
        ("beacon", &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)]),
    ];

    let mut written = Vec::with_capacity(patterns.len());
    for (name, cells) in patterns {
        let board = Board::from_living_cells(rows, columns, cells.iter().copied())?;
        let path = dir.join(format!("{}.{}", name, persistence.extension));
        save_board_to_file(&board, &path, persistence.format)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
