//! The owner of the current generation

use super::{GenerationPacer, Viewport};
use crate::config::{PersistenceConfig, Settings};
use crate::game_of_life::{save_board, Board, BoardError, LifeRules};
use log::debug;
use std::path::PathBuf;

/// Requests an input device can make of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Step,
    Save,
    /// Flip the cell at board coordinates
    ToggleCell { x: i64, y: i64 },
    /// Flip the cell under a window pixel
    ToggleAt { px: i32, py: i32 },
    Shift { dx: i64, dy: i64 },
    Zoom(i32),
    Drag { dx: i32, dy: i32 },
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Saved(PathBuf),
    /// Not allowed while the simulation is running
    Ignored,
    Unchanged,
}

/// Holds the single live board handle.
///
/// Every transition builds a complete new board before it replaces the old one,
/// so anything reading through [`Session::board`] sees one whole generation.
pub struct Session {
    board: Board,
    generation: u64,
    running: bool,
    viewport: Viewport,
    pacer: GenerationPacer,
    persistence: PersistenceConfig,
}

impl Session {
    pub fn new(board: Board, settings: &Settings) -> Self {
        Self {
            board,
            generation: 0,
            running: settings.simulation.start_running,
            viewport: Viewport::new(&settings.view),
            pacer: GenerationPacer::new(settings.simulation.generations_per_second),
            persistence: settings.persistence.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn pacer_mut(&mut self) -> &mut GenerationPacer {
        &mut self.pacer
    }

    /// Swap in a different board, e.g. one just loaded from disk
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
    }

    pub fn set_running(&mut self, running: bool) {
        if running && !self.running {
            self.pacer.mark();
        }
        self.running = running;
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, BoardError> {
        use Command::*;

        let outcome = match command {
            TogglePause => {
                self.set_running(!self.running);
                Outcome::Redraw
            }
            Shift { dx, dy } => {
                self.board = self.board.shift(dx, dy);
                Outcome::Redraw
            }
            Drag { dx, dy } => {
                self.viewport.drag(dx, dy);
                Outcome::Redraw
            }
            Step | Save | ToggleCell { .. } | ToggleAt { .. } | Zoom(_) if self.running => {
                Outcome::Ignored
            }
            Step => {
                self.advance();
                Outcome::Redraw
            }
            Save => Outcome::Saved(save_board(&self.board, &self.persistence)?),
            ToggleCell { x, y } => {
                self.board.toggle(x, y);
                Outcome::Redraw
            }
            ToggleAt { px, py } => {
                let (x, y) = self.viewport.screen_to_cell(px, py);
                self.board.toggle(x, y);
                Outcome::Redraw
            }
            Zoom(step) => {
                if self.viewport.zoom(step) {
                    Outcome::Redraw
                } else {
                    Outcome::Unchanged
                }
            }
        };

        debug!("{:?} -> {:?}", command, outcome);
        Ok(outcome)
    }

    /// Advance one generation if running and the pacer allows it
    pub fn tick(&mut self) -> bool {
        if !self.running || !self.pacer.is_due() {
            return false;
        }
        self.pacer.mark();
        self.advance();
        true
    }

    /// Advance one generation if running, sleeping out the pacer interval first
    pub fn tick_blocking(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.pacer.wait();
        self.advance();
        true
    }

    fn advance(&mut self) {
        self.board = LifeRules::advance(&self.board);
        self.generation += 1;
    }
}
