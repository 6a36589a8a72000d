//! Classification of a board's long-run behaviour

use crate::game_of_life::{Board, LifeRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What happens to a board over a bounded number of generations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub rows: usize,
    pub columns: usize,
    pub initial_population: usize,
    pub final_population: usize,
    pub generations_run: usize,
    pub behavior: Behavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Behavior {
    /// All cells died at `generation`
    Extinct { generation: usize },
    /// Unchanged by a single advance
    StillLife,
    /// Returns to its starting state after `period` generations
    Oscillator { period: usize },
    /// Reaches an earlier state after `start` generations, cycling with `period`
    Cycle { start: usize, period: usize },
    /// No repeat seen within the generations run
    Unsettled,
}

impl PatternAnalysis {
    /// Run the board forward up to `max_generations`, stopping at the first repeated state
    pub fn analyze(board: &Board, max_generations: usize) -> Self {
        let initial_population = board.living_count();
        let mut seen: HashMap<Board, usize> = HashMap::new();
        let mut current = board.clone();
        let mut generation = 0;

        let behavior = loop {
            if current.is_empty() {
                break Behavior::Extinct { generation };
            }
            if let Some(&first) = seen.get(&current) {
                let period = generation - first;
                break match (first, period) {
                    (0, 1) => Behavior::StillLife,
                    (0, _) => Behavior::Oscillator { period },
                    (start, _) => Behavior::Cycle { start, period },
                };
            }
            if generation == max_generations {
                break Behavior::Unsettled;
            }

            let next = LifeRules::advance(&current);
            seen.insert(std::mem::replace(&mut current, next), generation);
            generation += 1;
        };

        Self {
            rows: board.rows(),
            columns: board.columns(),
            initial_population,
            final_population: current.living_count(),
            generations_run: generation,
            behavior,
        }
    }

    pub fn is_stable(&self) -> bool {
        !matches!(self.behavior, Behavior::Unsettled)
    }
}

impl fmt::Display for PatternAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pattern Analysis:")?;
        writeln!(f, "  Board: {}x{}", self.columns, self.rows)?;
        writeln!(f, "  Population: {} → {}", self.initial_population, self.final_population)?;
        writeln!(f, "  Generations run: {}", self.generations_run)?;
        match self.behavior {
            Behavior::Extinct { generation } => writeln!(f, "  Type: Extinct (at generation {})", generation),
            Behavior::StillLife => writeln!(f, "  Type: Still Life"),
            Behavior::Oscillator { period } => writeln!(f, "  Type: Oscillator (period {})", period),
            Behavior::Cycle { start, period } => {
                writeln!(f, "  Type: Settles into a cycle (period {} from generation {})", period, start)
            }
            Behavior::Unsettled => writeln!(f, "  Type: Unsettled"),
        }
    }
}
