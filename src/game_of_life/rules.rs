//! Conway's Game of Life transition rule on a toroidal board

use super::Board;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Compute the next generation into a fresh board.
    ///
    /// Every cell is evaluated against `current` only, so births and deaths in
    /// this generation never leak into another cell's neighbour count.
    pub fn advance(current: &Board) -> Board {
        let rows = current.rows();
        let columns = current.columns();

        let next_cells: Vec<bool> = (0..rows as i64)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..columns as i64).map(move |x| {
                    Self::should_be_alive(current.get(x, y), current.count_neighbors(x, y))
                })
            })
            .collect();

        Board::from_raw(rows, columns, next_cells)
    }

    /// Advance the board several generations
    pub fn advance_generations(mut board: Board, generations: usize) -> Board {
        for _ in 0..generations {
            board = Self::advance(&board);
        }
        board
    }

    /// B3/S23
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (_, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_dead_board_stays_dead() {
        let board = Board::new(3, 3).unwrap();
        let next = LifeRules::advance(&board);
        assert!(next.is_empty());
        assert_eq!(next.rows(), 3);
        assert_eq!(next.columns(), 3);
    }

    #[test]
    fn test_oscillator_blinker() {
        let board = Board::from_living_cells(5, 5, [(1, 0), (1, 1), (1, 2)]).unwrap();

        let once = LifeRules::advance(&board);
        assert_eq!(sorted(once.living_cells()), vec![(0, 1), (1, 1), (2, 1)]);

        let twice = LifeRules::advance(&once);
        assert_eq!(sorted(twice.living_cells()), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(twice, board);
    }

    #[test]
    fn test_still_life_block() {
        let board = Board::from_living_cells(4, 4, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        let evolved = LifeRules::advance(&board);
        assert_eq!(evolved, board);
    }

    #[test]
    fn test_block_across_the_seam() {
        // A block straddling the corner is still a block on a torus
        let board = Board::from_living_cells(6, 6, [(5, 5), (0, 5), (5, 0), (0, 0)]).unwrap();
        assert_eq!(LifeRules::advance(&board), board);
    }

    #[test]
    fn test_glider_travels_and_wraps() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let board = Board::from_living_cells(8, 8, glider).unwrap();

        // A glider moves one cell diagonally every four generations
        let after_four = LifeRules::advance_generations(board.clone(), 4);
        assert_eq!(after_four, board.shift(1, 1));

        // After 32 generations it has crossed the whole 8x8 torus
        let after_lap = LifeRules::advance_generations(board.clone(), 32);
        assert_eq!(after_lap, board);
    }

    #[test]
    fn test_rule_logic() {
        assert!(LifeRules::should_be_alive(true, 2));
        assert!(LifeRules::should_be_alive(true, 3));
        assert!(LifeRules::should_be_alive(false, 3));
        assert!(!LifeRules::should_be_alive(true, 1));
        assert!(!LifeRules::should_be_alive(true, 4));
        assert!(!LifeRules::should_be_alive(false, 2));
        assert!(!LifeRules::should_be_alive(false, 0));
    }

    #[test]
    fn test_advance_does_not_touch_input() {
        let board = Board::from_living_cells(5, 5, [(1, 0), (1, 1), (1, 2)]).unwrap();
        let snapshot = board.clone();
        let _ = LifeRules::advance(&board);
        assert_eq!(board, snapshot);
    }
}
