//! Mapping between window pixels and board coordinates

use crate::config::ViewConfig;
use std::ops::RangeInclusive;

/// A window onto the board.
///
/// `offset` is the pixel position of grid cell `(0, 0)` relative to the window's
/// top-left corner. Because the board is a torus, any offset is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: i32,
    height: i32,
    cell_size: i32,
    min_cell_size: i32,
    max_cell_size: i32,
    offset: (i32, i32),
}

impl Viewport {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size.clamp(config.min_cell_size, config.max_cell_size),
            min_cell_size: config.min_cell_size,
            max_cell_size: config.max_cell_size,
            offset: (0, 0),
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.offset = (x, y);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Board cell under a window pixel
    pub fn screen_to_cell(&self, px: i32, py: i32) -> (i64, i64) {
        let cs = self.cell_size as i64;
        (
            (px as i64 - self.offset.0 as i64).div_euclid(cs),
            (py as i64 - self.offset.1 as i64).div_euclid(cs),
        )
    }

    /// Grow or shrink cells by `step` pixels, keeping the window centre fixed.
    ///
    /// Returns false and leaves the view alone when the new size would leave
    /// the configured bounds.
    pub fn zoom(&mut self, step: i32) -> bool {
        let new_size = self.cell_size.saturating_add(step);
        if step == 0 || new_size < self.min_cell_size || new_size > self.max_cell_size {
            return false;
        }

        let recentre = |offset: i32, extent: i32| {
            offset
                .saturating_mul(new_size)
                .saturating_sub(step.saturating_mul(extent / 2))
                / self.cell_size
        };
        self.offset = (
            recentre(self.offset.0, self.width),
            recentre(self.offset.1, self.height),
        );
        self.cell_size = new_size;
        true
    }

    pub fn drag(&mut self, dx: i32, dy: i32) {
        self.offset.0 = self.offset.0.saturating_add(dx);
        self.offset.1 = self.offset.1.saturating_add(dy);
    }

    /// View columns to draw, including a partial cell on either side
    pub fn visible_columns(&self) -> RangeInclusive<i32> {
        -1..=self.width / self.cell_size
    }

    pub fn visible_rows(&self) -> RangeInclusive<i32> {
        -1..=self.height / self.cell_size
    }

    /// Board coordinate shown in view column `col`, view row `row`
    pub fn cell_at(&self, col: i32, row: i32) -> (i64, i64) {
        (
            (col - self.offset.0 / self.cell_size) as i64,
            (row - self.offset.1 / self.cell_size) as i64,
        )
    }

    /// Top-left pixel of view column `col`, view row `row`
    pub fn cell_origin(&self, col: i32, row: i32) -> (i32, i32) {
        (
            col * self.cell_size + self.offset.0 % self.cell_size,
            row * self.cell_size + self.offset.1 % self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(&ViewConfig::default())
    }

    #[test]
    fn test_screen_to_cell() {
        let mut view = viewport();
        assert_eq!(view.screen_to_cell(0, 0), (0, 0));
        assert_eq!(view.screen_to_cell(19, 39), (0, 1));
        assert_eq!(view.screen_to_cell(20, 40), (1, 2));

        view.drag(30, -10);
        assert_eq!(view.screen_to_cell(0, 0), (-2, 0));
        assert_eq!(view.screen_to_cell(29, 9), (-1, 0));
        assert_eq!(view.screen_to_cell(30, 10), (0, 1));
    }

    #[test]
    fn test_zoom_bounds() {
        let mut view = viewport();
        view.zoom(30);
        assert_eq!(view.cell_size(), 50);
        assert!(!view.zoom(1));
        assert_eq!(view.cell_size(), 50);

        let mut view = viewport();
        assert!(!view.zoom(-16));
        assert!(view.zoom(-15));
        assert_eq!(view.cell_size(), 5);
    }

    #[test]
    fn test_zoom_keeps_centre() {
        let mut view = viewport();
        let centre = view.screen_to_cell(400, 300);
        assert!(view.zoom(1));
        assert_eq!(view.cell_size(), 21);
        assert_eq!(view.screen_to_cell(400, 300), centre);
        assert_eq!(view.offset(), (-20, -15));
    }

    #[test]
    fn test_pixel_mapping_agrees_with_layout() {
        let mut view = viewport();
        view.set_offset(47, -33);
        for col in view.visible_columns() {
            for row in view.visible_rows() {
                let (px, py) = view.cell_origin(col, row);
                assert_eq!(view.screen_to_cell(px, py), view.cell_at(col, row));
                assert_eq!(view.screen_to_cell(px + 19, py + 19), view.cell_at(col, row));
            }
        }
    }

    #[test]
    fn test_far_offsets_saturate() {
        let mut view = viewport();
        view.drag(i32::MAX, i32::MAX);
        view.drag(i32::MAX, i32::MAX);
        assert_eq!(view.offset(), (i32::MAX, i32::MAX));

        assert!(view.zoom(1));
        assert_eq!(view.cell_size(), 21);
        assert!(view.offset().0 > 0);

        view.drag(i32::MIN, i32::MIN);
        view.drag(i32::MIN, i32::MIN);
        assert_eq!(view.offset(), (i32::MIN, i32::MIN));
        assert!(view.zoom(-1));
        assert_eq!(view.cell_size(), 20);
        assert!(view.offset().0 < 0);
        let (x, y) = view.screen_to_cell(0, 0);
        assert_eq!(x, (-(view.offset().0 as i64)).div_euclid(20));
        assert_eq!(y, (-(view.offset().1 as i64)).div_euclid(20));

        assert!(!view.zoom(i32::MAX));
        assert_eq!(view.cell_size(), 20);
    }

    #[test]
    fn test_visible_range() {
        let view = viewport();
        assert_eq!(view.visible_columns(), -1..=40);
        assert_eq!(view.visible_rows(), -1..=30);
    }
}
