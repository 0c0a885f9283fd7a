// src/views/layout.rs
//
// Grid geometry in canvas pixels (origin top-left, y down) and the
// conversions to and from nannou window space (origin centre, y up).

use nannou::prelude::*;

use crate::config::GridConfig;

/// A pointer event that landed on a cell. Only built through GridLayout::cell_at,
/// so row and col are always in bounds for the layout that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridEvent {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.rows, config.cols, config.cell_size)
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Maps a canvas pixel to the cell under it, or None outside the grid.
    pub fn cell_at(&self, point: Point2) -> Option<GridEvent> {
        let row = (point.y / self.cell_size).floor();
        let col = (point.x / self.cell_size).floor();
        if row < 0.0 || col < 0.0 || !row.is_finite() || !col.is_finite() {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some(GridEvent { row, col })
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Point2 {
        pt2(
            col as f32 * self.cell_size + self.cell_size / 2.0,
            row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }
}

/// Window point (nannou space) to canvas pixel, with the canvas pinned to the
/// window's top-left corner.
pub fn window_to_canvas(point: Point2, window: Rect) -> Point2 {
    pt2(point.x - window.left(), window.top() - point.y)
}

pub fn canvas_to_window(point: Point2, window: Rect) -> Point2 {
    pt2(window.left() + point.x, window.top() - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(7, 7, 70.0)
    }

    #[test]
    fn test_click_maps_to_first_cell() {
        assert_eq!(
            layout().cell_at(pt2(40.0, 40.0)),
            Some(GridEvent { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_cell_at_edges() {
        let layout = layout();
        assert_eq!(
            layout.cell_at(pt2(69.9, 70.0)),
            Some(GridEvent { row: 1, col: 0 })
        );
        assert_eq!(
            layout.cell_at(pt2(489.9, 489.9)),
            Some(GridEvent { row: 6, col: 6 })
        );
        assert_eq!(layout.cell_at(pt2(490.0, 10.0)), None);
        assert_eq!(layout.cell_at(pt2(10.0, 490.0)), None);
        assert_eq!(layout.cell_at(pt2(-0.5, 10.0)), None);
        assert_eq!(layout.cell_at(pt2(10.0, -0.5)), None);
    }

    #[test]
    fn test_every_in_bounds_pixel_maps_in_range() {
        let layout = layout();
        let mut y = 0.0;
        while y < layout.height() {
            let mut x = 0.0;
            while x < layout.width() {
                let event = layout.cell_at(pt2(x, y)).unwrap();
                assert!(event.row < 7 && event.col < 7);
                x += 3.5;
            }
            y += 3.5;
        }
    }

    #[test]
    fn test_cell_center() {
        let layout = layout();
        assert_eq!(layout.cell_center(0, 0), pt2(35.0, 35.0));
        assert_eq!(layout.cell_center(2, 5), pt2(385.0, 175.0));
    }

    #[test]
    fn test_window_canvas_conversion() {
        let window = Rect::from_w_h(490.0, 618.0);
        // top-left corner of the window is the canvas origin
        let origin = window_to_canvas(pt2(-245.0, 309.0), window);
        assert_eq!(origin, pt2(0.0, 0.0));

        let canvas = pt2(40.0, 40.0);
        let back = window_to_canvas(canvas_to_window(canvas, window), window);
        assert_eq!(back, canvas);
    }
}
