// src/render/cross_renderer.rs
//
// Paints one cross per visible cell at the cell's pixel centre.

use log::trace;
use nannou::prelude::*;

use super::Surface;
use crate::models::Grid;
use crate::views::GridLayout;

pub struct CrossRenderer {
    layout: GridLayout,
    stroke_color: Rgb<f32>,
}

impl CrossRenderer {
    pub fn new(layout: GridLayout, stroke_color: Rgb<f32>) -> Self {
        Self {
            layout,
            stroke_color,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Clears the surface and redraws the whole grid.
    pub fn draw<S: Surface>(&self, surface: &mut S, grid: &Grid) {
        surface.clear();

        let mut drawn = 0;
        for (row, col, cell) in grid.iter() {
            // zero or negative width is invisible
            if !cell.is_visible() {
                continue;
            }
            let center = self.layout.cell_center(row, col);
            let arm = cell.arm_length;

            surface.set_line_width(cell.pen_width);
            surface.set_stroke_color(self.stroke_color);
            surface.begin_path();
            surface.move_to(pt2(center.x - arm, center.y));
            surface.line_to(pt2(center.x + arm, center.y));
            surface.move_to(pt2(center.x, center.y - arm));
            surface.line_to(pt2(center.x, center.y + arm));
            surface.stroke();
            drawn += 1;
        }
        trace!("redrew {drawn} crosses");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellLimits, ValueRange};
    use crate::models::Cell;
    use crate::render::{DrawCall, RecordingSurface};

    fn renderer() -> CrossRenderer {
        CrossRenderer::new(GridLayout::new(7, 7, 70.0), rgb(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_draw_starts_with_clear() {
        let grid = Grid::new(7, 7, CellLimits::default());
        let mut surface = RecordingSurface::new();
        renderer().draw(&mut surface, &grid);
        assert_eq!(surface.calls()[0], DrawCall::Clear);
        assert_eq!(surface.stroke_count(), 49);
    }

    #[test]
    fn test_cross_geometry() {
        let grid = Grid::new(1, 1, CellLimits::default());
        let renderer = CrossRenderer::new(GridLayout::new(1, 1, 70.0), rgb(0.0, 0.0, 0.0));
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface, &grid);

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Clear,
                DrawCall::LineWidth(2.0),
                DrawCall::StrokeColor([0.0, 0.0, 0.0]),
                DrawCall::BeginPath,
                DrawCall::MoveTo(pt2(20.0, 35.0)),
                DrawCall::LineTo(pt2(50.0, 35.0)),
                DrawCall::MoveTo(pt2(35.0, 20.0)),
                DrawCall::LineTo(pt2(35.0, 50.0)),
                DrawCall::Stroke,
            ]
        );
    }

    #[test]
    fn test_zero_width_cells_are_skipped() {
        let limits = CellLimits {
            arm_length: ValueRange::new(3.0, 30.0, 15.0),
            pen_width: ValueRange::new(0.0, 25.0, 2.0),
        };
        let mut grid = Grid::new(7, 7, limits);
        grid.set(
            3,
            3,
            Cell {
                arm_length: 15.0,
                pen_width: 0.0,
            },
        );
        grid.adjust_pen_width(0, 0, -5.0);

        let mut surface = RecordingSurface::new();
        renderer().draw(&mut surface, &grid);
        assert_eq!(surface.stroke_count(), 47);
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut grid = Grid::new(7, 7, CellLimits::default());
        grid.adjust_arm_length(2, 3, 4.0);
        grid.adjust_pen_width(6, 1, 5.0);

        let renderer = renderer();
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface, &grid);
        let first = surface.take_calls();
        renderer.draw(&mut surface, &grid);
        let second = surface.take_calls();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_surface_when_nothing_visible() {
        let limits = CellLimits {
            arm_length: ValueRange::new(3.0, 30.0, 15.0),
            pen_width: ValueRange::new(0.0, 15.0, 0.0),
        };
        let grid = Grid::new(7, 7, limits);
        let mut surface = RecordingSurface::new();
        renderer().draw(&mut surface, &grid);
        assert_eq!(surface.calls(), &[DrawCall::Clear]);
    }
}
