// src/controllers/pointer_controller.rs
//
// Translates pointer input on the canvas into grid mutations.

use log::debug;
use nannou::prelude::*;

use crate::models::Grid;
use crate::views::GridLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Primary button: thicker stroke
    Click,
    /// Secondary button: thinner stroke
    ContextClick,
    /// Vertical scroll, browser convention: negative scrolls up.
    Wheel { delta_y: f32 },
}

impl PointerAction {
    /// Builds a wheel action from a nannou scroll delta (positive y scrolls up).
    /// A zero vertical delta (purely horizontal scrolling) yields None rather
    /// than shrinking the arm as a non-negative delta_y otherwise would.
    pub fn from_scroll(delta: MouseScrollDelta) -> Option<Self> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };
        (y != 0.0).then_some(PointerAction::Wheel { delta_y: -y })
    }
}

/// Applies `action` at the canvas point. Returns true when a cell was hit and
/// the grid needs a redraw; points outside the grid are ignored.
pub fn handle_pointer(
    grid: &mut Grid,
    layout: &GridLayout,
    point: Point2,
    action: PointerAction,
) -> bool {
    let Some(event) = layout.cell_at(point) else {
        return false;
    };
    debug!("{:?} on cell ({}, {})", action, event.row, event.col);

    match action {
        PointerAction::Click => grid.adjust_pen_width(event.row, event.col, 1.0),
        PointerAction::ContextClick => grid.adjust_pen_width(event.row, event.col, -1.0),
        PointerAction::Wheel { delta_y } => {
            let step = if delta_y < 0.0 { 1.0 } else { -1.0 };
            grid.adjust_arm_length(event.row, event.col, step);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CellLimits;

    fn setup() -> (Grid, GridLayout) {
        (
            Grid::new(7, 7, CellLimits::default()),
            GridLayout::new(7, 7, 70.0),
        )
    }

    #[test]
    fn test_click_increments_pen_width() {
        let (mut grid, layout) = setup();
        assert_eq!(grid.get(0, 0).unwrap().pen_width, 2.0);
        assert!(handle_pointer(
            &mut grid,
            &layout,
            pt2(40.0, 40.0),
            PointerAction::Click
        ));
        assert_eq!(grid.get(0, 0).unwrap().pen_width, 3.0);
    }

    #[test]
    fn test_context_click_never_below_min() {
        let (mut grid, layout) = setup();
        for _ in 0..20 {
            handle_pointer(&mut grid, &layout, pt2(100.0, 300.0), PointerAction::ContextClick);
        }
        assert_eq!(grid.get(4, 1).unwrap().pen_width, 1.0);
    }

    #[test]
    fn test_click_never_above_max() {
        let (mut grid, layout) = setup();
        for _ in 0..20 {
            handle_pointer(&mut grid, &layout, pt2(100.0, 300.0), PointerAction::Click);
        }
        assert_eq!(grid.get(4, 1).unwrap().pen_width, 15.0);
    }

    #[test]
    fn test_wheel_adjusts_arm_length() {
        let (mut grid, layout) = setup();
        let point = pt2(200.0, 200.0);

        handle_pointer(&mut grid, &layout, point, PointerAction::Wheel { delta_y: -5.0 });
        assert_eq!(grid.get(2, 2).unwrap().arm_length, 16.0);

        handle_pointer(&mut grid, &layout, point, PointerAction::Wheel { delta_y: 5.0 });
        handle_pointer(&mut grid, &layout, point, PointerAction::Wheel { delta_y: 5.0 });
        assert_eq!(grid.get(2, 2).unwrap().arm_length, 14.0);
    }

    #[test]
    fn test_wheel_stays_in_range() {
        let (mut grid, layout) = setup();
        let point = pt2(10.0, 10.0);
        for _ in 0..40 {
            handle_pointer(&mut grid, &layout, point, PointerAction::Wheel { delta_y: -1.0 });
        }
        assert_eq!(grid.get(0, 0).unwrap().arm_length, 30.0);
        for _ in 0..40 {
            handle_pointer(&mut grid, &layout, point, PointerAction::Wheel { delta_y: 1.0 });
        }
        assert_eq!(grid.get(0, 0).unwrap().arm_length, 3.0);
    }

    #[test]
    fn test_outside_grid_is_ignored() {
        let (mut grid, layout) = setup();
        let before = grid.clone();
        assert!(!handle_pointer(
            &mut grid,
            &layout,
            pt2(500.0, 20.0),
            PointerAction::Click
        ));
        assert!(!handle_pointer(
            &mut grid,
            &layout,
            pt2(20.0, -3.0),
            PointerAction::Wheel { delta_y: -1.0 }
        ));
        for ((_, _, a), (_, _, b)) in grid.iter().zip(before.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_scroll_delta_conversion() {
        assert_eq!(
            PointerAction::from_scroll(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(PointerAction::Wheel { delta_y: -1.0 })
        );
        assert_eq!(
            PointerAction::from_scroll(MouseScrollDelta::LineDelta(0.0, -2.0)),
            Some(PointerAction::Wheel { delta_y: 2.0 })
        );
        assert_eq!(
            PointerAction::from_scroll(MouseScrollDelta::LineDelta(3.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_horizontal_scroll_leaves_arm_untouched() {
        let (mut grid, layout) = setup();
        if let Some(action) = PointerAction::from_scroll(MouseScrollDelta::LineDelta(2.0, 0.0)) {
            handle_pointer(&mut grid, &layout, pt2(40.0, 40.0), action);
        }
        assert_eq!(grid.get(0, 0).unwrap().arm_length, 15.0);

        // a zero delta_y that does reach the handler counts as scrolling down
        handle_pointer(&mut grid, &layout, pt2(40.0, 40.0), PointerAction::Wheel { delta_y: 0.0 });
        assert_eq!(grid.get(0, 0).unwrap().arm_length, 14.0);
    }
}
