// src/services/distribution.rs
//
// Row/column gradients driven by the four distribution sliders.
// Each axis yields a factor in [0, 1]; the two factors are multiplied into a
// single mix which is mapped onto the parameter's range.

use log::debug;

use crate::models::{Cell, Grid};

pub const SLIDER_MAX: u8 = 100;

/// Raw slider values, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionFactors {
    pub row_length: u8,
    pub row_width: u8,
    pub col_length: u8,
    pub col_width: u8,
}

impl DistributionFactors {
    pub fn uniform(value: u8) -> Self {
        let value = value.min(SLIDER_MAX);
        Self {
            row_length: value,
            row_width: value,
            col_length: value,
            col_width: value,
        }
    }
}

impl Default for DistributionFactors {
    fn default() -> Self {
        Self::uniform(SLIDER_MAX / 2)
    }
}

/// Position of `index` along an axis of `count` cells, in [0, 1].
fn axis_position(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    }
}

/// Interpolates from the slider's complement at the first index to the slider
/// value at the last one. A slider at 50 gives 0.5 everywhere.
pub fn axis_factor(slider: u8, index: usize, count: usize) -> f32 {
    let weight = slider.min(SLIDER_MAX) as f32 / SLIDER_MAX as f32;
    let t = axis_position(index, count);
    (1.0 - weight) * (1.0 - t) + weight * t
}

/// Product of the row and column factors, in [0, 1].
pub fn blend(row_factor: f32, col_factor: f32) -> f32 {
    (row_factor * col_factor).clamp(0.0, 1.0)
}

/// Overwrites every cell of the grid from the slider values.
pub fn apply_distribution(grid: &mut Grid, factors: &DistributionFactors) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let limits = *grid.limits();

    for row in 0..rows {
        let row_length = axis_factor(factors.row_length, row, rows);
        let row_width = axis_factor(factors.row_width, row, rows);
        for col in 0..cols {
            let col_length = axis_factor(factors.col_length, col, cols);
            let col_width = axis_factor(factors.col_width, col, cols);

            let cell = Cell {
                arm_length: limits.arm_length.lerp(blend(row_length, col_length)),
                pen_width: limits.pen_width.lerp(blend(row_width, col_width)),
            };
            grid.set(row, col, cell);
        }
    }
    debug!("applied distribution {:?}", factors);
}
