// src/models/grid_model.rs
//
// Per-cell cross parameters for a fixed rows x cols grid.
// Every mutation is clamped against the grid's CellLimits.

use log::debug;

use crate::config::CellLimits;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub arm_length: f32,
    pub pen_width: f32,
}

impl Cell {
    pub fn with_defaults(limits: &CellLimits) -> Self {
        Self {
            arm_length: limits.arm_length.default,
            pen_width: limits.pen_width.default,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pen_width > 0.0
    }
}

/// Row-major grid of independent cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    limits: CellLimits,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, limits: CellLimits) -> Self {
        let cells = vec![Cell::with_defaults(&limits); rows * cols];
        Self {
            rows,
            cols,
            cells,
            limits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn limits(&self) -> &CellLimits {
        &self.limits
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Overwrites a cell, clamping both values into range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let limits = self.limits;
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Cell {
                arm_length: limits.arm_length.clamp(cell.arm_length),
                pen_width: limits.pen_width.clamp(cell.pen_width),
            };
        }
    }

    pub fn adjust_pen_width(&mut self, row: usize, col: usize, delta: f32) {
        let range = self.limits.pen_width;
        if let Some(i) = self.index(row, col) {
            let cell = &mut self.cells[i];
            cell.pen_width = range.clamp(cell.pen_width + delta);
            debug!("cell ({row}, {col}) pen width -> {}", cell.pen_width);
        }
    }

    pub fn adjust_arm_length(&mut self, row: usize, col: usize, delta: f32) {
        let range = self.limits.arm_length;
        if let Some(i) = self.index(row, col) {
            let cell = &mut self.cells[i];
            cell.arm_length = range.clamp(cell.arm_length + delta);
            debug!("cell ({row}, {col}) arm length -> {}", cell.arm_length);
        }
    }

    pub fn reset(&mut self) {
        let fresh = Cell::with_defaults(&self.limits);
        self.cells.iter_mut().for_each(|cell| *cell = fresh);
    }

    /// Cells in row-major order with their (row, col) position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }
}
