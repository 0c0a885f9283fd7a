pub mod grid_model;

pub use grid_model::{Cell, Grid};
