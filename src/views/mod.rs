// src/views/mod.rs

pub mod layout;
pub mod slider_panel;

pub use layout::{canvas_to_window, window_to_canvas, GridEvent, GridLayout};
pub use slider_panel::{SliderKind, SliderPanel};
