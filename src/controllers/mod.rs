// src/controllers/mod.rs
// Input handling

pub mod pointer_controller;

pub use pointer_controller::{handle_pointer, PointerAction};
