// src/lib.rs
//
// crossgrid: a grid of adjustable crosses.
// Cell state, layout and rendering live here; main.rs hosts them in a nannou window.

pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod services;
pub mod views;
