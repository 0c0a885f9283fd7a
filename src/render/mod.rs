// src/render/mod.rs
// Cross rendering and the drawing surfaces it targets

pub mod cross_renderer;
pub mod nannou_surface;
pub mod surface;

pub use cross_renderer::CrossRenderer;
pub use nannou_surface::NannouSurface;
pub use surface::{DrawCall, RecordingSurface, Surface};
