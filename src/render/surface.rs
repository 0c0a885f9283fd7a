// src/render/surface.rs
//
// The drawing surface the cross renderer paints into.
// Coordinates are canvas pixels: origin top-left, y down.

use nannou::prelude::*;

pub trait Surface {
    /// Erase everything previously drawn on the canvas.
    fn clear(&mut self);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Rgb<f32>);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point2);
    fn line_to(&mut self, point: Point2);
    /// Stroke every segment of the current path with the current width and colour.
    fn stroke(&mut self);
}

// A single recorded surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    LineWidth(f32),
    StrokeColor([f32; 3]),
    BeginPath,
    MoveTo(Point2),
    LineTo(Point2),
    Stroke,
}

/// Records draw calls instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn stroke_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Stroke))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Rgb<f32>) {
        self.calls
            .push(DrawCall::StrokeColor([color.red, color.green, color.blue]));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Point2) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point2) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
}
