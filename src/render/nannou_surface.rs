// src/render/nannou_surface.rs
//
// Surface implementation on top of nannou's Draw.
// Canvas pixels are translated into window space before drawing.

use nannou::prelude::*;

use super::Surface;
use crate::views::layout::canvas_to_window;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window: Rect,
    canvas_size: Vec2,
    background: Rgb<f32>,
    line_width: f32,
    color: Rgb<f32>,
    segments: Vec<(Point2, Point2)>,
    cursor: Option<Point2>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window: Rect, canvas_size: Vec2, background: Rgb<f32>) -> Self {
        Self {
            draw,
            window,
            canvas_size,
            background,
            line_width: 1.0,
            color: rgb(0.0, 0.0, 0.0),
            segments: Vec::new(),
            cursor: None,
        }
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self) {
        let center = canvas_to_window(self.canvas_size / 2.0, self.window);
        self.draw
            .rect()
            .xy(center)
            .wh(self.canvas_size)
            .color(self.background);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Rgb<f32>) {
        self.color = color;
    }

    fn begin_path(&mut self) {
        self.segments.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, point: Point2) {
        self.cursor = Some(canvas_to_window(point, self.window));
    }

    fn line_to(&mut self, point: Point2) {
        let end = canvas_to_window(point, self.window);
        // line_to without a current point acts as move_to
        if let Some(start) = self.cursor {
            self.segments.push((start, end));
        }
        self.cursor = Some(end);
    }

    fn stroke(&mut self) {
        if self.line_width <= 0.0 {
            return;
        }
        for (start, end) in &self.segments {
            self.draw
                .line()
                .start(*start)
                .end(*end)
                .stroke_weight(self.line_width)
                .color(self.color);
        }
    }
}
