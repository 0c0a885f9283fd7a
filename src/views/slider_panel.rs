// src/views/slider_panel.rs
//
// The four distribution sliders drawn below the grid canvas.
// Geometry is in canvas pixels so hit testing stays independent of nannou.

use log::debug;
use nannou::prelude::*;

use super::layout::canvas_to_window;
use crate::services::distribution::{DistributionFactors, SLIDER_MAX};

const LABEL_WIDTH: f32 = 120.0;
const TRACK_MARGIN: f32 = 16.0;
const TRACK_THICKNESS: f32 = 4.0;
const KNOB_RADIUS: f32 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    RowLength,
    RowWidth,
    ColLength,
    ColWidth,
}

impl SliderKind {
    pub const ALL: [SliderKind; 4] = [
        SliderKind::RowLength,
        SliderKind::RowWidth,
        SliderKind::ColLength,
        SliderKind::ColWidth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SliderKind::RowLength => "Row length",
            SliderKind::RowWidth => "Row width",
            SliderKind::ColLength => "Column length",
            SliderKind::ColWidth => "Column width",
        }
    }
}

pub struct SliderPanel {
    top: f32,
    width: f32,
    row_height: f32,
    initial_value: u8,
    factors: DistributionFactors,
    active: Option<SliderKind>,
}

impl SliderPanel {
    /// `top` is the canvas y where the panel starts, `width` the canvas width.
    pub fn new(top: f32, width: f32, row_height: f32, initial_value: u8) -> Self {
        let initial_value = initial_value.min(SLIDER_MAX);
        Self {
            top,
            width,
            row_height,
            initial_value,
            factors: DistributionFactors::uniform(initial_value),
            active: None,
        }
    }

    pub fn factors(&self) -> DistributionFactors {
        self.factors
    }

    pub fn value(&self, kind: SliderKind) -> u8 {
        match kind {
            SliderKind::RowLength => self.factors.row_length,
            SliderKind::RowWidth => self.factors.row_width,
            SliderKind::ColLength => self.factors.col_length,
            SliderKind::ColWidth => self.factors.col_width,
        }
    }

    fn set_value(&mut self, kind: SliderKind, value: u8) -> bool {
        let slot = match kind {
            SliderKind::RowLength => &mut self.factors.row_length,
            SliderKind::RowWidth => &mut self.factors.row_width,
            SliderKind::ColLength => &mut self.factors.col_length,
            SliderKind::ColWidth => &mut self.factors.col_width,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn reset(&mut self) {
        self.factors = DistributionFactors::uniform(self.initial_value);
        self.active = None;
    }

    pub fn height(&self) -> f32 {
        self.row_height * SliderKind::ALL.len() as f32
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    fn track_left(&self) -> f32 {
        LABEL_WIDTH
    }

    fn track_right(&self) -> f32 {
        (self.width - TRACK_MARGIN).max(self.track_left() + 1.0)
    }

    fn row_center_y(&self, index: usize) -> f32 {
        self.top + self.row_height * (index as f32 + 0.5)
    }

    /// The slider row under a canvas point, if any.
    pub fn slider_at(&self, point: Point2) -> Option<SliderKind> {
        if point.x < 0.0 || point.x >= self.width || point.y < self.top {
            return None;
        }
        let index = ((point.y - self.top) / self.row_height).floor() as usize;
        SliderKind::ALL.get(index).copied()
    }

    /// Slider value for a canvas x coordinate, clamped to the track.
    pub fn value_at(&self, x: f32) -> u8 {
        let (left, right) = (self.track_left(), self.track_right());
        let t = ((x - left) / (right - left)).clamp(0.0, 1.0);
        (t * SLIDER_MAX as f32).round() as u8
    }

    /// Starts a drag on the slider under `point`. Returns the new factors when
    /// a slider value changed.
    pub fn press(&mut self, point: Point2) -> Option<DistributionFactors> {
        let kind = self.slider_at(point)?;
        self.active = Some(kind);
        self.update(kind, point.x)
    }

    pub fn drag(&mut self, point: Point2) -> Option<DistributionFactors> {
        let kind = self.active?;
        self.update(kind, point.x)
    }

    pub fn release(&mut self) {
        self.active = None;
    }

    fn update(&mut self, kind: SliderKind, x: f32) -> Option<DistributionFactors> {
        let value = self.value_at(x);
        if !self.set_value(kind, value) {
            return None;
        }
        debug!("slider {} -> {}", kind.label(), value);
        Some(self.factors)
    }

    // ************************ Drawing *****************************

    pub fn draw(&self, draw: &Draw, window: Rect, panel_color: Rgb<f32>, ink: Rgb<f32>) {
        let panel_center = canvas_to_window(
            pt2(self.width / 2.0, self.top + self.height() / 2.0),
            window,
        );
        draw.rect()
            .xy(panel_center)
            .w_h(self.width, self.height())
            .color(panel_color);

        let (left, right) = (self.track_left(), self.track_right());
        for (index, kind) in SliderKind::ALL.iter().enumerate() {
            let y = self.row_center_y(index);
            let value = self.value(*kind);

            let label_pos = canvas_to_window(pt2(LABEL_WIDTH / 2.0, y), window);
            draw.text(&format!("{} {:>3}", kind.label(), value))
                .xy(label_pos)
                .w(LABEL_WIDTH - 8.0)
                .left_justify()
                .font_size(12)
                .color(ink);

            let start = canvas_to_window(pt2(left, y), window);
            let end = canvas_to_window(pt2(right, y), window);
            draw.line()
                .start(start)
                .end(end)
                .stroke_weight(TRACK_THICKNESS)
                .color(GRAY);

            let knob_x = left + (right - left) * value as f32 / SLIDER_MAX as f32;
            let knob = canvas_to_window(pt2(knob_x, y), window);
            let knob_color = if self.active == Some(*kind) {
                rgb(0.4, 0.4, 0.4)
            } else {
                ink
            };
            draw.ellipse().xy(knob).radius(KNOB_RADIUS).color(knob_color);
        }
    }
}
