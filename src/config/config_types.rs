// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("crossgrid"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32, // pixels per cell side
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 7,
            cell_size: 70.0,
        }
    }
}

/// Inclusive range of one cell parameter plus the value new cells start at.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Maps `t` in [0, 1] linearly onto [min, max].
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The value tables every cell is clamped against.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CellLimits {
    pub arm_length: ValueRange,
    pub pen_width: ValueRange,
}

impl Default for CellLimits {
    fn default() -> Self {
        Self {
            arm_length: ValueRange::new(3.0, 30.0, 15.0),
            pen_width: ValueRange::new(1.0, 15.0, 2.0),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_color: [f32; 3],
    pub background_color: [f32; 3],
    pub panel_color: [f32; 3],
}

impl StyleConfig {
    pub fn stroke(&self) -> Rgb<f32> {
        to_rgb(self.stroke_color)
    }

    pub fn background(&self) -> Rgb<f32> {
        to_rgb(self.background_color)
    }

    pub fn panel(&self) -> Rgb<f32> {
        to_rgb(self.panel_color)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: [0.0, 0.0, 0.0],
            background_color: [1.0, 1.0, 1.0],
            panel_color: [0.93, 0.93, 0.93],
        }
    }
}

fn to_rgb([r, g, b]: [f32; 3]) -> Rgb<f32> {
    rgb(r, g, b)
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SliderConfig {
    pub enabled: bool,
    pub row_height: f32,
    pub initial_value: u8, // 0..=100
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            row_height: 32.0,
            initial_value: 50,
        }
    }
}
