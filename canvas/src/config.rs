//! Editor tunables and new-shape settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{
    FOCAL_LENGTH, MAX_RADIUS, MAX_RECT_EXTENT, MIN_CANVAS_EXTENT, MIN_RADIUS, MIN_RECT_EXTENT, PASTE_OFFSET,
    ROTATION_SPEED_X, ROTATION_SPEED_Y,
};
use crate::error::CanvasError;
use crate::shape::{Circle, Rectangle};
use crate::viewport::{Point, Vec2};

/// Tunables the host may override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Translation applied to every pasted shape.
    pub paste_offset: Vec2,
    /// Preview rotation per frame about the X axis, in radians.
    pub rotation_speed_x: f64,
    /// Preview rotation per frame about the Y axis, in radians.
    pub rotation_speed_y: f64,
    /// Perspective distance used by the preview projection.
    pub focal_length: f64,
    /// Canvas size reported by the host is clamped up to this per axis.
    pub min_canvas_extent: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            paste_offset: Vec2::splat(PASTE_OFFSET),
            rotation_speed_x: ROTATION_SPEED_X,
            rotation_speed_y: ROTATION_SPEED_Y,
            focal_length: FOCAL_LENGTH,
            min_canvas_extent: MIN_CANVAS_EXTENT,
        }
    }
}

impl EditorConfig {
    /// Reject values the editor cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let finite = [
            ("paste_offset.x", self.paste_offset.x),
            ("paste_offset.y", self.paste_offset.y),
            ("rotation_speed_x", self.rotation_speed_x),
            ("rotation_speed_y", self.rotation_speed_y),
        ];
        for (field, value) in finite {
            ensure_finite(field, value)?;
        }
        let positive = [("focal_length", self.focal_length), ("min_canvas_extent", self.min_canvas_extent)];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CanvasError::InvalidConfig(format!("{field} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CanvasError::InvalidConfig(format!("{field} must be finite, got {value}")))
    }
}

/// State of the "new shape" controls: what the next add button creates.
///
/// Setters clamp into the control ranges so shapes built from these settings
/// always have a positive extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationSettings {
    radius: f64,
    size: Vec2,
    pub color: Color,
    pub name: String,
    pub circle_position: Point,
    pub rectangle_position: Point,
}

impl Default for CreationSettings {
    fn default() -> Self {
        Self {
            radius: 50.0,
            size: Vec2::new(80.0, 60.0),
            color: Color::RED,
            name: String::new(),
            circle_position: Point::new(100.0, 100.0),
            rectangle_position: Point::new(150.0, 150.0),
        }
    }
}

/// Clamp into `[lo, hi]`, mapping NaN to `lo`.
fn clamp_range(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() { lo } else { value.clamp(lo, hi) }
}

impl CreationSettings {
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the circle radius, clamped to the control range.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = clamp_radius(radius);
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the rectangle size, each axis clamped to the control range.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = clamp_size(size);
    }

    /// A circle at the default drop position.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.circle_position, self.radius, self.color, self.name.clone())
    }

    /// A rectangle at the default drop position.
    #[must_use]
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.rectangle_position, self.size, self.color, self.name.clone())
    }
}

/// Radius constrained to the new-shape control range.
#[must_use]
pub fn clamp_radius(radius: f64) -> f64 {
    clamp_range(radius, MIN_RADIUS, MAX_RADIUS)
}

/// Rectangle size constrained per axis to the new-shape control range.
#[must_use]
pub fn clamp_size(size: Vec2) -> Vec2 {
    Vec2::new(
        clamp_range(size.x, MIN_RECT_EXTENT, MAX_RECT_EXTENT),
        clamp_range(size.y, MIN_RECT_EXTENT, MAX_RECT_EXTENT),
    )
}
