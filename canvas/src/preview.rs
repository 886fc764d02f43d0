//! Rotating perspective preview.
//!
//! Presentation only: shapes are read, projected, and painted, never
//! modified. Each anchor point is taken relative to the canvas center,
//! lifted to `z = 0`, rotated about X by `angle_x` and then about Y by
//! `angle_y`, and projected with `scale = f / (f + z)`.
//!
//! Each projected shape draws as shadow, then depth-shaded body, then a
//! lighter highlight spot. Shapes are painted back to front by mean depth.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::color::Color;
use crate::config::EditorConfig;
use crate::consts::{
    MAX_SHADE, MIN_DEPTH_FRACTION, MIN_SHADE, PREVIEW_HIGHLIGHT_MIX, PREVIEW_QUAD_INSET, PREVIEW_QUAD_NUDGE,
    PREVIEW_SPOT_OFFSET, PREVIEW_SPOT_RADIUS, SHADOW_OFFSET,
};
use crate::shape::Shape;
use crate::surface::Surface;
use crate::viewport::{Point, Vec2, Viewport};

/// Rotation angles and speeds for the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewState {
    /// Rotation about the X axis, in `[0, 2π)`.
    pub angle_x: f64,
    /// Rotation about the Y axis, in `[0, 2π)`.
    pub angle_y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub focal_length: f64,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl PreviewState {
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            speed_x: config.rotation_speed_x,
            speed_y: config.rotation_speed_y,
            focal_length: config.focal_length,
        }
    }

    /// Step both angles by one frame, wrapping at 2π.
    pub fn advance(&mut self) {
        self.angle_x = (self.angle_x + self.speed_x).rem_euclid(TAU);
        self.angle_y = (self.angle_y + self.speed_y).rem_euclid(TAU);
    }

    /// Return both angles to zero. Speeds are kept.
    pub fn reset(&mut self) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
    }

    /// Project a canvas-local point about `center`.
    #[must_use]
    pub fn project(&self, pt: Point, center: Point) -> Projected {
        let x = pt.x - center.x;
        let y = pt.y - center.y;

        let (sin_x, cos_x) = self.angle_x.sin_cos();
        let y1 = y * cos_x;
        let z1 = y * sin_x;

        let (sin_y, cos_y) = self.angle_y.sin_cos();
        let x2 = x * cos_y + z1 * sin_y;
        let z2 = -x * sin_y + z1 * cos_y;

        let f = self.focal_length;
        let scale = f / (f + z2).max(MIN_DEPTH_FRACTION * f);
        Projected {
            point: Point::new(center.x + x2 * scale, center.y + y1 * scale),
            depth: z2,
            scale,
        }
    }

    fn project_shape(&self, shape: &Shape, center: Point) -> ProjectedShape {
        match shape {
            Shape::Circle(c) => {
                let p = self.project(c.position, center);
                ProjectedShape {
                    outline: Outline::Disc { center: p.point, radius: c.radius * p.scale },
                    depth: p.depth,
                    scale: p.scale,
                    color: c.color,
                }
            }
            Shape::Rectangle(r) => {
                let min = r.position;
                let max = r.max();
                let corners = [min, Point::new(max.x, min.y), max, Point::new(min.x, max.y)].map(|p| self.project(p, center));
                let depth = corners.iter().map(|p| p.depth).sum::<f64>() / 4.0;
                let scale = corners.iter().map(|p| p.scale).sum::<f64>() / 4.0;
                ProjectedShape {
                    outline: Outline::Quad(corners.map(|p| p.point)),
                    depth,
                    scale,
                    color: r.color,
                }
            }
        }
    }
}

/// One projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Canvas-local projected position.
    pub point: Point,
    /// Rotated z; larger is farther away.
    pub depth: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outline {
    Disc { center: Point, radius: f64 },
    Quad([Point; 4]),
}

impl Outline {
    fn translated(self, by: Vec2) -> Self {
        match self {
            Self::Disc { center, radius } => Self::Disc { center: center + by, radius },
            Self::Quad(pts) => Self::Quad(pts.map(|p| p + by)),
        }
    }

    fn fill<S: Surface>(self, surface: &mut S, color: Color) -> Result<(), S::Error> {
        match self {
            Self::Disc { center, radius } => surface.fill_circle(center, radius, color),
            Self::Quad(pts) => surface.fill_convex_polygon(&pts, color),
        }
    }

    /// Smaller spot toward the upper-left of the outline.
    fn highlight(self, scale: f64) -> Self {
        match self {
            Self::Disc { center, radius } => Self::Disc {
                center: center - Vec2::splat(PREVIEW_SPOT_OFFSET * radius),
                radius: radius * PREVIEW_SPOT_RADIUS,
            },
            Self::Quad(pts) => {
                let sum = pts.iter().fold(Vec2::default(), |acc, p| acc + p.to_vec());
                let centroid = Point::new(sum.x / 4.0, sum.y / 4.0);
                let nudge = -Vec2::splat(PREVIEW_QUAD_NUDGE * scale);
                Self::Quad(pts.map(|p| p + (centroid - p) * PREVIEW_QUAD_INSET + nudge))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ProjectedShape {
    outline: Outline,
    depth: f64,
    scale: f64,
    color: Color,
}

/// Depth brightness factor for a projected scale.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn shade_factor(scale: f64) -> f32 {
    scale.clamp(MIN_SHADE, MAX_SHADE) as f32
}

/// Paint every shape through the preview projection.
///
/// # Errors
///
/// Propagates any failure from the surface.
pub fn draw_preview<S: Surface>(
    shapes: &[Shape],
    viewport: &Viewport,
    state: &PreviewState,
    surface: &mut S,
) -> Result<(), S::Error> {
    let center = viewport.center();
    let mut projected: Vec<ProjectedShape> = shapes.iter().map(|s| state.project_shape(s, center)).collect();
    // Farthest first; sort_by is stable so equal depths keep registry order.
    projected.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));

    let origin = viewport.origin.to_vec();
    for shape in projected {
        let outline = shape.outline.translated(origin);
        let shadow = outline.translated(Vec2::splat(SHADOW_OFFSET * shape.scale));
        shadow.fill(surface, Color::SHADOW)?;

        let body = shape.color.shade(shade_factor(shape.scale));
        outline.fill(surface, body)?;

        let spot = body.mix(Color::WHITE, PREVIEW_HIGHLIGHT_MIX);
        outline.highlight(shape.scale).fill(surface, spot)?;
    }
    Ok(())
}
