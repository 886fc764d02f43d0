//! Shape variants and their geometry.
//!
//! Every shape carries the same editable attributes (position, color, name,
//! selection flag, identity) plus one variant-specific extent. The variants
//! deliberately anchor differently:
//!
//! - [`Circle`]: `position` is the geometric center.
//! - [`Rectangle`]: `position` is the top-left corner.
//!
//! Hit-testing and clamping are written per variant against those anchors.
//!
//! [`Shape`] is the closed variant type the registry and clipboard own.
//! `Clone` is derived on each variant and on `Shape`, so cloning a `Shape`
//! always produces an independent value of the same concrete variant.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;
use crate::consts::{HIGHLIGHT_OFFSET, HIGHLIGHT_THICKNESS};
use crate::surface::Surface;
use crate::viewport::{Point, Vec2};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Which variant a shape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    /// Name given to a shape created with an empty name.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
        }
    }

    /// Short tag used in shape listings.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rect",
        }
    }
}

fn name_or_default(name: String, kind: ShapeKind) -> String {
    if name.is_empty() { kind.default_name().to_owned() } else { name }
}

// =============================================================
// Circle
// =============================================================

/// A filled circle anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: ShapeId,
    /// Center in canvas-local coordinates.
    pub position: Point,
    pub radius: f64,
    pub color: Color,
    pub name: String,
    selected: bool,
}

impl Circle {
    /// Create an unselected circle. An empty `name` becomes `"Circle"`.
    ///
    /// `radius` is not validated here; callers clamp it before construction.
    #[must_use]
    pub fn new(position: Point, radius: f64, color: Color, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            radius,
            color,
            name: name_or_default(name.into(), ShapeKind::Circle),
            selected: false,
        }
    }

    /// Inclusive disc test: `dx² + dy² <= r²`.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let dx = pt.x - self.position.x;
        let dy = pt.y - self.position.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Center constrained to `[r, bounds - r]` per axis.
    ///
    /// When the circle is wider than the canvas the lower bound wins, so the
    /// center never sits closer than `r` to the top-left edges.
    #[must_use]
    pub fn clamped_position(&self, bounds: Vec2) -> Point {
        let r = self.radius;
        Point::new(
            self.position.x.min(bounds.x - r).max(r),
            self.position.y.min(bounds.y - r).max(r),
        )
    }

    /// Paint the disc, plus the selection ring when selected.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the surface.
    pub fn draw<S: Surface>(&self, surface: &mut S, origin: Point) -> Result<(), S::Error> {
        let center = origin + self.position.to_vec();
        surface.fill_circle(center, self.radius, self.color)?;
        if self.selected {
            surface.stroke_circle(center, self.radius + HIGHLIGHT_OFFSET, Color::HIGHLIGHT, HIGHLIGHT_THICKNESS)?;
        }
        Ok(())
    }
}

// =============================================================
// Rectangle
// =============================================================

/// A filled axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: ShapeId,
    /// Top-left corner in canvas-local coordinates.
    pub position: Point,
    /// Width and height.
    pub size: Vec2,
    pub color: Color,
    pub name: String,
    selected: bool,
}

impl Rectangle {
    /// Create an unselected rectangle. An empty `name` becomes `"Rectangle"`.
    ///
    /// `size` is not validated here; callers clamp it before construction.
    #[must_use]
    pub fn new(position: Point, size: Vec2, color: Color, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            color,
            name: name_or_default(name.into(), ShapeKind::Rectangle),
            selected: false,
        }
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Point {
        self.position + self.size
    }

    /// Inclusive bounds test on both axes.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let max = self.max();
        pt.x >= self.position.x && pt.x <= max.x && pt.y >= self.position.y && pt.y <= max.y
    }

    /// Top-left corner constrained to `[0, bounds - size]` per axis.
    #[must_use]
    pub fn clamped_position(&self, bounds: Vec2) -> Point {
        Point::new(
            self.position.x.min(bounds.x - self.size.x).max(0.0),
            self.position.y.min(bounds.y - self.size.y).max(0.0),
        )
    }

    /// Paint the body, plus an outline 2 units outside it when selected.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the surface.
    pub fn draw<S: Surface>(&self, surface: &mut S, origin: Point) -> Result<(), S::Error> {
        let min = origin + self.position.to_vec();
        let max = min + self.size;
        surface.fill_rect(min, max, self.color)?;
        if self.selected {
            let pad = Vec2::splat(HIGHLIGHT_OFFSET);
            surface.stroke_rect(min - pad, max + pad, Color::HIGHLIGHT, HIGHLIGHT_THICKNESS)?;
        }
        Ok(())
    }
}

// =============================================================
// Shape
// =============================================================

/// Any shape that can live on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl Shape {
    #[must_use]
    pub fn id(&self) -> ShapeId {
        match self {
            Self::Circle(c) => c.id,
            Self::Rectangle(r) => r.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Anchor point: center for circles, top-left corner for rectangles.
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Circle(c) => c.position,
            Self::Rectangle(r) => r.position,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Self::Circle(c) => c.position = position,
            Self::Rectangle(r) => r.position = position,
        }
    }

    /// Move the anchor by `delta` without clamping.
    pub fn translate(&mut self, delta: Vec2) {
        let moved = self.position() + delta;
        self.set_position(moved);
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Circle(c) => c.color,
            Self::Rectangle(r) => r.color,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Self::Circle(c) => c.color = color,
            Self::Rectangle(r) => r.color = color,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Circle(c) => &c.name,
            Self::Rectangle(r) => &r.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Self::Circle(c) => c.name = name,
            Self::Rectangle(r) => r.name = name,
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        match self {
            Self::Circle(c) => c.selected,
            Self::Rectangle(r) => r.selected,
        }
    }

    /// Only the registry flips this, so the single-selection invariant holds.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        match self {
            Self::Circle(c) => c.selected = selected,
            Self::Rectangle(r) => r.selected = selected,
        }
    }

    /// Replace the identity with a fresh one.
    pub(crate) fn renew_id(&mut self) {
        let id = Uuid::new_v4();
        match self {
            Self::Circle(c) => c.id = id,
            Self::Rectangle(r) => r.id = id,
        }
    }

    /// Whether a canvas-local point lies on or inside the shape.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Circle(c) => c.contains(pt),
            Self::Rectangle(r) => r.contains(pt),
        }
    }

    /// The anchor this shape would have after clamping into `[0, bounds]`.
    #[must_use]
    pub fn clamped_position(&self, bounds: Vec2) -> Point {
        match self {
            Self::Circle(c) => c.clamped_position(bounds),
            Self::Rectangle(r) => r.clamped_position(bounds),
        }
    }

    /// Clamp the anchor in place so the shape stays inside `[0, bounds]`.
    pub fn clamp_position(&mut self, bounds: Vec2) {
        let clamped = self.clamped_position(bounds);
        self.set_position(clamped);
    }

    /// Paint the shape translated by the canvas origin.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the surface.
    pub fn draw<S: Surface>(&self, surface: &mut S, origin: Point) -> Result<(), S::Error> {
        match self {
            Self::Circle(c) => c.draw(surface, origin),
            Self::Rectangle(r) => r.draw(surface, origin),
        }
    }

    /// One-line listing entry, e.g. `"Blue Rect (Rect @ 200,50)"`.
    #[must_use]
    pub fn label(&self) -> String {
        let pos = self.position();
        format!("{} ({} @ {:.0},{:.0})", self.name(), self.kind().short_label(), pos.x, pos.y)
    }

    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Rectangle(_) => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Rectangle(_) => None,
        }
    }

    #[must_use]
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Self::Rectangle(r) => Some(r),
            Self::Circle(_) => None,
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Self::Rectangle(r) => Some(r),
            Self::Circle(_) => None,
        }
    }
}
