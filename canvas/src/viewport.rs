#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::MIN_CANVAS_EXTENT;

/// A point in either host-screen or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector from the origin to this point.
    #[must_use]
    pub fn to_vec(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A 2D displacement or extent (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Vec2> for Point {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec2) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Placement of the drawing canvas inside the host surface.
///
/// `origin` is the canvas's top-left corner in host-screen coordinates and
/// `size` is the available drawing area. Shapes live in canvas-local space,
/// so every pointer position is translated by `origin` before hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Point,
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            size: Vec2::splat(MIN_CANVAS_EXTENT),
        }
    }
}

impl Viewport {
    /// Build a viewport, clamping each axis of `size` up to `min_extent`.
    #[must_use]
    pub fn new(origin: Point, size: Vec2, min_extent: f64) -> Self {
        Self {
            origin,
            size: Vec2::new(size.x.max(min_extent), size.y.max(min_extent)),
        }
    }

    /// Convert a host-screen point to canvas-local coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }

    /// Convert a canvas-local point to host-screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, local: Point) -> Point {
        Point::new(local.x + self.origin.x, local.y + self.origin.y)
    }

    /// Whether a host-screen point falls inside the canvas rectangle (edges inclusive).
    #[must_use]
    pub fn contains_screen(&self, screen: Point) -> bool {
        let local = self.screen_to_canvas(screen);
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.x && local.y <= self.size.y
    }

    /// Canvas-local center of the drawing area.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.x * 0.5, self.size.y * 0.5)
    }
}
