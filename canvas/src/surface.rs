//! Drawing surface abstraction.
//!
//! The engine never touches a graphics API directly. Everything it paints
//! goes through [`Surface`], which exposes exactly the primitives the shape
//! model needs. Coordinates passed to a surface are already in host-screen
//! space; shapes add the canvas origin themselves.
//!
//! [`DrawList`] is an in-memory recording surface. Headless hosts and tests
//! use it to inspect what a frame would have drawn.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use crate::color::Color;
use crate::viewport::Point;

/// Primitive painting operations consumed by the render pass.
pub trait Surface {
    /// Failure reported by the backing graphics API.
    type Error;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), Self::Error>;

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64) -> Result<(), Self::Error>;

    /// Fill the axis-aligned rectangle spanning `min`..`max`.
    fn fill_rect(&mut self, min: Point, max: Point, color: Color) -> Result<(), Self::Error>;

    fn stroke_rect(&mut self, min: Point, max: Point, color: Color, thickness: f64) -> Result<(), Self::Error>;

    /// Fill a convex polygon given in winding order.
    fn fill_convex_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error>;
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillCircle { center: Point, radius: f64, color: Color },
    StrokeCircle { center: Point, radius: f64, color: Color, thickness: f64 },
    FillRect { min: Point, max: Point, color: Color },
    StrokeRect { min: Point, max: Point, color: Color, thickness: f64 },
    FillPolygon { points: Vec<Point>, color: Color },
}

/// Recording surface: appends every call to an ordered command list.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in submission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Drop all recorded commands, typically at the start of a frame.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::FillCircle { center, radius, color });
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::StrokeCircle { center, radius, color, thickness });
        Ok(())
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::FillRect { min, max, color });
        Ok(())
    }

    fn stroke_rect(&mut self, min: Point, max: Point, color: Color, thickness: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::StrokeRect { min, max, color, thickness });
        Ok(())
    }

    fn fill_convex_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::FillPolygon { points: points.to_vec(), color });
        Ok(())
    }
}
