//! Rendering: draws the full canvas scene to a [`Surface`].
//!
//! [`draw_scene`] is generic over the surface so headless hosts record into a
//! [`crate::surface::DrawList`] while the browser build paints through
//! [`CanvasSurface`]. This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It reads the registry and preview
//! state and never mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::consts::CANVAS_BORDER_THICKNESS;
use crate::input::Mode;
use crate::preview::{self, PreviewState};
use crate::registry::ShapeRegistry;
use crate::surface::Surface;
use crate::viewport::{Point, Viewport};

/// Draw one frame: canvas chrome, then every shape.
///
/// In [`Mode::Edit2D`] shapes are painted in registry order, bottom first, so
/// later insertions land on top. In [`Mode::Preview3D`] they go through the
/// preview projection instead.
///
/// # Errors
///
/// Propagates any failure from the surface.
pub fn draw_scene<S: Surface>(
    registry: &ShapeRegistry,
    viewport: &Viewport,
    mode: Mode,
    preview: &PreviewState,
    surface: &mut S,
) -> Result<(), S::Error> {
    // Layer 1: background and border.
    let min = viewport.origin;
    let max = min + viewport.size;
    surface.fill_rect(min, max, Color::CANVAS_BACKGROUND)?;
    surface.stroke_rect(min, max, Color::WHITE, CANVAS_BORDER_THICKNESS)?;

    // Layer 2: shapes.
    match mode {
        Mode::Edit2D => {
            for shape in registry.iter() {
                shape.draw(surface, viewport.origin)?;
            }
            Ok(())
        }
        Mode::Preview3D => preview::draw_preview(registry.shapes(), viewport, preview, surface),
    }
}

// =============================================================
// Canvas2D adapter
// =============================================================

/// [`Surface`] backed by a browser 2D canvas context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Point, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.circle_path(center, radius)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(thickness);
        self.circle_path(center, radius)?;
        self.ctx.stroke();
        Ok(())
    }

    fn fill_rect(&mut self, min: Point, max: Point, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(min.x, min.y, max.x - min.x, max.y - min.y);
        Ok(())
    }

    fn stroke_rect(&mut self, min: Point, max: Point, color: Color, thickness: f64) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(thickness);
        self.ctx.stroke_rect(min.x, min.y, max.x - min.x, max.y - min.y);
        Ok(())
    }

    fn fill_convex_polygon(&mut self, points: &[Point], color: Color) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }
}
