//! Shared numeric constants for the canvas crate.

// ── Selection highlight ─────────────────────────────────────────

/// Stroke width of the selection outline.
pub const HIGHLIGHT_THICKNESS: f64 = 2.0;

/// Distance the selection outline sits outside the shape boundary.
pub const HIGHLIGHT_OFFSET: f64 = 2.0;

// ── Clipboard ───────────────────────────────────────────────────

/// Default translation applied to a pasted shape.
pub const PASTE_OFFSET: f64 = 20.0;

/// Suffix appended to the name of every pasted shape.
pub const COPY_SUFFIX: &str = " (Copy)";

// ── Canvas ──────────────────────────────────────────────────────

/// Smallest canvas extent per axis; hosts reporting less are clamped up.
pub const MIN_CANVAS_EXTENT: f64 = 50.0;

/// Width of the canvas border stroke.
pub const CANVAS_BORDER_THICKNESS: f64 = 1.0;

// ── New-shape slider ranges ─────────────────────────────────────

pub const MIN_RADIUS: f64 = 10.0;
pub const MAX_RADIUS: f64 = 150.0;
pub const MIN_RECT_EXTENT: f64 = 10.0;
pub const MAX_RECT_EXTENT: f64 = 200.0;

// ── Preview ─────────────────────────────────────────────────────

/// Default per-frame rotation about the X axis, in radians.
pub const ROTATION_SPEED_X: f64 = 0.010;

/// Default per-frame rotation about the Y axis, in radians.
pub const ROTATION_SPEED_Y: f64 = 0.015;

/// Default perspective distance.
pub const FOCAL_LENGTH: f64 = 600.0;

/// `focal + z` never drops below this fraction of the focal length.
pub const MIN_DEPTH_FRACTION: f64 = 0.1;

/// Shadow displacement at unit scale.
pub const SHADOW_OFFSET: f64 = 8.0;

/// Depth shading clamps.
pub const MIN_SHADE: f64 = 0.55;
pub const MAX_SHADE: f64 = 1.15;

/// Blend toward white for the preview highlight spot.
pub const PREVIEW_HIGHLIGHT_MIX: f32 = 0.5;

/// Circle highlight: spot center offset and radius, as fractions of the projected radius.
pub const PREVIEW_SPOT_OFFSET: f64 = 0.35;
pub const PREVIEW_SPOT_RADIUS: f64 = 0.3;

/// Quad highlight: fraction each corner moves toward the centroid.
pub const PREVIEW_QUAD_INSET: f64 = 0.4;

/// Quad highlight: upper-left nudge at unit scale.
pub const PREVIEW_QUAD_NUDGE: f64 = 4.0;
