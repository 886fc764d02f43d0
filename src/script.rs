//! Session scripts: one JSON event per line.
//!
//! Blank lines and lines starting with `#` are skipped. Every event carries
//! an `op` tag, e.g.
//!
//! ```text
//! {"op":"viewport","x":300,"y":40,"width":700,"height":560}
//! {"op":"add_circle","x":100,"y":100,"radius":40,"name":"Ball"}
//! {"op":"pointer_down","x":400,"y":140}
//! {"op":"pointer_move","x":420,"y":150}
//! {"op":"pointer_up","x":420,"y":150}
//! {"op":"command","command":"copy"}
//! {"op":"frame","count":3}
//! ```
//!
//! Pointer coordinates are host-screen positions; shape positions are
//! canvas-local.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use canvas::color::Color;
use canvas::input::{Button, MenuCommand, Mode};
use serde::Deserialize;

use crate::error::HostError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Place and size the canvas inside the host surface.
    Viewport { x: f64, y: f64, width: f64, height: f64 },
    AddCircle {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default)]
        color: Color,
        #[serde(default)]
        name: String,
    },
    AddRectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        color: Color,
        #[serde(default)]
        name: String,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: Button,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: Button,
    },
    /// Run a context-menu command (closes the menu if open).
    Command { command: MenuCommand },
    Select { index: usize },
    Deselect,
    Mode { mode: Mode },
    ToggleMode,
    RotationSpeed { x: f64, y: f64 },
    /// Run `count` idle frames.
    Frame {
        #[serde(default = "one")]
        count: u32,
    },
}

fn primary() -> Button {
    Button::Primary
}

fn one() -> u32 {
    1
}

/// Parse a whole script, reporting the 1-based line of the first bad event.
///
/// # Errors
///
/// Returns [`HostError::Parse`] for the first line that is not a valid event.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>, HostError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(i, line)| serde_json::from_str(line).map_err(|source| HostError::Parse { line: i + 1, source }))
        .collect()
}
