//! Input model: mouse buttons, editor mode, the gesture state machine, and
//! the context menu.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. A drag remembers the canvas-local pointer position of the
//! previous event so each move applies only the incremental delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Editing mode, orthogonal to the gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Select, drag, and edit shapes.
    #[default]
    #[serde(rename = "edit2d")]
    Edit2D,
    /// Read-only rotating preview; all selection input is ignored.
    #[serde(rename = "preview3d")]
    Preview3D,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit2D => Self::Preview3D,
            Self::Preview3D => Self::Edit2D,
        }
    }
}

/// Internal state for the pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No pointer seen over the canvas since the last release.
    #[default]
    Idle,
    /// The pointer is over the canvas with no button held.
    Hovering {
        /// Canvas-local pointer position.
        last: Point,
    },
    /// The primary button is held on a selected shape.
    Dragging {
        /// Registry index of the shape being dragged.
        index: usize,
        /// Canvas-local pointer position at the previous event.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Commands offered by the canvas context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCommand {
    Cut,
    Copy,
    Paste,
    Delete,
}

impl MenuCommand {
    /// Every command in menu order.
    pub const ALL: [MenuCommand; 4] = [Self::Cut, Self::Copy, Self::Paste, Self::Delete];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::Delete => "Delete",
        }
    }
}

/// One entry in the context menu, with its availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub command: MenuCommand,
    pub enabled: bool,
}

/// Context menu visibility, kept as editor session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContextMenu {
    pub open: bool,
    /// Canvas-local position the menu was opened at.
    pub anchor: Point,
}

impl ContextMenu {
    pub fn open_at(&mut self, anchor: Point) {
        self.open = true;
        self.anchor = anchor;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
