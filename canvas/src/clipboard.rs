//! Single-slot clipboard holding a detached shape snapshot.
//!
//! The clipboard owns its shape outright. `copy` clones, `store` takes
//! ownership of a shape already removed from the registry (cut), and every
//! paste clones again, so nothing here ever aliases a live registry entry.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use tracing::debug;

use crate::consts::COPY_SUFFIX;
use crate::shape::Shape;
use crate::viewport::Vec2;

#[derive(Debug, Clone, Default)]
pub struct ShapeClipboard {
    shape: Option<Shape>,
}

impl ShapeClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `shape`, or empty the clipboard when given `None`.
    pub fn copy(&mut self, shape: Option<&Shape>) {
        self.shape = shape.cloned();
        debug!(occupied = self.shape.is_some(), "clipboard copy");
    }

    /// Take ownership of a shape that has left the registry.
    pub fn store(&mut self, shape: Shape) {
        self.shape = Some(shape);
        debug!("clipboard store");
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        self.shape.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape.is_none()
    }

    /// The stored snapshot, read-only.
    #[must_use]
    pub fn peek(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn clear(&mut self) {
        self.shape = None;
    }

    /// A fresh shape for pasting: the snapshot moved by `offset`, renamed
    /// with the copy suffix, and given a new identity.
    ///
    /// Returns `None` when the clipboard is empty. The caller inserts the
    /// result into the registry.
    #[must_use]
    pub fn create_pasted_shape(&self, offset: Vec2) -> Option<Shape> {
        let mut pasted = self.shape.clone()?;
        pasted.translate(offset);
        let name = format!("{}{COPY_SUFFIX}", pasted.name());
        pasted.set_name(name);
        pasted.set_selected(false);
        pasted.renew_id();
        Some(pasted)
    }
}
