//! Shape registry: the ordered store of every shape on the canvas, plus the
//! single selection.
//!
//! Insertion order is z-order. Index 0 is drawn first (bottom) and the last
//! index is drawn last (top); hit-testing walks the other way. Selection is
//! an optional index kept consistent with each shape's `selected` flag:
//! whenever an index is set, that shape's flag is true and every other flag
//! is false. Any removal at or below the selected index clears or renumbers
//! the selection.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use tracing::{debug, warn};

use crate::error::CanvasError;
use crate::hit;
use crate::shape::{Shape, ShapeId};
use crate::viewport::{Point, Vec2};

/// Owns every shape on the canvas in z-order.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
    selected: Option<usize>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Enumeration ---

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All shapes, bottom first.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Edit the shape at `index` in place. Returns `None` when out of range.
    ///
    /// The selected flag and identity stay registry-owned: once `f` returns,
    /// the flag is reset to match the selection and a duplicated id is
    /// replaced, even if `f` swapped in a whole new value.
    pub fn edit<R>(&mut self, index: usize, f: impl FnOnce(&mut Shape) -> R) -> Option<R> {
        let shape = self.shapes.get_mut(index)?;
        let out = f(shape);
        let selected = self.selected == Some(index);
        let id = shape.id();
        shape.set_selected(selected);
        let collides = self.shapes.iter().enumerate().any(|(i, other)| i != index && other.id() == id);
        if collides {
            debug!(index, "edited shape reused an existing id");
            if let Some(shape) = self.shapes.get_mut(index) {
                shape.renew_id();
            }
        }
        Some(out)
    }

    /// Position of the shape with the given id.
    #[must_use]
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    // --- Insertion ---

    /// Append a shape on top and make it the sole selection.
    ///
    /// A shape whose id already exists in the registry is given a fresh one,
    /// so entries never share identity.
    pub fn add(&mut self, mut shape: Shape) -> usize {
        if self.index_of(shape.id()).is_some() {
            shape.renew_id();
        }
        shape.set_selected(false);
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        self.set_selection(Some(index));
        debug!(index, "shape added");
        index
    }

    // --- Selection ---

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    fn selected_mut(&mut self) -> Option<&mut Shape> {
        self.selected.and_then(|i| self.shapes.get_mut(i))
    }

    /// Make `index` the sole selection.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::IndexOutOfRange`] and leaves the current
    /// selection untouched when `index` is past the end.
    pub fn select(&mut self, index: usize) -> Result<(), CanvasError> {
        if index >= self.shapes.len() {
            warn!(index, len = self.shapes.len(), "select out of range");
            return Err(CanvasError::IndexOutOfRange { index, len: self.shapes.len() });
        }
        self.set_selection(Some(index));
        Ok(())
    }

    /// Clear the selection, if any.
    pub fn deselect(&mut self) {
        self.set_selection(None);
    }

    fn set_selection(&mut self, index: Option<usize>) {
        if let Some(shape) = self.selected.and_then(|i| self.shapes.get_mut(i)) {
            shape.set_selected(false);
        }
        self.selected = index;
        if let Some(shape) = index.and_then(|i| self.shapes.get_mut(i)) {
            shape.set_selected(true);
        }
    }

    // --- Removal ---

    /// Remove the selected shape and hand it back. Selection becomes none.
    pub fn take_selected(&mut self) -> Option<Shape> {
        let index = self.selected.take()?;
        let shape = self.shapes.remove(index);
        debug!(index, "selected shape removed");
        Some(shape)
    }

    /// Delete the selected shape. Returns `false` when nothing was selected.
    pub fn delete_selected(&mut self) -> bool {
        self.take_selected().is_some()
    }

    /// Remove the shape at `index`, renumbering the selection to follow it.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::IndexOutOfRange`] when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<Shape, CanvasError> {
        if index >= self.shapes.len() {
            return Err(CanvasError::IndexOutOfRange { index, len: self.shapes.len() });
        }
        let shape = self.shapes.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        debug!(index, "shape removed");
        Ok(shape)
    }

    /// Drop every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    // --- Geometry ---

    /// Index of the topmost shape containing the canvas-local point.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        hit::hit_test(&self.shapes, pt)
    }

    /// Move the selected shape by `delta`, then clamp it inside `bounds`.
    ///
    /// Returns `false` when nothing is selected.
    pub fn drag(&mut self, delta: Vec2, bounds: Vec2) -> bool {
        let Some(shape) = self.selected_mut() else {
            return false;
        };
        shape.translate(delta);
        shape.clamp_position(bounds);
        true
    }
}
