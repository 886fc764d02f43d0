//! Editor engine: pointer orchestration, commands, and mode switching.
//!
//! [`EditorCore`] holds every piece of editor session state and is testable
//! without a browser. [`Engine`] wraps it together with the canvas element it
//! paints into.
//!
//! Input handlers return a list of [`Action`]s describing what changed. An
//! empty list means the event was a no-op.

use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::clipboard::ShapeClipboard;
use crate::color::Color;
use crate::config::{self, CreationSettings, EditorConfig};
use crate::error::CanvasError;
use crate::input::{Button, ContextMenu, InputState, MenuCommand, MenuItem, Mode};
use crate::preview::PreviewState;
use crate::registry::ShapeRegistry;
use crate::render::{self, CanvasSurface};
use crate::shape::{Circle, Rectangle, Shape, ShapeId};
use crate::surface::Surface;
use crate::viewport::{Point, Vec2, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectionChanged { index: Option<usize> },
    ShapeAdded { index: usize, id: ShapeId },
    ShapeRemoved { id: ShapeId },
    ShapeMoved { index: usize, position: Point },
    ClipboardChanged,
    ContextMenuOpened { anchor: Point },
    ContextMenuClosed,
    ModeChanged(Mode),
    RenderNeeded,
}

/// Core editor state. Everything here is independent of the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub registry: ShapeRegistry,
    pub clipboard: ShapeClipboard,
    pub input: InputState,
    pub mode: Mode,
    pub preview: PreviewState,
    pub viewport: Viewport,
    pub menu: ContextMenu,
    pub config: EditorConfig,
    pub creation: CreationSettings,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor with non-default tunables.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: EditorConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self {
            preview: PreviewState::from_config(&config),
            viewport: Viewport::new(Point::default(), Vec2::default(), config.min_canvas_extent),
            config,
            ..Self::default()
        })
    }

    /// Seed the two starter shapes, leaving nothing selected.
    #[must_use]
    pub fn with_demo_scene(mut self) -> Self {
        self.registry.add(Shape::from(Circle::new(Point::new(100.0, 100.0), 50.0, Color::GREEN, "Green Circle")));
        self.registry.add(Shape::from(Rectangle::new(
            Point::new(200.0, 50.0),
            Vec2::new(100.0, 70.0),
            Color::BLUE,
            "Blue Rect",
        )));
        self.registry.deselect();
        self
    }

    // --- Frame inputs ---

    /// Refresh the canvas placement. Hosts call this once per frame.
    pub fn set_viewport(&mut self, origin: Point, size: Vec2) {
        self.viewport = Viewport::new(origin, size, self.config.min_canvas_extent);
    }

    /// Change the preview rotation speeds, in radians per frame.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] and keeps the current speeds
    /// when either value is not finite.
    pub fn set_rotation_speed(&mut self, speed_x: f64, speed_y: f64) -> Result<(), CanvasError> {
        config::ensure_finite("rotation_speed_x", speed_x)?;
        config::ensure_finite("rotation_speed_y", speed_y)?;
        self.config.rotation_speed_x = speed_x;
        self.config.rotation_speed_y = speed_y;
        self.preview.speed_x = speed_x;
        self.preview.speed_y = speed_y;
        Ok(())
    }

    /// Step per-frame animation. Only the preview animates.
    pub fn advance_frame(&mut self) {
        if self.mode == Mode::Preview3D {
            self.preview.advance();
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.registry.shapes()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.registry.selected_index()
    }

    /// Edit one shape's properties through `f`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::IndexOutOfRange`] when `index` is past the end.
    pub fn edit_shape<R>(&mut self, index: usize, f: impl FnOnce(&mut Shape) -> R) -> Result<R, CanvasError> {
        let len = self.registry.len();
        self.registry.edit(index, f).ok_or(CanvasError::IndexOutOfRange { index, len })
    }

    // --- Shape creation ---

    /// Add a circle on top and select it. `radius` is clamped to the creation range.
    pub fn add_circle(&mut self, position: Point, radius: f64, color: Color, name: &str) -> Vec<Action> {
        let circle = Circle::new(position, config::clamp_radius(radius), color, name);
        self.add_shape(Shape::from(circle))
    }

    /// Add a rectangle on top and select it. `size` is clamped to the creation range.
    pub fn add_rectangle(&mut self, position: Point, size: Vec2, color: Color, name: &str) -> Vec<Action> {
        let rect = Rectangle::new(position, config::clamp_size(size), color, name);
        self.add_shape(Shape::from(rect))
    }

    /// Add a circle from the creation settings, then clear the pending name.
    pub fn add_circle_from_settings(&mut self) -> Vec<Action> {
        let shape = Shape::from(self.creation.circle());
        self.creation.name.clear();
        self.add_shape(shape)
    }

    /// Add a rectangle from the creation settings, then clear the pending name.
    pub fn add_rectangle_from_settings(&mut self) -> Vec<Action> {
        let shape = Shape::from(self.creation.rectangle());
        self.creation.name.clear();
        self.add_shape(shape)
    }

    fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        if self.mode == Mode::Preview3D {
            debug!("add ignored in preview");
            return Vec::new();
        }
        let index = self.registry.add(shape);
        let Some(added) = self.registry.get(index) else {
            return Vec::new();
        };
        info!(index, name = added.name(), kind = ?added.kind(), "shape added");
        vec![
            Action::ShapeAdded { index, id: added.id() },
            Action::SelectionChanged { index: Some(index) },
            Action::RenderNeeded,
        ]
    }

    // --- Selection ---

    /// Select a shape by index. Ignored in preview mode.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::IndexOutOfRange`] when `index` is past the end.
    pub fn select(&mut self, index: usize) -> Result<Vec<Action>, CanvasError> {
        if self.mode == Mode::Preview3D {
            return Ok(Vec::new());
        }
        let before = self.registry.selected_index();
        self.registry.select(index)?;
        Ok(self.selection_actions(before))
    }

    pub fn deselect(&mut self) -> Vec<Action> {
        let before = self.registry.selected_index();
        self.registry.deselect();
        self.selection_actions(before)
    }

    fn selection_actions(&self, before: Option<usize>) -> Vec<Action> {
        let after = self.registry.selected_index();
        if before == after {
            return Vec::new();
        }
        debug!(?before, ?after, "selection changed");
        vec![Action::SelectionChanged { index: after }, Action::RenderNeeded]
    }

    // --- Input events ---

    /// Handle a button press at a host-screen position.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if self.mode == Mode::Preview3D {
            return Vec::new();
        }
        let inside = self.viewport.contains_screen(screen_pt);
        let local = self.viewport.screen_to_canvas(screen_pt);

        match button {
            Button::Primary => {
                let mut actions = self.close_menu();
                if !inside {
                    return actions;
                }
                let before = self.registry.selected_index();
                match self.registry.hit_test(local) {
                    Some(index) => {
                        if let Err(err) = self.registry.select(index) {
                            warn!(%err, "hit index rejected");
                        }
                    }
                    None => self.registry.deselect(),
                }
                actions.extend(self.selection_actions(before));

                self.input = match self.registry.selected_index() {
                    Some(index) => {
                        debug!(index, "drag start");
                        InputState::Dragging { index, last: local }
                    }
                    None => InputState::Hovering { last: local },
                };
                actions
            }
            Button::Secondary => {
                if !inside {
                    return Vec::new();
                }
                self.menu.open_at(local);
                debug!(x = local.x, y = local.y, "context menu opened");
                vec![Action::ContextMenuOpened { anchor: local }, Action::RenderNeeded]
            }
            Button::Middle => Vec::new(),
        }
    }

    /// Handle pointer motion at a host-screen position.
    ///
    /// While dragging, the selected shape moves by the incremental delta since
    /// the previous event and is then clamped to the canvas.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.mode == Mode::Preview3D {
            return Vec::new();
        }
        let local = self.viewport.screen_to_canvas(screen_pt);

        match self.input {
            InputState::Dragging { index, last } => {
                if self.registry.selected_index() != Some(index) {
                    self.input = InputState::Idle;
                    return Vec::new();
                }
                self.input = InputState::Dragging { index, last: local };
                let delta = local - last;
                if delta == Vec2::default() {
                    return Vec::new();
                }
                let before = self.registry.get(index).map(Shape::position);
                if !self.registry.drag(delta, self.viewport.size) {
                    return Vec::new();
                }
                match self.registry.get(index).map(Shape::position) {
                    Some(position) if Some(position) != before => {
                        vec![Action::ShapeMoved { index, position }, Action::RenderNeeded]
                    }
                    _ => Vec::new(),
                }
            }
            InputState::Idle | InputState::Hovering { .. } => {
                self.input = if self.viewport.contains_screen(screen_pt) {
                    InputState::Hovering { last: local }
                } else {
                    InputState::Idle
                };
                Vec::new()
            }
        }
    }

    /// Handle a button release at a host-screen position.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if let InputState::Dragging { index, .. } = self.input {
            debug!(index, "drag end");
        }
        self.input = if self.viewport.contains_screen(screen_pt) {
            InputState::Hovering { last: self.viewport.screen_to_canvas(screen_pt) }
        } else {
            InputState::Idle
        };
        Vec::new()
    }

    // --- Commands ---

    #[must_use]
    pub fn can_cut(&self) -> bool {
        self.registry.selected_index().is_some()
    }

    #[must_use]
    pub fn can_copy(&self) -> bool {
        self.registry.selected_index().is_some()
    }

    #[must_use]
    pub fn can_paste(&self) -> bool {
        self.mode == Mode::Edit2D && self.clipboard.has_content()
    }

    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.registry.selected_index().is_some()
    }

    /// Move the selected shape into the clipboard.
    pub fn cut(&mut self) -> Vec<Action> {
        let Some(shape) = self.registry.take_selected() else {
            return Vec::new();
        };
        let id = shape.id();
        info!(name = shape.name(), "cut");
        self.clipboard.store(shape);
        self.input = InputState::Idle;
        vec![
            Action::ShapeRemoved { id },
            Action::ClipboardChanged,
            Action::SelectionChanged { index: None },
            Action::RenderNeeded,
        ]
    }

    /// Snapshot the selected shape into the clipboard.
    pub fn copy(&mut self) -> Vec<Action> {
        let Some(selected) = self.registry.selected() else {
            return Vec::new();
        };
        info!(name = selected.name(), "copy");
        self.clipboard.copy(Some(selected));
        vec![Action::ClipboardChanged]
    }

    /// Insert a fresh copy of the clipboard shape, offset and selected.
    pub fn paste(&mut self) -> Vec<Action> {
        if !self.can_paste() {
            return Vec::new();
        }
        let Some(shape) = self.clipboard.create_pasted_shape(self.config.paste_offset) else {
            return Vec::new();
        };
        info!(name = shape.name(), "paste");
        self.add_shape(shape)
    }

    /// Remove the selected shape.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(shape) = self.registry.take_selected() else {
            return Vec::new();
        };
        info!(name = shape.name(), "delete");
        self.input = InputState::Idle;
        vec![
            Action::ShapeRemoved { id: shape.id() },
            Action::SelectionChanged { index: None },
            Action::RenderNeeded,
        ]
    }

    /// Context menu entries with their availability.
    #[must_use]
    pub fn menu_items(&self) -> [MenuItem; 4] {
        MenuCommand::ALL.map(|command| MenuItem { command, enabled: self.command_enabled(command) })
    }

    #[must_use]
    pub fn command_enabled(&self, command: MenuCommand) -> bool {
        match command {
            MenuCommand::Cut => self.can_cut(),
            MenuCommand::Copy => self.can_copy(),
            MenuCommand::Paste => self.can_paste(),
            MenuCommand::Delete => self.can_delete(),
        }
    }

    /// Run a command and close the context menu.
    pub fn execute_menu(&mut self, command: MenuCommand) -> Vec<Action> {
        let mut actions = match command {
            MenuCommand::Cut => self.cut(),
            MenuCommand::Copy => self.copy(),
            MenuCommand::Paste => self.paste(),
            MenuCommand::Delete => self.delete_selected(),
        };
        actions.extend(self.close_menu());
        actions
    }

    fn close_menu(&mut self) -> Vec<Action> {
        if !self.menu.open {
            return Vec::new();
        }
        self.menu.close();
        vec![Action::ContextMenuClosed]
    }

    // --- Mode ---

    /// Switch between editing and the preview.
    ///
    /// Entering the preview clears the selection, any gesture, and the menu.
    /// Leaving it resets the rotation.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if self.mode == mode {
            return Vec::new();
        }
        let mut actions = Vec::new();
        match mode {
            Mode::Preview3D => {
                actions.extend(self.deselect());
                actions.extend(self.close_menu());
            }
            Mode::Edit2D => self.preview.reset(),
        }
        self.input = InputState::Idle;
        self.mode = mode;
        info!(?mode, "mode changed");
        actions.push(Action::ModeChanged(mode));
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.set_mode(self.mode.toggled())
    }

    // --- Render ---

    /// Paint the current frame.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the surface.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw_scene(&self.registry, &self.viewport, self.mode, &self.preview, surface)
    }
}

/// The full canvas engine. Wraps `EditorCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EditorCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EditorCore::new() }
    }

    /// Create an engine with custom tunables.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, CanvasError> {
        Ok(Self { canvas, core: EditorCore::with_config(config)? })
    }

    // --- Viewport ---

    /// Size the canvas to the element's current pixel dimensions.
    pub fn sync_viewport(&mut self) {
        let size = Vec2::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.core.set_viewport(Point::default(), size);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn execute_menu(&mut self, command: MenuCommand) -> Vec<Action> {
        self.core.execute_menu(command)
    }

    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.core.toggle_mode()
    }

    pub fn advance_frame(&mut self) {
        self.core.advance_frame();
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let mut surface = CanvasSurface::new(&ctx);
        self.core.draw(&mut surface)
    }
}
