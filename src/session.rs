//! Headless replay of a session script against the editor.
//!
//! Stands in for the window front-end: it feeds events into the editor,
//! refreshes the viewport before each frame, and paints every frame into an
//! in-memory draw list.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::engine::{Action, EditorCore};
use canvas::error::CanvasError;
use canvas::surface::DrawList;
use canvas::viewport::{Point, Vec2};
use tracing::{debug, warn};

use crate::report::{Report, ShapeLine};
use crate::script::ScriptEvent;

pub struct Session {
    core: EditorCore,
    origin: Point,
    size: Vec2,
    surface: DrawList,
    frames: u64,
    actions: usize,
    rejected: usize,
}

impl Session {
    /// Wrap an editor with the canvas placed at `origin` with extent `size`.
    #[must_use]
    pub fn new(core: EditorCore, origin: Point, size: Vec2) -> Self {
        let mut session = Self {
            core,
            origin,
            size,
            surface: DrawList::new(),
            frames: 0,
            actions: 0,
            rejected: 0,
        };
        session.core.set_viewport(origin, size);
        session
    }

    #[must_use]
    pub fn core(&self) -> &EditorCore {
        &self.core
    }

    /// Commands recorded by the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> &DrawList {
        &self.surface
    }

    /// Apply every event, then paint one closing frame.
    pub fn run(&mut self, events: &[ScriptEvent]) {
        for event in events {
            self.apply(event);
        }
        self.frame();
    }

    /// Apply one event. Events the editor rejects are logged and counted.
    pub fn apply(&mut self, event: &ScriptEvent) {
        let actions = match event {
            ScriptEvent::Viewport { x, y, width, height } => {
                self.origin = Point::new(*x, *y);
                self.size = Vec2::new(*width, *height);
                self.core.set_viewport(self.origin, self.size);
                Vec::new()
            }
            ScriptEvent::AddCircle { x, y, radius, color, name } => {
                self.core.add_circle(Point::new(*x, *y), *radius, *color, name)
            }
            ScriptEvent::AddRectangle { x, y, width, height, color, name } => {
                self.core.add_rectangle(Point::new(*x, *y), Vec2::new(*width, *height), *color, name)
            }
            ScriptEvent::PointerDown { x, y, button } => self.core.on_pointer_down(Point::new(*x, *y), *button),
            ScriptEvent::PointerMove { x, y } => self.core.on_pointer_move(Point::new(*x, *y)),
            ScriptEvent::PointerUp { x, y, button } => self.core.on_pointer_up(Point::new(*x, *y), *button),
            ScriptEvent::Command { command } => self.core.execute_menu(*command),
            ScriptEvent::Select { index } => match self.core.select(*index) {
                Ok(actions) => actions,
                Err(err) => {
                    self.reject("select", &err);
                    Vec::new()
                }
            },
            ScriptEvent::Deselect => self.core.deselect(),
            ScriptEvent::Mode { mode } => self.core.set_mode(*mode),
            ScriptEvent::ToggleMode => self.core.toggle_mode(),
            ScriptEvent::RotationSpeed { x, y } => {
                if let Err(err) = self.core.set_rotation_speed(*x, *y) {
                    self.reject("rotation_speed", &err);
                }
                Vec::new()
            }
            ScriptEvent::Frame { count } => {
                for _ in 0..*count {
                    self.frame();
                }
                Vec::new()
            }
        };
        self.record(&actions);
    }

    fn reject(&mut self, op: &str, err: &CanvasError) {
        warn!(op, %err, "event rejected");
        self.rejected += 1;
    }

    fn record(&mut self, actions: &[Action]) {
        for action in actions {
            debug!(?action, "action");
        }
        self.actions += actions.len();
    }

    /// One host frame: refresh bounds, step animation, repaint.
    pub fn frame(&mut self) {
        self.core.set_viewport(self.origin, self.size);
        self.core.advance_frame();
        self.surface.clear();
        let Ok(()) = self.core.draw(&mut self.surface);
        self.frames += 1;
    }

    /// Snapshot of the editor for printing.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            mode: self.core.mode,
            frames: self.frames,
            actions: self.actions,
            rejected: self.rejected,
            selected: self.core.selected_index(),
            clipboard: self.core.clipboard.peek().map(|s| s.name().to_owned()),
            shapes: self
                .core
                .shapes()
                .iter()
                .map(|s| ShapeLine { label: s.label(), selected: s.is_selected() })
                .collect(),
            draw_commands: self.last_frame().len(),
        }
    }
}
