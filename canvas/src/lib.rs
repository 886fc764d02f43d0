//! Shape model and editing engine for the ShapeForge canvas.
//!
//! The crate owns everything with real invariants: the shape variants and
//! their geometry, the z-ordered registry with its single selection, the
//! clipboard, the pointer-driven editor state machine, and the read-only 3D
//! preview transform. Windowing, widgets, and the event loop belong to the
//! host; the host feeds pointer events and canvas bounds in once per frame
//! and hands the engine a [`surface::Surface`] to paint into.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EditorCore`] plus the browser-bound [`engine::Engine`] |
//! | [`shape`] | `Circle`, `Rectangle`, and the [`shape::Shape`] variant type |
//! | [`registry`] | Ordered shape store and selection state |
//! | [`clipboard`] | Single-slot deep-copy clipboard |
//! | [`hit`] | Topmost-first hit testing |
//! | [`input`] | Pointer buttons, editor mode, gesture state, context menu |
//! | [`preview`] | Rotating perspective preview (presentation only) |
//! | [`viewport`] | Points, vectors, and canvas-local coordinate conversion |
//! | [`surface`] | Drawing surface trait and the recording `DrawList` |
//! | [`render`] | Scene drawing and the `CanvasRenderingContext2d` adapter |
//! | [`color`] | Normalized RGB color |
//! | [`config`] | Editor tunables and new-shape settings |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Error type |

pub mod clipboard;
pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod preview;
pub mod registry;
pub mod render;
pub mod shape;
pub mod surface;
pub mod viewport;
