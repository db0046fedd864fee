//! Application module - the owned board application state and its actions.
//!
//! This module is organized into several submodules:
//! - `state` - The NotesApp struct definition and sub-structs
//! - `lifecycle` - Initialization and teardown
//! - `note_actions` - Create, delete, recolor and edit operations
//! - `snapshot` - Serializable render input for presentation layers
//!
//! Pointer handling lives in `crate::input` as further `impl NotesApp` blocks.

mod state;
mod lifecycle;
mod note_actions;
mod snapshot;

pub use state::{CanvasState, ColorPickerState, EditState, NotesApp, SystemState};
pub use snapshot::{GestureSnapshot, RenderSnapshot};
