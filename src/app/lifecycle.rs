//! Application lifecycle - initialization and teardown.

use tracing::{debug, info};

use super::{CanvasState, ColorPickerState, EditState, NotesApp, SystemState};
use crate::board::Board;
use crate::input::ListenerScope;
use crate::settings::Settings;
use crate::types::Viewport;

impl NotesApp {
    pub fn new(settings: Settings) -> Self {
        let board = if settings.seed_welcome_notes {
            Board::with_welcome_notes(settings.placement())
        } else {
            Board::with_placement(settings.placement())
        };
        info!(notes = board.len(), "Board ready");

        Self {
            board,
            canvas: CanvasState::default(),
            pickers: ColorPickerState::default(),
            editing: EditState::default(),
            settings,
            system: SystemState::default(),
        }
    }

    /// An app with an empty board and default settings.
    pub fn empty() -> Self {
        Self::new(Settings {
            seed_welcome_notes: false,
            ..Settings::default()
        })
    }

    /// Update the visible board size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.canvas.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.canvas.viewport
    }

    /// Listener scope the active gesture holds, or None when idle.
    pub fn active_listener_scope(&self) -> Option<ListenerScope> {
        self.canvas.input_state.listener_scope()
    }

    /// End any active gesture and drop armed clicks.
    pub fn teardown(&mut self) {
        let ended = self.canvas.input_state.reset();
        if let Some(scope) = ended.listener_scope() {
            debug!(?scope, "Detached gesture listeners on teardown");
        }
        self.canvas.pressed = None;
    }
}

impl Default for NotesApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
