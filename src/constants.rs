//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the menu bar above the board in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window size when the app starts
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1200.0, 800.0);

// ============================================================================
// Note Defaults
// ============================================================================

/// Minimum note width; resize never goes below this
pub const MIN_NOTE_WIDTH: f32 = 180.0;

/// Minimum note height; resize never goes below this
pub const MIN_NOTE_HEIGHT: f32 = 120.0;

/// Size of a freshly created note
pub const DEFAULT_NOTE_SIZE: (f32, f32) = (200.0, 160.0);

/// Where the first new note lands (board-local)
pub const NOTE_BASE_ORIGIN: (f32, f32) = (100.0, 100.0);

/// Offset added per stagger slot so new notes don't stack exactly
pub const NOTE_STAGGER_STEP: f32 = 30.0;

/// Number of stagger slots before placement wraps back to the origin
pub const NOTE_STAGGER_SLOTS: usize = 5;

/// First value handed out by the stacking counter
pub const FIRST_Z_INDEX: u64 = 1;

// ============================================================================
// Drag Clamping
// ============================================================================

/// Horizontal margin kept visible when dragging towards the right edge
pub const DEFAULT_DRAG_MARGIN_X: f32 = 100.0;

/// Vertical margin kept visible when dragging towards the bottom edge
pub const DEFAULT_DRAG_MARGIN_Y: f32 = 50.0;

// ============================================================================
// Note Chrome (hit regions, board-local pixels)
// ============================================================================

/// Height of the note header bar (the drag grip)
pub const NOTE_HEADER_HEIGHT: f32 = 28.0;

/// Size of the square header buttons (color, delete)
pub const NOTE_BUTTON_SIZE: f32 = 22.0;

/// Gap between header buttons
pub const NOTE_BUTTON_GAP: f32 = 4.0;

/// Padding between the header buttons and the note's right edge
pub const NOTE_HEADER_PADDING: f32 = 6.0;

/// Border around the note card; it grips like the header
pub const NOTE_BORDER_WIDTH: f32 = 2.0;

/// Size of the resize corner area in pixels
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;

// ============================================================================
// Color Picker Popover
// ============================================================================

/// Diameter of a palette swatch
pub const SWATCH_SIZE: f32 = 24.0;

/// Gap between swatches
pub const SWATCH_GAP: f32 = 4.0;

/// Inner padding of the popover
pub const PICKER_PADDING: f32 = 8.0;

/// Vertical gap between the color button and the popover
pub const PICKER_OFFSET_Y: f32 = 4.0;

// ============================================================================
// Performance
// ============================================================================

/// Pointer handlers slower than this are logged
pub const SLOW_INPUT_THRESHOLD_MS: f64 = 4.0;
