//! Engine-wide constants.
//!
//! Centralizes magic numbers so the modes, the viewport and the config
//! defaults agree on the same values.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Lower bound of the recommended zoom range
pub const MIN_ZOOM: f64 = 0.1;

/// Upper bound of the recommended zoom range
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom multiplier for one wheel notch towards the user
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier for one wheel notch away from the user
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

/// Fraction of the viewport panned by one arrow key press in pan mode
pub const KEYBOARD_PAN_FRACTION: f64 = 0.2;

// ============================================================================
// Extent & Grid
// ============================================================================

/// Default scrollable extent (world units)
pub const DEFAULT_EXTENT: (f64, f64) = (5000.0, 5000.0);

/// Spacing of the background grid (world units)
pub const GRID_SPACING: f64 = 100.0;

// ============================================================================
// Interaction
// ============================================================================

/// World-space distance the pointer must travel before a press on a
/// selected element turns into a move
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Name of the transient layer holding the drag-select rectangle
pub const DRAG_SELECT_LAYER_NAME: &str = "__drag-select__";

// ============================================================================
// Element Defaults
// ============================================================================

/// Default element size when the host does not provide one
pub const DEFAULT_ELEMENT_SIZE: (f64, f64) = (300.0, 100.0);

/// Corner radius of plain rectangle elements
pub const ELEMENT_CORNER_RADIUS: f64 = 8.0;

/// Dash pattern of the drag-select rectangle border
pub const DRAG_RECT_DASH: [f64; 2] = [4.0, 4.0];

// ============================================================================
// Status Readout
// ============================================================================

/// Font size of the diagnostic status readout (CSS pixels)
pub const STATUS_FONT_SIZE: f64 = 12.0;

/// Distance of the status readout from the bottom-left corner (CSS pixels)
pub const STATUS_MARGIN: f64 = 8.0;

/// Inner padding of the status readout box (CSS pixels)
pub const STATUS_PADDING: f64 = 6.0;
