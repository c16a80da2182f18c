//! Gutter drag state.
//!
//! The gutter is itself a web view, so the pointer never reaches winit
//! during a drag. The gutter page reports `windowResizeStart`, a stream of
//! `windowResize {dx}` messages (pixels moved since the drag started) and
//! `windowResizeEnd`. This module turns those deltas into split ratios.

// =============================================================================
// TYPES
// =============================================================================

/// Active drag of the column split.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Split ratio when the drag started.
    pub start_ratio: f64,
    /// Deck left visible while the others are collapsed.
    pub keep_visible: Option<String>,
}

impl DragState {
    pub fn new(start_ratio: f64, keep_visible: Option<&str>) -> Self {
        Self {
            start_ratio,
            keep_visible: keep_visible.map(str::to_string),
        }
    }
}

// =============================================================================
// RATIO MATH
// =============================================================================

/// Ratio after moving the gutter `dx` pixels across `columns_width` pixels
/// of column space. Unclamped.
pub fn drag_ratio(drag: &DragState, dx: f64, columns_width: f64) -> f64 {
    if columns_width <= 0.0 || !dx.is_finite() {
        return drag.start_ratio;
    }
    drag.start_ratio + dx / columns_width
}

// =============================================================================
// TESTS
// =============================================================================
