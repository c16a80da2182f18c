//! Coordinate conversion between view bounds and wry rects.

use viewdeck_common::PixelRect;

/// Convert whole-pixel view bounds to a logical wry `Rect`.
pub fn pixel_rect_to_wry(rect: PixelRect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(rect.x),
            f64::from(rect.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(rect.width),
            f64::from(rect.height),
        )),
    }
}
