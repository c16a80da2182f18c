//! Split geometry: carves the window into the standard layout keys.
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                     title bar offset                         |
//! +------+---------------------+---+--------------------+--------+
//! |      | leftTabs            |   | rightTabs          |        |
//! | left | leftAddressBar      | g | rightAddressBar    | right  |
//! | Aside| leftContent         | u | rightContent       | Aside  |
//! |      |                     | t |                    |        |
//! +------+---------------------+---+--------------------+--------+
//! |                           footer                             |
//! +--------------------------------------------------------------+
//! ```
//!
//! The provider is an ordinary value owned by the app and passed where a
//! layout is needed.

use viewdeck_common::{Layout, Rect};
use viewdeck_config::LayoutConfig;

const MIN_RATIO: f64 = 0.1;
const MAX_RATIO: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct SplitGeometry {
    split_ratio: f64,
    titlebar: f64,
    tabs: f64,
    address_bar: f64,
    gutter: f64,
    aside: f64,
    footer: f64,
    min_column: f64,
}

impl SplitGeometry {
    pub fn new(config: &LayoutConfig, titlebar_height: u32) -> Self {
        Self {
            split_ratio: config.split_ratio.clamp(MIN_RATIO, MAX_RATIO),
            titlebar: f64::from(titlebar_height),
            tabs: f64::from(config.tabs_height),
            address_bar: f64::from(config.address_bar_height),
            gutter: f64::from(config.gutter_width),
            aside: f64::from(config.aside_width),
            footer: f64::from(config.footer_height),
            min_column: f64::from(config.min_column_width),
        }
    }

    pub fn split_ratio(&self) -> f64 {
        self.split_ratio
    }

    /// Set the left column share, clamped so neither column drops below the
    /// minimum width for a window `width` wide.
    pub fn set_split_ratio(&mut self, ratio: f64, width: f64) {
        self.split_ratio = self.clamp_ratio(ratio, width);
    }

    pub fn clamp_ratio(&self, ratio: f64, width: f64) -> f64 {
        let ratio = if ratio.is_finite() { ratio } else { self.split_ratio };
        let columns = self.columns_width(width);
        let (mut lo, mut hi) = (MIN_RATIO, MAX_RATIO);
        if columns > 0.0 {
            let min_share = self.min_column / columns;
            if min_share < 0.5 {
                lo = lo.max(min_share);
                hi = hi.min(1.0 - min_share);
            } else {
                // Too narrow for both minimums: split evenly.
                lo = 0.5;
                hi = 0.5;
            }
        }
        ratio.clamp(lo, hi)
    }

    /// Width shared by the two columns.
    pub fn columns_width(&self, width: f64) -> f64 {
        (width - 2.0 * self.aside - self.gutter).max(0.0)
    }

    /// Layout for a window of `width` x `height` logical pixels.
    pub fn compute(&self, width: f64, height: f64) -> Layout {
        let top = self.titlebar.min(height);
        let footer_h = self.footer.min((height - top).max(0.0));
        let body_h = (height - top - footer_h).max(0.0);
        let aside_w = self.aside.min(width / 2.0);

        let columns = self.columns_width(width);
        let left_w = (columns * self.split_ratio).round();
        let right_w = columns - left_w;
        let left_x = aside_w;
        let gutter_x = left_x + left_w;
        let right_x = gutter_x + self.gutter;

        let tabs_h = self.tabs.min(body_h);
        let address_h = self.address_bar.min(body_h - tabs_h);
        let content_y = top + tabs_h + address_h;
        let content_h = (body_h - tabs_h - address_h).max(0.0);

        let column = |x: f64, w: f64| {
            (
                Rect::new(x, top, w, tabs_h),
                Rect::new(x, top + tabs_h, w, address_h),
                Rect::new(x, content_y, w, content_h),
            )
        };
        let (left_tabs, left_address, left_content) = column(left_x, left_w);
        let (right_tabs, right_address, right_content) = column(right_x, right_w);

        Layout::new()
            .with("leftTabs", left_tabs)
            .with("leftAddressBar", left_address)
            .with("leftContent", left_content)
            .with("rightTabs", right_tabs)
            .with("rightAddressBar", right_address)
            .with("rightContent", right_content)
            .with("gutter", Rect::new(gutter_x, top, self.gutter, body_h))
            .with("leftAside", Rect::new(0.0, top, aside_w, body_h))
            .with("rightAside", Rect::new(width - aside_w, top, aside_w, body_h))
            .with("footer", Rect::new(0.0, height - footer_h, width, footer_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SplitGeometry {
        SplitGeometry::new(&LayoutConfig::default(), 35)
    }

    #[test]
    fn default_layout_has_every_standard_key() {
        let layout = geometry().compute(1280.0, 800.0);
        assert_eq!(layout.len(), 10);
        for deck in viewdeck_config::default_decks() {
            assert!(layout.contains(&deck.layout), "missing {}", deck.layout);
        }
    }

    #[test]
    fn regions_respect_titlebar_and_footer() {
        let layout = geometry().compute(1280.0, 800.0);
        let tabs = layout.get("leftTabs").unwrap();
        assert_eq!(tabs.y, 35.0);
        assert_eq!(tabs.height, 36.0);
        let address = layout.get("leftAddressBar").unwrap();
        assert_eq!(address.y, 71.0);
        let content = layout.get("leftContent").unwrap();
        assert_eq!(content.y, 107.0);
        assert_eq!(content.height, 800.0 - 35.0 - 24.0 - 72.0);
        let footer = layout.get("footer").unwrap();
        assert_eq!(*footer, Rect::new(0.0, 776.0, 1280.0, 24.0));
    }

    #[test]
    fn columns_and_gutter_tile_the_width() {
        let layout = geometry().compute(1280.0, 800.0);
        let left = layout.get("leftContent").unwrap();
        let gutter = layout.get("gutter").unwrap();
        let right = layout.get("rightContent").unwrap();
        let right_aside = layout.get("rightAside").unwrap();

        assert_eq!(left.x, 48.0);
        assert_eq!(left.x + left.width, gutter.x);
        assert_eq!(gutter.x + gutter.width, right.x);
        assert_eq!(right.x + right.width, right_aside.x);
        assert_eq!(right_aside.x + right_aside.width, 1280.0);
        assert_eq!(left.width, 588.0);
    }

    #[test]
    fn split_ratio_moves_gutter() {
        let mut g = geometry();
        g.set_split_ratio(0.25, 1280.0);
        let layout = g.compute(1280.0, 800.0);
        assert_eq!(layout.get("leftContent").unwrap().width, 294.0);
    }

    #[test]
    fn ratio_is_clamped_to_minimum_column() {
        let mut g = geometry();
        g.set_split_ratio(0.01, 1280.0);
        let layout = g.compute(1280.0, 800.0);
        assert!(layout.get("leftContent").unwrap().width >= 160.0);

        g.set_split_ratio(0.99, 1280.0);
        let layout = g.compute(1280.0, 800.0);
        assert!(layout.get("rightContent").unwrap().width >= 160.0);
    }

    #[test]
    fn narrow_window_splits_evenly() {
        let g = geometry();
        assert_eq!(g.clamp_ratio(0.2, 400.0), 0.5);
    }

    #[test]
    fn non_finite_ratio_keeps_current() {
        let g = geometry();
        assert_eq!(g.clamp_ratio(f64::NAN, 1280.0), 0.5);
    }

    #[test]
    fn tiny_window_never_yields_negative_sizes() {
        let layout = geometry().compute(50.0, 40.0);
        for (key, rect) in layout.iter() {
            assert!(rect.width >= 0.0, "{key} width {}", rect.width);
            assert!(rect.height >= 0.0, "{key} height {}", rect.height);
        }
    }
}
