mod color;
mod core;
mod layout;
mod theme;

pub use self::core::*;
pub use color::*;
pub use layout::*;
pub use theme::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_deserializes_integer_fields() {
        let r: Rect = serde_json::from_str(r#"{"x":0,"y":0,"width":400,"height":600}"#).unwrap();
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 600.0));
    }

    #[test]
    fn rect_round_to_nearest_pixel() {
        let r = Rect::new(10.4, 20.5, 399.6, 600.49);
        assert_eq!(r.round(), PixelRect::new(10, 21, 400, 600));
    }

    #[test]
    fn rect_round_negative_origin() {
        let r = Rect::new(-3.6, -0.4, 10.0, 10.0);
        let p = r.round();
        assert_eq!(p.x, -4);
        assert_eq!(p.y, 0);
    }

    #[test]
    fn rect_round_clamps_invalid_extent() {
        let r = Rect::new(0.0, 0.0, -20.0, f64::NAN);
        let p = r.round();
        assert_eq!(p.width, 0);
        assert_eq!(p.height, 0);
        assert!(p.is_collapsed());
    }

    #[test]
    fn zero_rect_rounds_to_zero_pixels() {
        assert_eq!(Rect::ZERO.round(), PixelRect::ZERO);
    }

    #[test]
    fn pixel_rect_display() {
        assert_eq!(PixelRect::new(1, 2, 3, 4).to_string(), "(1,2 3x4)");
    }

    #[test]
    fn trust_level_from_flag() {
        assert_eq!(TrustLevel::from_trusted(true), TrustLevel::Privileged);
        assert_eq!(TrustLevel::from_trusted(false), TrustLevel::Sandboxed);
        assert_eq!(TrustLevel::default(), TrustLevel::Sandboxed);
        assert!(TrustLevel::Privileged.is_privileged());
    }

    #[test]
    fn trust_level_serialization() {
        let json = serde_json::to_string(&TrustLevel::Privileged).unwrap();
        assert_eq!(json, "\"privileged\"");
    }

    #[test]
    fn layout_from_json_object() {
        let json = r#"{
            "leftContent": {"x": 0, "y": 0, "width": 400, "height": 600},
            "footer": {"x": 0, "y": 600, "width": 800.5, "height": 24}
        }"#;
        let layout: Layout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.len(), 2);
        assert_eq!(
            layout.get("leftContent"),
            Some(&Rect::new(0.0, 0.0, 400.0, 600.0))
        );
        assert!(layout.contains("footer"));
        assert!(!layout.contains("gutter"));
    }

    #[test]
    fn layout_collects_from_pairs() {
        let layout: Layout = vec![("a", Rect::ZERO), ("b", Rect::new(1.0, 1.0, 1.0, 1.0))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = layout.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn theme_descriptor_uses_camel_case() {
        let theme = ThemeDescriptor {
            should_use_dark_colors: true,
            window_accent_color: "#0078d4".into(),
            window_title_bar_color: "#202020".into(),
            window_title_bar_color_light: "#e8e8e8".into(),
            window_title_bar_color_dark: "#202020".into(),
            window_title_bar_text_color: "#0078d4".into(),
            window_color: "#ffffff".into(),
            window_background_color: "#3b3b3b".into(),
            window_title_bar_height: "35px".into(),
        };
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"shouldUseDarkColors\":true"));
        assert!(json.contains("\"windowTitleBarHeight\":\"35px\""));
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_from_hex_non_ascii_is_rejected() {
        assert!(Color::from_hex("#a\u{e9}234").is_none());
        assert!(Color::parse("#\u{e9}\u{e9}\u{e9}").is_none());
    }

    #[test]
    fn color_from_rgba_string_with_spaces() {
        let c = Color::from_rgba_string("rgba( 10 , 20 , 30 , 128 )").unwrap();
        assert_eq!(c, Color::from_rgba(10, 20, 30, 128));
    }

    #[test]
    fn color_from_rgba_string_invalid() {
        assert!(Color::from_rgba_string("rgb(10,20,30)").is_none());
        assert!(Color::from_rgba_string("rgba(10,20,30)").is_none());
        assert!(Color::from_rgba_string("rgba(10,20,30,40,50)").is_none());
    }

    #[test]
    fn color_parse_dispatches_on_format() {
        assert_eq!(
            Color::parse("#add8e6"),
            Some(Color::from_rgba(173, 216, 230, 255))
        );
        assert_eq!(
            Color::parse("rgba(1,2,3,4)"),
            Some(Color::from_rgba(1, 2, 3, 4))
        );
        assert_eq!(Color::parse("lightblue"), None);
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }

    #[test]
    fn color_to_rgba_string() {
        let c = Color::from_rgba(10, 20, 30, 255);
        assert_eq!(c.to_rgba_string(), "rgba(10,20,30,255)");
    }
}
