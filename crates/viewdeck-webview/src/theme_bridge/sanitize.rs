//! CSS value sanitization.
//!
//! Only hex colors, numeric `rgb()`/`rgba()` and plain lengths pass. Named
//! colors are rejected along with anything carrying quotes, structural
//! characters or known injection vectors.

use std::fmt;

/// How a theme value is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssValueKind {
    /// Hex or `rgb()`/`rgba()` color.
    Color,
    /// Number with optional `px`, `em`, `rem` or `%` unit.
    Length,
}

impl CssValueKind {
    pub fn validate(self, value: &str) -> Result<(), String> {
        match self {
            Self::Color => validate_css_color(value),
            Self::Length => validate_css_length(value),
        }
    }
}

impl fmt::Display for CssValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => f.write_str("color"),
            Self::Length => f.write_str("length"),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color value".to_string());
    }
    reject_unsafe(trimmed)?;

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) {
            return Err(format!("hex color '{trimmed}' must have 3, 4, 6 or 8 digits"));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("hex color '{trimmed}' has a non-hex digit"));
        }
        return Ok(());
    }

    let (args, arity) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return Err(format!(
            "color '{trimmed}' is not hex, rgb() or rgba()"
        ));
    };

    let inner = args
        .strip_suffix(')')
        .ok_or_else(|| format!("unterminated color function '{trimmed}'"))?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return Err(format!(
            "'{trimmed}' takes {arity} arguments, got {}",
            parts.len()
        ));
    }
    if let Some(bad) = parts.iter().find(|p| p.parse::<f64>().is_err()) {
        return Err(format!("non-numeric argument '{bad}' in '{trimmed}'"));
    }
    Ok(())
}

pub fn validate_css_length(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty length value".to_string());
    }
    reject_unsafe(trimmed)?;

    let number = ["rem", "px", "em", "%"]
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .unwrap_or(trimmed);
    match number.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(format!("invalid length '{trimmed}'")),
    }
}

fn reject_unsafe(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();
    for pattern in [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "behavior:",
        "-moz-binding",
    ] {
        if lower.contains(pattern) {
            return Err(format!("blocked pattern '{pattern}' in '{value}'"));
        }
    }
    if let Some(ch) = value
        .chars()
        .find(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\'' | '"' | '\\' | '\n'))
    {
        return Err(format!("blocked character '{ch}' in '{value}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        for ok in ["#fff", "#fffa", "#0078d4", "#0078d480"] {
            assert!(validate_css_color(ok).is_ok(), "{ok}");
        }
        for bad in ["#ff", "#fffff", "#gggggg", "#"] {
            assert!(validate_css_color(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn rgb_functions() {
        assert!(validate_css_color("rgba(0, 120, 212, 0.5)").is_ok());
        assert!(validate_css_color("rgb(32,32,32)").is_ok());
        assert!(validate_css_color("rgba(0, 0, 0)").is_err());
        assert!(validate_css_color("rgb(0, 0)").is_err());
        assert!(validate_css_color("rgba(red, 0, 0, 1)").is_err());
        assert!(validate_css_color("rgb(0, 0, 0").is_err());
    }

    #[test]
    fn named_colors_rejected() {
        assert!(validate_css_color("lightblue").is_err());
        assert!(validate_css_color("transparent").is_err());
    }

    #[test]
    fn injection_rejected() {
        assert!(validate_css_color("#fff; background: url(x)").is_err());
        assert!(validate_css_color("#fff } body {").is_err());
        assert!(validate_css_color("#fff')").is_err());
        assert!(validate_css_length("35px; color: red").is_err());
        assert!(validate_css_length("expression(1)").is_err());
    }

    #[test]
    fn lengths() {
        for ok in ["35px", "0", "1.5em", "2rem", "100%"] {
            assert!(validate_css_length(ok).is_ok(), "{ok}");
        }
        for bad in ["", "px", "tall", "NaNpx"] {
            assert!(validate_css_length(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn kind_dispatch() {
        assert!(CssValueKind::Color.validate("#000").is_ok());
        assert!(CssValueKind::Length.validate("#000").is_err());
        assert_eq!(CssValueKind::Length.to_string(), "length");
    }
}
