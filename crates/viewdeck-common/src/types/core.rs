use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in logical pixels as produced by the geometry source.
/// Fields may be fractional; use [`Rect::round`] before handing it to a
/// native surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round every field to the nearest whole pixel. Negative or
    /// non-finite sizes collapse to zero.
    pub fn round(&self) -> PixelRect {
        fn coord(v: f64) -> i32 {
            if v.is_finite() {
                v.round() as i32
            } else {
                0
            }
        }
        fn extent(v: f64) -> u32 {
            if v.is_finite() && v > 0.0 {
                v.round() as u32
            } else {
                0
            }
        }
        PixelRect {
            x: coord(self.x),
            y: coord(self.y),
            width: extent(self.width),
            height: extent(self.height),
        }
    }
}

/// An integer rectangle that native windowing APIs accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const ZERO: PixelRect = PixelRect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Scripting capability of a content surface. Fixed when the surface is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    /// Restricted scripting, strict isolation. Used for arbitrary content.
    #[default]
    Sandboxed,
    /// Elevated scripting with access to the application IPC bridge.
    Privileged,
}

impl TrustLevel {
    pub fn from_trusted(trusted: bool) -> Self {
        if trusted {
            Self::Privileged
        } else {
            Self::Sandboxed
        }
    }

    pub fn is_privileged(self) -> bool {
        matches!(self, Self::Privileged)
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandboxed => f.write_str("sandboxed"),
            Self::Privileged => f.write_str("privileged"),
        }
    }
}
