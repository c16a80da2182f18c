//! The seam between the view-deck manager and the native window.
//!
//! The manager never touches wry directly. It asks a [`HostWindow`] to build
//! surfaces and to attach or detach them, and drives each
//! [`ContentSurface`] through its bounds and scripts. [`crate::WryHost`] is
//! the production implementation; tests use an in-memory recorder.

use std::path::PathBuf;

use viewdeck_common::{HostError, PixelRect, ThemeDescriptor, TrustLevel};

/// What a new surface should load first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocator {
    /// Remote (or any scheme) URL, loaded as-is.
    Url(String),
    /// Path relative to the content root, served over `viewdeck://`.
    File(PathBuf),
}

impl ContentLocator {
    /// URL the surface should navigate to.
    pub fn to_url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => {
                let rel = path.to_string_lossy().replace('\\', "/");
                format!("{}{}", crate::content::CONTENT_ORIGIN, rel.trim_start_matches('/'))
            }
        }
    }
}

/// Everything the host needs to construct one content surface.
#[derive(Debug, Clone)]
pub struct SurfaceSpec {
    pub deck: String,
    pub key: String,
    pub trust: TrustLevel,
    /// Preload script selected for `trust`.
    pub preload: String,
    pub locator: ContentLocator,
    /// Deck background, painted before the page draws.
    pub background: Option<String>,
    pub scrollbars: bool,
    /// Theme script to run on every page load, if a theme was broadcast.
    pub theme: Option<String>,
    pub bounds: PixelRect,
}

/// A created embedded web-content surface.
pub trait ContentSurface {
    /// Move and resize the surface within the host window.
    fn set_bounds(&mut self, bounds: PixelRect) -> Result<(), HostError>;

    /// Run a script in the surface's page.
    fn evaluate_script(&self, js: &str) -> Result<(), HostError>;

    /// Open the inspector if closed, close it if open.
    fn toggle_devtools(&mut self) -> Result<(), HostError>;

    /// Give keyboard focus to the surface.
    fn focus(&self) -> Result<(), HostError>;
}

/// The top-level window that surfaces are embedded in.
pub trait HostWindow {
    type Surface: ContentSurface;

    /// Build a surface, start loading its locator and return it unattached.
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<Self::Surface, HostError>;

    /// Make the surface part of the window's visible composition.
    fn attach(&mut self, surface: &mut Self::Surface) -> Result<(), HostError>;

    /// Remove the surface from the window without destroying it.
    fn detach(&mut self, surface: &mut Self::Surface) -> Result<(), HostError>;

    /// Deliver a theme descriptor to the window itself. Deck views receive
    /// it separately through their own scripts.
    fn theme_changed(&mut self, theme: &ThemeDescriptor) -> Result<(), HostError>;
}
