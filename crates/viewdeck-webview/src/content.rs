//! Local content serving via custom protocol.
//!
//! `file` locators are served from the content root through the
//! `viewdeck://` scheme so pages get a stable origin without a local HTTP
//! server.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Custom protocol scheme registered on every surface.
pub const PROTOCOL: &str = "viewdeck";

/// Origin that `file` locators are rewritten to. WebView2 exposes custom
/// schemes as `http://<scheme>.localhost`.
#[cfg(not(windows))]
pub const CONTENT_ORIGIN: &str = "viewdeck://localhost/";
#[cfg(windows)]
pub const CONTENT_ORIGIN: &str = "http://viewdeck.localhost/";

/// Serves files from a root directory.
///
/// `viewdeck://localhost/loader/gutter.html` resolves to
/// `{root}/loader/gutter.html`.
pub struct ContentProvider {
    root: PathBuf,
}

impl ContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a request path to MIME type and bytes. Paths escaping the
    /// root (`..`, absolute paths, symlinks) resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let clean = clean.trim_start_matches('/');

        let file_path = self.root.join(clean);
        let canonical_root = std::fs::canonicalize(&self.root).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_root) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Strip the scheme and host from a custom-protocol request URI.
pub fn request_path(uri: &str) -> &str {
    const PREFIXES: &[&str] = &[
        "viewdeck://localhost/",
        "viewdeck://localhost",
        "http://viewdeck.localhost/",
        "https://viewdeck.localhost/",
        "viewdeck:///",
        "viewdeck://",
    ];
    PREFIXES
        .iter()
        .find_map(|prefix| uri.strip_prefix(prefix))
        .unwrap_or("")
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
