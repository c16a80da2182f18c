use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("keybind error: {0}")]
    KeybindError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures reported by a host window adapter while creating, placing or
/// tearing down content surfaces.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("surface creation failed: {0}")]
    CreateFailed(String),

    #[error("bounds rejected: {0}")]
    BoundsRejected(String),

    #[error("window unavailable")]
    WindowUnavailable,

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("host error: {0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ViewDeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
