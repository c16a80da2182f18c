use std::path::PathBuf;

use viewdeck_common::PlatformError;

pub(super) const APP_NAME: &str = "viewdeck";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/viewdeck`
/// - Linux: `$XDG_CONFIG_HOME/viewdeck` (defaults to `~/.config/viewdeck`)
/// - Windows: `%APPDATA%\viewdeck`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/viewdeck`
/// - Linux: `$XDG_DATA_HOME/viewdeck` (defaults to `~/.local/share/viewdeck`)
/// - Windows: `%APPDATA%\viewdeck`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Browser profile storage shared by every view (cookies, local storage).
///
/// Located at `data_dir()/webview`.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}
