use std::fs;

use viewdeck_common::PlatformError;

use super::resolve::{config_dir, data_dir, webview_data_dir};

/// Creates the config, data and webview profile directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, webview_data_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
