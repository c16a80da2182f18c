pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use input::{KeyCombo, ShortcutRegistry};
pub use keymap::{parse_keybind, KeyBind, Modifier};
pub use paths::{config_dir, data_dir, ensure_dirs, webview_data_dir};
pub use winit_keys::{normalize_physical_key, normalize_winit_key};
