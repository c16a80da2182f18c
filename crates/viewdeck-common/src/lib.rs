pub mod errors;
pub mod types;

pub use errors::{ConfigError, HostError, PlatformError, ViewDeckError};
pub use types::{Color, Layout, PixelRect, Rect, ThemeDescriptor, TrustLevel};

pub type Result<T> = std::result::Result<T, ViewDeckError>;
