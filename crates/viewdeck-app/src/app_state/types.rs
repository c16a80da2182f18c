//! Constants shared by the app state modules.

use std::time::Duration;

/// How often surface events are drained when the loop is otherwise idle.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);
