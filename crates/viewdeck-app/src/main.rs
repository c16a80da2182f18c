mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use viewdeck_config::{config_to_json, load_config, ViewDeckConfig};

/// Turn a bare level (`debug`) into a directive scoped to this
/// application's crates; anything else is used as given.
fn log_directive(override_level: Option<&str>, config: &ViewDeckConfig) -> String {
    match override_level.map(str::trim) {
        Some(level) if !level.is_empty() && !level.contains('=') => {
            let mut logging = config.logging.clone();
            match level.parse() {
                Ok(parsed) => {
                    logging.level = parsed;
                    logging.directive()
                }
                Err(_) => level.to_string(),
            }
        }
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => config.logging.directive(),
    }
}

fn main() {
    let args = cli::parse();

    // Config comes first so that its log level can seed the filter; load
    // errors are reported once logging is up.
    let loaded = load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if args.print_config {
        println!("{}", config_to_json(&config));
        return;
    }

    let directive = log_directive(args.log_level.as_deref(), &config);
    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',').filter(|p| !p.is_empty()) {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Ignoring invalid log directive '{part}': {e}"),
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("ViewDeck v{} starting...", env!("CARGO_PKG_VERSION"));

    match &loaded {
        Ok(_) => tracing::info!(decks = config.decks.len(), "Config loaded"),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    // Ensure platform directories exist
    if let Err(e) = viewdeck_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ViewDeckApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_app_crates() {
        let config = ViewDeckConfig::default();
        let directive = log_directive(Some("debug"), &config);
        assert!(directive.contains("viewdeck=debug"));
        assert!(directive.contains("viewdeck_webview=debug"));
    }

    #[test]
    fn full_directive_is_kept() {
        let config = ViewDeckConfig::default();
        assert_eq!(
            log_directive(Some("wry=trace"), &config),
            "wry=trace".to_string()
        );
    }

    #[test]
    fn missing_override_uses_config() {
        let config = ViewDeckConfig::default();
        assert_eq!(log_directive(None, &config), config.logging.directive());
        assert_eq!(log_directive(Some("  "), &config), config.logging.directive());
    }
}
