// Configuration validation module

use std::path::{Path, PathBuf};
use std::time::Duration;

use listing_gallery::core::app_config::validate_delay;
use listing_gallery::core::{AppConfig, KeyBinding};
use listing_gallery::ConfigError;

use crate::config::{load_config, ConfigFile};

/// Load and validate configuration with error recovery
///
/// A missing or unreadable file yields the compiled defaults; an out-of-range
/// value keeps its compiled default.
pub fn load_and_validate_config(config_path: &Path) -> AppConfig {
    match load_config(config_path) {
        Ok(file) => {
            let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
            let (config, problems) = apply_config_file(file, base_dir);
            for problem in &problems {
                tracing::warn!(error = %problem, "Invalid configuration value, using default");
            }
            config
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Failed to load configuration, using defaults");
            AppConfig::default()
        }
    }
}

/// Merge a parsed config file over the compiled defaults
pub fn apply_config_file(file: ConfigFile, base_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut problems = Vec::new();

    let mut delay = |target: &mut Duration, name: &'static str, value: Option<u64>| {
        if let Some(value) = value {
            match validate_delay(name, value) {
                Ok(valid) => *target = valid,
                Err(err) => problems.push(err),
            }
        }
    };

    delay(&mut config.ui.tick_rate, "tick_rate_ms", file.ui.tick_rate_ms);
    delay(&mut config.ui.toast_ttl, "toast_ttl_ms", file.ui.toast_ttl_ms);
    delay(
        &mut config.timing.tour_launch_delay,
        "tour_launch_delay_ms",
        file.timing.tour_launch_delay_ms,
    );
    delay(
        &mut config.timing.drone_launch_delay,
        "drone_launch_delay_ms",
        file.timing.drone_launch_delay_ms,
    );
    delay(
        &mut config.timing.submit_delay,
        "submit_delay_ms",
        file.timing.submit_delay_ms,
    );

    if let Some(mouse_enabled) = file.ui.mouse_enabled {
        config.ui.mouse_enabled = mouse_enabled;
    }
    if let Some(fail) = file.defaults.simulate_submit_failure {
        config.defaults.simulate_submit_failure = fail;
    }
    if let Some(command) = file.defaults.open_command {
        config.defaults.open_command = command;
    }
    config.catalog_path = file
        .defaults
        .catalog_path
        .map(|path| resolve_relative(base_dir, path));

    let application = file.application;
    config.shell.title = application.title;
    config.shell.bindings = application
        .bindings
        .into_iter()
        .map(|b| KeyBinding {
            key: b.key,
            description: b.description,
        })
        .collect();
    config.shell.status_text = application.status_bar.default_text;
    if let Some(modal_text) = application.status_bar.modal_text {
        config.shell.modal_status_text = modal_text;
    }

    (config, problems)
}

fn resolve_relative(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
