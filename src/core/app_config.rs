// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::operations::{LaunchDelays, OpenCommand, SubmitBehavior};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Upper bound for any simulated latency
pub const MAX_DELAY_MS: u64 = 60_000;

/// Application-level configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Title, status text and advertised key bindings
    pub shell: ShellSettings,

    /// UI and display settings
    pub ui: UiSettings,

    /// Simulated latencies
    pub timing: TimingSettings,

    /// Default behavior settings
    pub defaults: DefaultSettings,

    /// Catalog file replacing the built-in listings
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub title: String,

    /// Listed in the footer while browsing; empty means the built-in help
    pub bindings: Vec<KeyBinding>,

    pub status_text: String,

    /// Status text while a modal is open
    pub modal_status_text: String,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Event poll interval
    pub tick_rate: Duration,

    /// How long a notice stays on screen
    pub toast_ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSettings {
    pub tour_launch_delay: Duration,
    pub drone_launch_delay: Duration,
    pub submit_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct DefaultSettings {
    /// Make the simulated submission target report a network failure
    pub simulate_submit_failure: bool,

    /// "auto", "none" or a command line
    pub open_command: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            title: compiled::TITLE.to_string(),
            bindings: Vec::new(),
            status_text: compiled::STATUS_TEXT.to_string(),
            modal_status_text: compiled::MODAL_STATUS_TEXT.to_string(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS),
            toast_ttl: Duration::from_millis(compiled::TOAST_TTL_MS),
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            tour_launch_delay: Duration::from_millis(compiled::TOUR_LAUNCH_DELAY_MS),
            drone_launch_delay: Duration::from_millis(compiled::DRONE_LAUNCH_DELAY_MS),
            submit_delay: Duration::from_millis(compiled::SUBMIT_DELAY_MS),
        }
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            simulate_submit_failure: compiled::SIMULATE_SUBMIT_FAILURE,
            open_command: compiled::OPEN_COMMAND.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shell: ShellSettings::default(),
            ui: UiSettings::default(),
            timing: TimingSettings::default(),
            defaults: DefaultSettings::default(),
            catalog_path: None,
        }
    }
}

impl TimingSettings {
    pub fn launch_delays(&self) -> LaunchDelays {
        LaunchDelays {
            tour: self.tour_launch_delay,
            drone: self.drone_launch_delay,
        }
    }
}

impl DefaultSettings {
    pub fn open_command(&self) -> OpenCommand {
        OpenCommand::parse(&self.open_command)
    }

    pub fn submit_behavior(&self) -> SubmitBehavior {
        if self.simulate_submit_failure {
            SubmitBehavior::Fail("simulated network failure".to_string())
        } else {
            SubmitBehavior::Succeed
        }
    }
}

/// Check a latency setting: more than zero, at most [`MAX_DELAY_MS`]
pub fn validate_delay(name: &'static str, value: u64) -> Result<Duration, ConfigError> {
    if value == 0 || value > MAX_DELAY_MS {
        return Err(ConfigError::DelayOutOfRange {
            name,
            value,
            max: MAX_DELAY_MS,
        });
    }
    Ok(Duration::from_millis(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.timing.tour_launch_delay, Duration::from_millis(1500));
        assert_eq!(config.timing.drone_launch_delay, Duration::from_millis(1500));
        assert_eq!(config.timing.submit_delay, Duration::from_millis(2000));
        assert_eq!(config.defaults.submit_behavior(), SubmitBehavior::Succeed);
        assert_eq!(config.defaults.open_command(), OpenCommand::Platform);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.shell.title, "Listing Gallery");
    }

    #[test]
    fn test_validate_delay() {
        assert_eq!(validate_delay("submit_delay_ms", 2000), Ok(Duration::from_millis(2000)));
        assert!(validate_delay("submit_delay_ms", 0).is_err());
        let err = validate_delay("tour_launch_delay_ms", 90_000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tour_launch_delay_ms must be between 1 and 60000 ms, got 90000"
        );
    }

    #[test]
    fn test_failure_behavior() {
        let defaults = DefaultSettings {
            simulate_submit_failure: true,
            open_command: "none".to_string(),
        };
        assert!(matches!(defaults.submit_behavior(), SubmitBehavior::Fail(_)));
        assert_eq!(defaults.open_command(), OpenCommand::Disabled);
    }
}
