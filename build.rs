// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

#[path = "build/config_parse.rs"]
mod config_parse;

use config_parse::{parse_config, CompiledConfig};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");
    println!("cargo:rerun-if-changed=build/config_parse.rs");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Fall back to hardcoded defaults if config.yaml is missing
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TITLE: &str = "{title}";
pub const STATUS_TEXT: &str = "{status_text}";
pub const MODAL_STATUS_TEXT: &str = "{modal_status_text}";

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const TICK_RATE_MS: u64 = {tick_rate_ms};
pub const TOAST_TTL_MS: u64 = {toast_ttl_ms};

pub const TOUR_LAUNCH_DELAY_MS: u64 = {tour_launch_delay_ms};
pub const DRONE_LAUNCH_DELAY_MS: u64 = {drone_launch_delay_ms};
pub const SUBMIT_DELAY_MS: u64 = {submit_delay_ms};

pub const SIMULATE_SUBMIT_FAILURE: bool = {simulate_submit_failure};
pub const OPEN_COMMAND: &str = "{open_command}";
"#,
        title = config.title.escape_default(),
        status_text = config.status_text.escape_default(),
        modal_status_text = config.modal_status_text.escape_default(),
        mouse_enabled = config.mouse_enabled,
        tick_rate_ms = config.tick_rate_ms,
        toast_ttl_ms = config.toast_ttl_ms,
        tour_launch_delay_ms = config.tour_launch_delay_ms,
        drone_launch_delay_ms = config.drone_launch_delay_ms,
        submit_delay_ms = config.submit_delay_ms,
        simulate_submit_failure = config.simulate_submit_failure,
        open_command = config.open_command.escape_default(),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}
