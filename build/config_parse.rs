// Config Parsing
// Minimal reader for the scalar keys of config.yaml, shared by build.rs and its tests

pub struct CompiledConfig {
    pub title: String,
    pub status_text: String,
    pub modal_status_text: String,
    pub mouse_enabled: bool,
    pub tick_rate_ms: u64,
    pub toast_ttl_ms: u64,
    pub tour_launch_delay_ms: u64,
    pub drone_launch_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub simulate_submit_failure: bool,
    pub open_command: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            title: "Listing Gallery".to_string(),
            status_text: "Browse listings".to_string(),
            modal_status_text: "Esc: Close".to_string(),
            mouse_enabled: true,
            tick_rate_ms: 50,
            toast_ttl_ms: 4000,
            tour_launch_delay_ms: 1500,
            drone_launch_delay_ms: 1500,
            submit_delay_ms: 2000,
            simulate_submit_failure: false,
            open_command: "auto".to_string(),
        }
    }
}

#[derive(PartialEq)]
enum Section {
    Other,
    Application,
    Ui,
    Timing,
    Defaults,
}

pub fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::Other;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') && trimmed.ends_with(':') {
            section = match trimmed {
                "application:" => Section::Application,
                "ui:" => Section::Ui,
                "timing:" => Section::Timing,
                "defaults:" => Section::Defaults,
                _ => Section::Other,
            };
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match section {
            Section::Application => match key {
                "title" => config.title = unquote(value),
                "default_text" => config.status_text = unquote(value),
                "modal_text" => config.modal_status_text = unquote(value),
                _ => {}
            },
            Section::Ui => match key {
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(50),
                "toast_ttl_ms" => config.toast_ttl_ms = value.parse().unwrap_or(4000),
                _ => {}
            },
            Section::Timing => match key {
                "tour_launch_delay_ms" => {
                    config.tour_launch_delay_ms = value.parse().unwrap_or(1500)
                }
                "drone_launch_delay_ms" => {
                    config.drone_launch_delay_ms = value.parse().unwrap_or(1500)
                }
                "submit_delay_ms" => config.submit_delay_ms = value.parse().unwrap_or(2000),
                _ => {}
            },
            Section::Defaults => match key {
                "simulate_submit_failure" => config.simulate_submit_failure = parse_bool(value),
                "open_command" => config.open_command = unquote(value),
                _ => {}
            },
            Section::Other => {}
        }
    }

    config
}

pub fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() || line.starts_with("- ") {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Strip inline comments, leaving '#' inside quotes alone
    if let Some(comment_pos) = comment_start(value) {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Byte offset of a " #" comment that is not inside double quotes
fn comment_start(value: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut prev_space = false;
    for (pos, c) in value.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes && prev_space => return Some(pos - 1),
            _ => {}
        }
        prev_space = c == ' ';
    }
    None
}

fn unquote(s: &str) -> String {
    s.trim_matches('"').to_string()
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
