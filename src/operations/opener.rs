// External Opener
// Opens a tour or footage reference in a new navigation context

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

/// Host capability for opening an external reference
pub trait ExternalOpener: Send {
    fn open(&self, reference: &str) -> Result<()>;
}

/// How references are opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenCommand {
    /// Platform default: `xdg-open`, `open` or `cmd /C start`
    Platform,
    /// Only log the request
    Disabled,
    /// Program and leading arguments; the reference is appended
    Custom(Vec<String>),
}

impl OpenCommand {
    /// Parse the `open_command` setting: "auto", "none" or a command line
    pub fn parse(setting: &str) -> Self {
        match setting.trim() {
            "" | "auto" => OpenCommand::Platform,
            "none" => OpenCommand::Disabled,
            other => OpenCommand::Custom(other.split_whitespace().map(str::to_string).collect()),
        }
    }

    fn argv(&self, reference: &str) -> Option<Vec<String>> {
        let mut argv: Vec<String> = match self {
            OpenCommand::Disabled => return None,
            OpenCommand::Custom(parts) => parts.clone(),
            OpenCommand::Platform if cfg!(target_os = "macos") => vec!["open".into()],
            OpenCommand::Platform if cfg!(target_os = "windows") => {
                vec!["cmd".into(), "/C".into(), "start".into(), "".into()]
            }
            OpenCommand::Platform => vec!["xdg-open".into()],
        };
        argv.push(reference.to_string());
        Some(argv)
    }
}

/// Opens references by launching a detached command
#[derive(Debug, Clone)]
pub struct CommandOpener {
    command: OpenCommand,
}

impl CommandOpener {
    pub fn new(command: OpenCommand) -> Self {
        Self { command }
    }
}

impl ExternalOpener for CommandOpener {
    fn open(&self, reference: &str) -> Result<()> {
        let Some(argv) = self.command.argv(reference) else {
            tracing::info!(%reference, "Opening disabled, skipping");
            return Ok(());
        };
        let Some((program, args)) = argv.split_first() else {
            bail!("open command is empty");
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run {} for {}", program, reference))?;

        tracing::info!(%reference, %program, "Opened external reference");

        // Reap the child without blocking the UI
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}

/// Keeps every requested reference instead of opening it
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// References opened so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, reference: &str) -> Result<()> {
        match self.opened.lock() {
            Ok(mut list) => {
                list.push(reference.to_string());
                Ok(())
            }
            Err(_) => bail!("recording opener lock poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        assert_eq!(OpenCommand::parse("auto"), OpenCommand::Platform);
        assert_eq!(OpenCommand::parse(""), OpenCommand::Platform);
        assert_eq!(OpenCommand::parse(" none "), OpenCommand::Disabled);
        assert_eq!(
            OpenCommand::parse("firefox --new-window"),
            OpenCommand::Custom(vec!["firefox".into(), "--new-window".into()])
        );
    }

    #[test]
    fn test_custom_argv_appends_reference() {
        let command = OpenCommand::parse("browser -n");
        assert_eq!(
            command.argv("https://tour").unwrap(),
            vec!["browser", "-n", "https://tour"]
        );
        assert!(OpenCommand::Disabled.argv("https://tour").is_none());
    }

    #[test]
    fn test_disabled_opener_is_ok() {
        let opener = CommandOpener::new(OpenCommand::Disabled);
        assert!(opener.open("https://tour").is_ok());
    }

    #[test]
    fn test_missing_program_is_error() {
        let opener = CommandOpener::new(OpenCommand::Custom(vec![
            "listing-gallery-no-such-opener".into(),
        ]));
        assert!(opener.open("https://tour").is_err());
    }

    #[test]
    fn test_recording_opener() {
        let opener = RecordingOpener::new();
        opener.open("a").unwrap();
        opener.open("b").unwrap();
        assert_eq!(opener.opened(), vec!["a", "b"]);
    }
}
