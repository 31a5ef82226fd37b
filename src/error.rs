// Error Types
// Typed failures for state transitions, collaborators and catalog loading

use std::path::PathBuf;
use thiserror::Error;

use crate::core::{ContactField, MediaMode};

/// A rejected state transition. The view state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no property is open")]
    NoActiveProperty,

    #[error("{0} is not available for this property")]
    ModeUnavailable(MediaMode),

    #[error("another action is still in progress")]
    Busy,

    #[error("the contact form is not open")]
    ContactNotOpen,

    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reported by a contact submission target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Failure loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog YAML")]
    Parse(#[from] serde_yaml::Error),

    #[error("listing at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate listing id: {0}")]
    DuplicateId(String),

    #[error("listing {0} has an empty title")]
    EmptyTitle(String),
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be between 1 and {max} ms, got {value}")]
    DelayOutOfRange { name: &'static str, value: u64, max: u64 },
}
