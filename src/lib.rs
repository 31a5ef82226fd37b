// Listing Gallery Library
// View-state machine and terminal front end for browsing property listings

// Core infrastructure - catalog, view state and application state
pub mod core;

// Error types shared across modules
pub mod error;

// Operations - simulated async actions and outbound collaborators
pub mod operations;

// UI - TUI components and views
pub mod ui;

// Utilities - helper functions and tools
pub mod utilities;

// Re-export commonly used items for convenience
pub use core::{Action, App, AppConfig, Catalog, Effect, MediaMode, PropertyRecord, ViewState};
pub use error::{CatalogError, ConfigError, SubmitError, TransitionError};
pub use operations::{ContactSubmitter, ExternalOpener, SimulatedSubmitter, TaskRunner};
