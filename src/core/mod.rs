// Core infrastructure module
// Listing data, the view-state machine and application state

pub mod app;
pub mod app_config;
pub mod catalog;
pub mod contact;
pub mod events;
pub mod media;
pub mod view_state;

pub use app::{ActiveNotice, App, InputContext};
pub use app_config::{AppConfig, KeyBinding};
pub use catalog::{Catalog, MediaAsset, MediaCategory, PropertyRecord};
pub use contact::{inquiry_message, ContactField, ContactForm};
pub use events::{AppEvent, EventHandler};
pub use media::{available_modes, filtered_set, MediaMode};
pub use view_state::{Action, Effect, Notice, NoticeLevel, ViewState};
