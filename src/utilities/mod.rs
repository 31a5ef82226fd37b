// Utilities module
// Helper functions and tools

pub mod layout;
pub mod placeholder;

pub use layout::{centered_fixed, centered_rect, hex_color, wrap_text};
pub use placeholder::{is_loadable, placeholder_art, resolve_image, ImageDisplay};
