//! Keyboard shortcuts.
//!
//! - `Cmd/Ctrl+N` opens the "Add Album" dialog
//! - `Cmd/Ctrl+R` reloads the album list from the bucket
//! - `Escape` dismisses the dialog
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::keybindings;
//!
//! // In main.rs, before opening the window:
//! keybindings::init(cx);
//! ```

pub mod actions;
pub mod bindings;

use gpui::App;

pub use actions::album;
pub use bindings::{ADD_ALBUM_CONTEXT, register_keybindings};

/// Initialize the keybindings system.
pub fn init(cx: &mut App) {
    register_keybindings(cx);
}
