//! Global application state.

mod album_actions;
mod albums;

pub use album_actions::refresh_folders;
pub use albums::{AlbumLoadStatus, AlbumState, folder_display_name};
