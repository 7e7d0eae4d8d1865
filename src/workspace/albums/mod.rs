//! Album UI components.

mod add_album;
mod draft;

pub use add_album::AddAlbumDialog;
pub use draft::{AddAlbumEvent, AlbumDraft};
