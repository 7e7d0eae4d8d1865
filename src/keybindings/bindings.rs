//! Default keybinding definitions.

use gpui::{App, KeyBinding};

use super::actions::album::*;

/// Key context set by the "Add Album" dialog while it is open.
pub const ADD_ALBUM_CONTEXT: &str = "AddAlbumDialog";

/// Register all default keybindings with the application.
pub fn register_keybindings(cx: &mut App) {
    cx.bind_keys(album_bindings());
}

fn album_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-n", NewAlbum, None),
        KeyBinding::new("secondary-r", RefreshAlbums, None),
        KeyBinding::new("escape", CloseDialog, Some(ADD_ALBUM_CONTEXT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_bindings_parse() {
        // KeyBinding::new panics on keystrokes it cannot parse.
        assert_eq!(album_bindings().len(), 3);
    }
}
