//! Action definitions for keyboard navigation.

pub mod album {
    use gpui::actions;

    actions!(
        album,
        [
            // Open the "Add Album" dialog
            NewAlbum,
            // Reload the folder list
            RefreshAlbums,
            // Dismiss the dialog without saving
            CloseDialog,
        ]
    );
}
