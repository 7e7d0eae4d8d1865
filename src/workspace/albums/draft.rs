//! Form model behind the "Add Album" dialog.

/// Events emitted by the "Add Album" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAlbumEvent {
    /// Save was activated with this (untrimmed) name.
    Saved(String),
    /// The dialog was dismissed.
    Closed,
}

/// The album being typed into the dialog.
///
/// Holds no side effects: saving and cancelling return the event the view
/// emits to its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumDraft {
    name: String,
    open: bool,
}

impl AlbumDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog. The name typed last time is kept.
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Clear the name.
    pub fn reset(&mut self) {
        self.name.clear();
    }

    /// Whether the Save button is enabled.
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The `Saved` event for the current name, or `None` while Save is
    /// disabled.
    ///
    /// The name is passed untrimmed. The dialog stays open; the parent
    /// closes it.
    pub fn save(&self) -> Option<AddAlbumEvent> {
        self.can_save()
            .then(|| AddAlbumEvent::Saved(self.name.clone()))
    }

    /// Dismiss the dialog without saving.
    pub fn cancel(&self) -> AddAlbumEvent {
        AddAlbumEvent::Closed
    }
}
