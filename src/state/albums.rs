//! Album state management.
//!
//! This module holds the global state shared by the album views: the storage
//! client, the runtime its requests run on, and the folders found in the
//! bucket.

use gpui::*;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::services::bucket::AlbumStorage;

use super::album_actions::refresh_folders;

/// Progress of the folder listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlbumLoadStatus {
    /// No bucket is configured.
    Unconfigured,
    Idle,
    Loading,
    Loaded,
}

/// Global state for the photo albums.
pub struct AlbumState {
    /// Storage client, `None` when the bucket is not configured.
    pub storage: Option<Arc<AlbumStorage>>,
    /// Runtime driving storage requests.
    pub runtime: Handle,
    /// Folders (common prefixes) at the bucket root.
    pub folders: Vec<String>,
    pub status: AlbumLoadStatus,
}

impl Global for AlbumState {}

impl AlbumState {
    /// Initialize the global album state and start loading the folders.
    pub fn init(runtime: Handle, storage: Option<Arc<AlbumStorage>>, cx: &mut App) {
        let status = if storage.is_some() {
            AlbumLoadStatus::Idle
        } else {
            AlbumLoadStatus::Unconfigured
        };

        cx.set_global(AlbumState {
            storage,
            runtime,
            folders: vec![],
            status,
        });

        refresh_folders(cx);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, AlbumLoadStatus::Loading)
    }
}

/// Album name shown for a folder prefix (`"summer/"` -> `"summer"`).
pub fn folder_display_name(folder: &str) -> &str {
    folder.strip_suffix('/').unwrap_or(folder)
}
