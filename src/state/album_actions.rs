//! Album state actions.
//!
//! This module contains actions that modify the global AlbumState.

use gpui::*;

use super::albums::{AlbumLoadStatus, AlbumState};

/// Reload the folder list from the bucket.
///
/// Does nothing when storage is not configured or a load is in flight.
pub fn refresh_folders(cx: &mut App) {
    let (storage, runtime) = {
        let state = cx.global::<AlbumState>();
        if state.is_loading() {
            return;
        }
        let Some(storage) = state.storage.clone() else {
            return;
        };
        (storage, state.runtime.clone())
    };

    cx.update_global::<AlbumState, _>(|state, _cx| {
        state.status = AlbumLoadStatus::Loading;
    });

    // Storage requests need the tokio reactor; the UI only awaits the result.
    let task = runtime.spawn(async move { storage.list_folders().await });

    cx.spawn(async move |cx| {
        let folders = match task.await {
            Ok(folders) => folders,
            Err(e) => {
                tracing::error!("Folder listing task failed: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Loaded {} album folders", folders.len());

        let _ = cx.update_global::<AlbumState, _>(|state, _cx| {
            state.folders = folders;
            state.status = AlbumLoadStatus::Loaded;
        });
    })
    .detach();
}
