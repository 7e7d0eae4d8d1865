use anyhow::Result;
use gpui::*;
use gpui_component::Root;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "keyboard-nav")]
use palbum::keybindings;
use palbum::services::bucket::{AlbumStorage, StorageConfig, StorageError};
use palbum::state::AlbumState;
use palbum::workspace::Home;

fn init_storage() -> Result<AlbumStorage, StorageError> {
    let config = StorageConfig::from_env()?;
    let storage = AlbumStorage::from_config(&config)?;
    tracing::info!("Using bucket {} in {}", storage.bucket(), config.region);
    Ok(storage)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // OpenDAL's HTTP client needs a tokio reactor, gpui does not provide one.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let handle = runtime.handle().clone();

    let storage = match init_storage() {
        Ok(storage) => Some(Arc::new(storage)),
        Err(e) => {
            tracing::warn!("Album storage disabled: {}", e);
            None
        }
    };

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);
        AlbumState::init(handle, storage, cx);

        #[cfg(feature = "keyboard-nav")]
        keybindings::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::centered(size(px(960.), px(640.)), cx)),
            titlebar: Some(TitlebarOptions {
                title: Some("Photo Albums".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let home = Home::view(window, cx);
            cx.new(|cx| Root::new(home, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
