//! Home screen: the album list and the "Add Album" trigger.

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Disableable as _, Sizable as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    v_flex,
};

#[cfg(feature = "keyboard-nav")]
use crate::keybindings::album::{NewAlbum, RefreshAlbums};
use crate::state::{AlbumLoadStatus, AlbumState, folder_display_name, refresh_folders};

use super::albums::{AddAlbumDialog, AddAlbumEvent};

pub struct Home {
    add_album: Entity<AddAlbumDialog>,
    folders: Vec<String>,
    status: AlbumLoadStatus,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Home {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let add_album = AddAlbumDialog::view(window, cx);

        let _subscriptions = vec![
            cx.observe_global::<AlbumState>(move |this, cx| {
                let state = cx.global::<AlbumState>();
                this.folders = state.folders.clone();
                this.status = state.status.clone();
                cx.notify();
            }),
            cx.subscribe_in(
                &add_album,
                window,
                |_this, dialog, event: &AddAlbumEvent, window, cx| match event {
                    AddAlbumEvent::Saved(name) => {
                        // Metadata is not persisted yet, the name is only logged.
                        tracing::info!("Album name committed: {}", name);
                        dialog.update(cx, |dialog, cx| {
                            dialog.close(cx);
                            dialog.reset(window, cx);
                        });
                    }
                    AddAlbumEvent::Closed => {
                        dialog.update(cx, |dialog, cx| dialog.close(cx));
                    }
                },
            ),
        ];

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let state = cx.global::<AlbumState>();

        Self {
            folders: state.folders.clone(),
            status: state.status.clone(),
            add_album,
            focus_handle,
            _subscriptions,
        }
    }

    fn open_add_album(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.add_album
            .update(cx, |dialog, cx| dialog.open(window, cx));
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_new_album(&mut self, _: &NewAlbum, window: &mut Window, cx: &mut Context<Self>) {
        if !self.add_album.read(cx).is_open() {
            self.open_add_album(window, cx);
        }
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_refresh_albums(&mut self, _: &RefreshAlbums, _window: &mut Window, cx: &mut Context<Self>) {
        refresh_folders(cx);
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let can_refresh = self.status == AlbumLoadStatus::Loaded;

        h_flex()
            .justify_between()
            .items_center()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(Label::new("Albums").text_lg())
            .child(
                Button::new("refresh-albums")
                    .child("Refresh")
                    .small()
                    .ghost()
                    .disabled(!can_refresh)
                    .on_click(cx.listener(|_this, _, _, cx| refresh_folders(cx))),
            )
    }

    fn render_albums(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        let body: AnyElement = match self.status {
            AlbumLoadStatus::Unconfigured => Label::new(
                "Storage not configured. Set AWS_BUCKET (and credentials) and restart.",
            )
            .text_sm()
            .text_color(muted)
            .into_any_element(),
            AlbumLoadStatus::Idle | AlbumLoadStatus::Loading => Label::new("Loading albums...")
                .text_sm()
                .text_color(muted)
                .into_any_element(),
            AlbumLoadStatus::Loaded => v_flex()
                .gap_1()
                .when(self.folders.is_empty(), |d| {
                    d.child(Label::new("No albums yet").text_sm().text_color(muted))
                })
                .children(self.folders.iter().map(|folder| {
                    div()
                        .px_2()
                        .py_1()
                        .rounded_md()
                        .child(Label::new(folder_display_name(folder).to_string()))
                }))
                .into_any_element(),
        };

        div()
            .id("album-list")
            .flex_1()
            .p_4()
            .overflow_y_scroll()
            .child(body)
    }
}

impl Render for Home {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let root = div()
            .id("home")
            .track_focus(&self.focus_handle)
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .bg(cx.theme().background);

        #[cfg(feature = "keyboard-nav")]
        let root = root
            .on_action(cx.listener(Self::on_new_album))
            .on_action(cx.listener(Self::on_refresh_albums));

        root.child(self.render_header(cx))
            .child(self.render_albums(cx))
            .child(
                div().absolute().bottom_4().right_4().child(
                    Button::new("add-album")
                        .primary()
                        .child("+ Add Album")
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.open_add_album(window, cx)
                        })),
                ),
            )
            .child(self.add_album.clone())
    }
}
