//! "Add Album" modal dialog.

use gpui::*;
use gpui_component::{
    ActiveTheme as _, Disableable as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

#[cfg(feature = "keyboard-nav")]
use crate::keybindings::album::CloseDialog;
use crate::keybindings::ADD_ALBUM_CONTEXT;

use super::draft::{AddAlbumEvent, AlbumDraft};

impl EventEmitter<AddAlbumEvent> for AddAlbumDialog {}

/// Modal form collecting the name of a new album.
///
/// The dialog never closes itself: the parent reacts to `Saved` / `Closed`
/// and calls [`AddAlbumDialog::close`].
pub struct AddAlbumDialog {
    draft: AlbumDraft,
    name: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl AddAlbumDialog {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| InputState::new(window, cx).placeholder("Pedro Duarte"));

        let _subscriptions = vec![cx.subscribe_in(&name, window, Self::on_input_event)];

        Self {
            draft: AlbumDraft::new(),
            name,
            _subscriptions,
        }
    }

    fn on_input_event(
        &mut self,
        input: &Entity<InputState>,
        event: &InputEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change { .. } => {
                let value = input.read(cx).value().to_string();
                self.draft.set_name(value);
                cx.notify();
            }
            InputEvent::PressEnter { .. } => self.save(cx),
            _ => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_open()
    }

    /// Show the dialog and focus the name field.
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.draft.open();
        self.name.update(cx, |input, cx| input.focus(window, cx));
        cx.notify();
    }

    pub fn close(&mut self, cx: &mut Context<Self>) {
        self.draft.close();
        cx.notify();
    }

    /// Clear the name field.
    pub fn reset(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.draft.reset();
        self.name
            .update(cx, |input, cx| input.set_value("", window, cx));
        cx.notify();
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        if let Some(event) = self.draft.save() {
            cx.emit(event);
        }
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(self.draft.cancel());
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_close_dialog(&mut self, _: &CloseDialog, _window: &mut Window, cx: &mut Context<Self>) {
        self.cancel(cx);
    }

    fn render_dialog(&self, cx: &mut Context<Self>) -> Div {
        let can_save = self.draft.can_save();

        v_flex()
            .w(px(425.))
            .p_6()
            .gap_4()
            .bg(cx.theme().background)
            .border_1()
            .border_color(cx.theme().border)
            .rounded_lg()
            // Keep clicks inside the dialog from reaching the backdrop
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(
                v_flex()
                    .gap_1()
                    .child(Label::new("Add Album").text_lg())
                    .child(
                        Label::new("Enter the album details. Click save when you're done.")
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(
                h_flex()
                    .gap_4()
                    .items_center()
                    .child(div().w(px(80.)).child(Label::new("Name").text_sm()))
                    .child(div().flex_1().child(Input::new(&self.name))),
            )
            .child(
                h_flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::new("cancel-album")
                            .child("Cancel")
                            .on_click(cx.listener(|this, _, _, cx| this.cancel(cx))),
                    )
                    .child(
                        Button::new("save-album")
                            .primary()
                            .child("Save")
                            .disabled(!can_save)
                            .on_click(cx.listener(|this, _, _, cx| this.save(cx))),
                    ),
            )
    }
}

impl Render for AddAlbumDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.draft.is_open() {
            return div().into_any_element();
        }

        let overlay = div()
            .id("add-album-overlay")
            .key_context(ADD_ALBUM_CONTEXT)
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x000000AA))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, _, cx| this.cancel(cx)),
            )
            .child(self.render_dialog(cx));

        #[cfg(feature = "keyboard-nav")]
        let overlay = overlay.on_action(cx.listener(Self::on_close_dialog));

        overlay.into_any_element()
    }
}
