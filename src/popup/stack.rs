// SPDX-License-Identifier: MPL-2.0
//! Popup stack and promise-lifecycle management.
//!
//! The `Stack` owns every open popup and is the only writer: showing
//! attaches a one-shot resolver, closing fires it and removes the entry.
//! The resolver fires *before* the entry leaves the stack, so by the time a
//! caller's continuation runs the popup is guaranteed gone.
//!
//! Implicit dismissal (ESC, backdrop, close icon) only ever applies to the
//! topmost entry; popups underneath keep waiting. Closing an ID that is no
//! longer present is a silent no-op, so a timer, a button handler and a
//! stray click can all race to close the same popup without harm.

use super::entry::{
    ButtonIntent, ButtonPatch, FormField, FormState, Popup, PopupButton, PopupId, Tone,
};
use super::result::{CloseAction, FormValues, PopupFuture, PopupResult};
use crate::diagnostics::DiagnosticsHandle;
use tokio::sync::oneshot;

/// An implicit dismissal gesture aimed at the topmost popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissGesture {
    /// ESC key.
    Escape,
    /// Click outside the dialog.
    Backdrop,
    /// The dialog's close icon.
    CloseIcon,
}

/// Outcome of a button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonPress {
    /// The popup closed and its future resolved with this action.
    Closed(CloseAction),
    /// A `Work` button: it is now loading and the host owns the follow-up.
    WorkStarted,
    /// Unknown popup, unknown label, or a disabled/already-loading button.
    Ignored,
}

/// Tells the host that a `Work` button is waiting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkRequested {
    pub id: PopupId,
    pub label: String,
}

/// Messages for popup state changes, emitted by the renderer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Click on the dimmed area outside the dialog.
    Backdrop,
    /// The dialog's close icon.
    CloseIcon,
    /// ESC key.
    Escape,
    /// A dialog button was pressed.
    Button(PopupId, String),
    /// A form field changed.
    FormInput(PopupId, String, String),
}

/// Inputs for the confirm convenience constructor.
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    title: String,
    message: String,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
    danger: bool,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: None,
            cancel_text: None,
            danger: false,
        }
    }

    /// Replaces the confirm button label.
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Replaces the cancel button label.
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Styles the confirm button as destructive.
    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    fn into_popup(self) -> Popup {
        use super::entry::ButtonStyle;

        let confirm_style = if self.danger {
            ButtonStyle::Danger
        } else {
            ButtonStyle::Primary
        };
        let tone = if self.danger {
            Tone::Danger
        } else {
            Tone::Neutral
        };
        let cancel = PopupButton::close(
            self.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
            CloseAction::Cancel,
        )
        .style(ButtonStyle::Secondary);
        let confirm = PopupButton::close(
            self.confirm_text.unwrap_or_else(|| "Confirm".to_string()),
            CloseAction::Confirm,
        )
        .style(confirm_style);

        Popup::confirm(self.title, self.message)
            .with_tone(tone)
            .with_buttons(vec![cancel, confirm])
    }
}

/// Inputs for the alert convenience constructor.
#[derive(Debug, Clone)]
pub struct AlertOptions {
    title: String,
    message: String,
    button_text: Option<String>,
    tone: Tone,
}

impl AlertOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            button_text: None,
            tone: Tone::Neutral,
        }
    }

    /// Replaces the acknowledgement button label.
    #[must_use]
    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    /// Sets the accent tone.
    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    fn into_popup(self) -> Popup {
        let button = PopupButton::close(
            self.button_text.unwrap_or_else(|| "OK".to_string()),
            CloseAction::Close,
        );
        Popup::alert(self.title, self.message)
            .with_tone(self.tone)
            .with_buttons(vec![button])
    }
}

/// Inputs for the form convenience constructor.
#[derive(Debug, Clone)]
pub struct FormOptions {
    title: String,
    message: Option<String>,
    fields: Vec<FormField>,
    submit_text: Option<String>,
    cancel_text: Option<String>,
}

impl FormOptions {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            message: None,
            fields,
            submit_text: None,
            cancel_text: None,
        }
    }

    /// Adds explanatory body text above the fields.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the submit button label.
    #[must_use]
    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Replaces the cancel button label.
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    fn into_popup(self) -> Popup {
        use super::entry::ButtonStyle;

        let cancel = PopupButton::close(
            self.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
            CloseAction::Cancel,
        )
        .style(ButtonStyle::Secondary);
        let submit = PopupButton::close(
            self.submit_text.unwrap_or_else(|| "Submit".to_string()),
            CloseAction::Submit,
        );

        let mut popup = Popup::form(self.title, self.fields).with_buttons(vec![cancel, submit]);
        if let Some(message) = self.message {
            popup = popup.with_message(message);
        }
        popup
    }
}

/// Manages the popup stack.
#[derive(Debug, Default)]
pub struct Stack {
    /// Open popups, oldest first; the last entry is topmost.
    entries: Vec<Popup>,
    /// Optional diagnostics handle for logging failed button work.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a popup and returns its pending result.
    ///
    /// The future resolves exactly once, when the entry is closed by a
    /// button, a dismissal gesture, an explicit `close`, or `close_all`.
    pub fn show(&mut self, mut popup: Popup) -> PopupFuture {
        let (tx, rx) = oneshot::channel();
        popup.attach_resolver(tx);
        let id = popup.id();
        self.entries.push(popup);
        PopupFuture::new(id, rx)
    }

    /// Pushes a popup without a caller-visible future.
    ///
    /// Meant for loading popups, which are closed programmatically by the
    /// operation they represent rather than by user action; resolving a
    /// detached entry is a safe no-op.
    pub fn show_detached(&mut self, popup: Popup) -> PopupId {
        let id = popup.id();
        self.entries.push(popup);
        id
    }

    /// Shows a confirmation dialog.
    pub fn confirm(&mut self, options: ConfirmOptions) -> PopupFuture {
        self.show(options.into_popup())
    }

    /// Shows an acknowledgement dialog.
    pub fn alert(&mut self, options: AlertOptions) -> PopupFuture {
        self.show(options.into_popup())
    }

    /// Shows a form dialog.
    pub fn form(&mut self, options: FormOptions) -> PopupFuture {
        self.show(options.into_popup())
    }

    /// Shows a caller-assembled dialog.
    pub fn custom(&mut self, popup: Popup) -> PopupFuture {
        self.show(popup)
    }

    /// Shows a detached loading popup and returns its ID for a later
    /// targeted `close`.
    pub fn loading(&mut self, title: impl Into<String>) -> PopupId {
        self.show_detached(Popup::loading(title))
    }

    /// Closes a popup: the one with the given ID, or the topmost if `None`.
    ///
    /// The entry's future is resolved with `action` (and `data`, if any)
    /// before the entry is removed. Returns `false` without side effects if
    /// the target does not exist; a stale close is never an error.
    pub fn close(
        &mut self,
        action: CloseAction,
        data: Option<FormValues>,
        id: Option<PopupId>,
    ) -> bool {
        let index = match id {
            Some(id) => match self.entries.iter().position(|p| p.id() == id) {
                Some(index) => index,
                None => return false,
            },
            None => {
                if self.entries.is_empty() {
                    return false;
                }
                self.entries.len() - 1
            }
        };
        let result = match data {
            Some(data) => PopupResult::with_data(action, data),
            None => PopupResult::new(action),
        };
        self.resolve_and_remove(index, result);
        true
    }

    /// Resolves every pending future with [`CloseAction::CloseAll`] and
    /// empties the stack. Used for hard resets such as logout.
    pub fn close_all(&mut self) {
        for mut popup in self.entries.drain(..) {
            if let Some(tx) = popup.take_resolver() {
                let _ = tx.send(PopupResult::new(CloseAction::CloseAll));
            }
        }
    }

    /// Applies an implicit dismissal gesture to the topmost popup.
    ///
    /// Persistent popups ignore every gesture; backdrop clicks additionally
    /// require `backdrop_dismiss`. Returns whether a popup closed.
    pub fn dismiss_top(&mut self, gesture: DismissGesture) -> bool {
        let Some(top) = self.entries.last() else {
            return false;
        };
        if top.is_persistent() {
            return false;
        }
        let allowed = match gesture {
            DismissGesture::Escape | DismissGesture::CloseIcon => top.is_closable(),
            DismissGesture::Backdrop => top.is_closable() && top.dismisses_on_backdrop(),
        };
        if !allowed {
            return false;
        }

        let action = top.dismiss_action();
        let index = self.entries.len() - 1;
        self.resolve_and_remove(index, PopupResult::new(action));
        true
    }

    /// Presses a button on the given popup.
    ///
    /// `Close` intents resolve and remove the popup immediately (a form's
    /// submit carries the collected values). `Work` intents flip the button
    /// to loading + disabled and leave the rest to the host, which must
    /// eventually call [`finish_button`](Self::finish_button).
    pub fn press_button(&mut self, id: PopupId, label: &str) -> ButtonPress {
        let Some(index) = self.entries.iter().position(|p| p.id() == id) else {
            return ButtonPress::Ignored;
        };
        let action = {
            let popup = &mut self.entries[index];
            let Some(button) = popup.buttons_mut().iter_mut().find(|b| b.label() == label)
            else {
                return ButtonPress::Ignored;
            };
            if button.is_disabled() || button.is_loading() {
                return ButtonPress::Ignored;
            }
            match button.intent().clone() {
                ButtonIntent::Work => {
                    button.set_loading(true);
                    button.set_disabled(true);
                    return ButtonPress::WorkStarted;
                }
                ButtonIntent::Close(action) => action,
            }
        };

        let data = match action {
            CloseAction::Submit => self.entries[index].form().map(FormState::values),
            _ => None,
        };
        let result = match data {
            Some(data) => PopupResult::with_data(action.clone(), data),
            None => PopupResult::new(action.clone()),
        };
        self.resolve_and_remove(index, result);
        ButtonPress::Closed(action)
    }

    /// Ends a `Work` button press.
    ///
    /// The button's loading and disabled flags are cleared no matter how
    /// the host's task ended; a failure must never wedge the dialog in a
    /// loading state. On `Ok(Some(result))` the popup then closes with that
    /// result; on `Ok(None)` it stays open; on `Err` it stays open so the
    /// user can retry or cancel, and the failure is logged to diagnostics
    /// rather than surfaced through the popup's own future.
    pub fn finish_button(
        &mut self,
        id: PopupId,
        label: &str,
        outcome: Result<Option<PopupResult>, String>,
    ) {
        let Some(index) = self.entries.iter().position(|p| p.id() == id) else {
            // Popup closed while the work ran; nothing left to update.
            return;
        };
        let popup = &mut self.entries[index];
        if let Some(button) = popup.buttons_mut().iter_mut().find(|b| b.label() == label) {
            button.set_loading(false);
            button.set_disabled(false);
        }

        match outcome {
            Ok(Some(result)) => self.resolve_and_remove(index, result),
            Ok(None) => {}
            Err(message) => {
                if let Some(handle) = &self.diagnostics {
                    handle.log_error(message);
                }
            }
        }
    }

    /// Merges fields into a button, e.g. `{loading: true, disabled: true}`
    /// while an async action runs. Returns `false` if popup or button is
    /// missing.
    pub fn update_button(&mut self, id: PopupId, label: &str, patch: ButtonPatch) -> bool {
        let Some(popup) = self.entries.iter_mut().find(|p| p.id() == id) else {
            return false;
        };
        let Some(button) = popup.buttons_mut().iter_mut().find(|b| b.label() == label) else {
            return false;
        };
        if let Some(loading) = patch.loading {
            button.set_loading(loading);
        }
        if let Some(disabled) = patch.disabled {
            button.set_disabled(disabled);
        }
        if let Some(label) = patch.label {
            button.set_label(label);
        }
        true
    }

    /// Writes a form field value. Returns `false` for an unknown popup,
    /// a formless popup, or an unknown key.
    pub fn set_form_value(&mut self, id: PopupId, key: &str, value: impl Into<String>) -> bool {
        let Some(popup) = self.entries.iter_mut().find(|p| p.id() == id) else {
            return false;
        };
        match popup.form_mut() {
            Some(form) => form.set_value(key, value),
            None => false,
        }
    }

    /// Handles a renderer message.
    ///
    /// Returns a [`WorkRequested`] when a `Work` button started, so the
    /// host can run the matching task and report back via `finish_button`.
    pub fn handle_message(&mut self, message: &Message) -> Option<WorkRequested> {
        match message {
            Message::Backdrop => {
                self.dismiss_top(DismissGesture::Backdrop);
                None
            }
            Message::CloseIcon => {
                self.dismiss_top(DismissGesture::CloseIcon);
                None
            }
            Message::Escape => {
                self.dismiss_top(DismissGesture::Escape);
                None
            }
            Message::Button(id, label) => match self.press_button(*id, label) {
                ButtonPress::WorkStarted => Some(WorkRequested {
                    id: *id,
                    label: label.clone(),
                }),
                ButtonPress::Closed(_) | ButtonPress::Ignored => None,
            },
            Message::FormInput(id, key, value) => {
                self.set_form_value(*id, key, value.clone());
                None
            }
        }
    }

    /// Returns the topmost popup, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Popup> {
        self.entries.last()
    }

    /// Returns the open popups in insertion order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &Popup> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: PopupId) -> bool {
        self.entries.iter().any(|p| p.id() == id)
    }

    /// Fires the entry's resolver, then removes it from the stack, in that
    /// order: a continuation woken by the result must find the entry gone.
    fn resolve_and_remove(&mut self, index: usize, result: PopupResult) {
        if let Some(tx) = self.entries[index].take_resolver() {
            let _ = tx.send(result);
        }
        self.entries.remove(index);
    }
}
