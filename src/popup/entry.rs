// SPDX-License-Identifier: MPL-2.0
//! Core popup data structures.
//!
//! A `Popup` is built by one of the fixed per-kind constructors (confirm,
//! alert, loading, form) or assembled field by field for the custom kind.
//! Required fields are enforced at construction time instead of runtime
//! validation: there is no way to build a confirm dialog without its two
//! buttons, or a loading popup that a stray click could dismiss.

use super::result::{CloseAction, FormValues, PopupResult};
use tokio::sync::oneshot;

/// Unique identifier for a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId(u64);

impl PopupId {
    /// Creates a new unique popup ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PopupId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    /// Two-way decision; implicit dismissal resolves `Cancel`.
    Confirm,
    /// Single acknowledgement button.
    Alert,
    /// Free-form dialog assembled by the caller.
    Custom,
    /// Progress indicator closed programmatically, never by the user.
    Loading,
    /// Input fields whose values are returned on submit.
    Form,
}

/// Accent applied to a dialog (colors the title strip and glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Visual emphasis of a popup button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// What pressing a button does.
///
/// `Close` resolves the popup's future with the given action and removes it.
/// `Work` hands control to the host: the button flips to its loading state
/// and stays there until [`Stack::finish_button`](super::stack::Stack::finish_button)
/// reports how the host's async task ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonIntent {
    Close(CloseAction),
    Work,
}

/// A button on a popup.
#[derive(Debug, Clone)]
pub struct PopupButton {
    label: String,
    style: ButtonStyle,
    intent: ButtonIntent,
    disabled: bool,
    loading: bool,
}

impl PopupButton {
    /// Creates a button that closes the popup with the given action.
    pub fn close(label: impl Into<String>, action: CloseAction) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::default(),
            intent: ButtonIntent::Close(action),
            disabled: false,
            loading: false,
        }
    }

    /// Creates a button that starts host-driven async work.
    pub fn work(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::default(),
            intent: ButtonIntent::Work,
            disabled: false,
            loading: false,
        }
    }

    /// Sets the visual style.
    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Starts the button out disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn button_style(&self) -> ButtonStyle {
        self.style
    }

    #[must_use]
    pub fn intent(&self) -> &ButtonIntent {
        &self.intent
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

/// A partial update merged into an existing button.
#[derive(Debug, Clone, Default)]
pub struct ButtonPatch {
    pub label: Option<String>,
    pub loading: Option<bool>,
    pub disabled: Option<bool>,
}

/// One input field of a form popup.
#[derive(Debug, Clone)]
pub struct FormField {
    key: String,
    label: String,
    value: String,
    placeholder: String,
    secret: bool,
}

impl FormField {
    /// Creates a text field with the given stable key and display label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: String::new(),
            placeholder: String::new(),
            secret: false,
        }
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Masks the input (passwords).
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn current_value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn is_secret(&self) -> bool {
        self.secret
    }
}

/// Field schema plus current values of a form popup.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    #[must_use]
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Writes a field value; returns `false` for an unknown key.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the current values as `(key, value)` pairs in field order.
    #[must_use]
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.key.clone(), f.value.clone()))
            .collect()
    }
}

/// A modal dialog on the stack.
#[derive(Debug)]
pub struct Popup {
    id: PopupId,
    kind: PopupKind,
    tone: Tone,
    title: String,
    message: Option<String>,
    buttons: Vec<PopupButton>,
    /// Close icon and ESC are honored.
    closable: bool,
    /// Clicking outside the dialog counts as a dismiss gesture.
    backdrop_dismiss: bool,
    /// Suppresses every implicit dismissal path.
    persistent: bool,
    form: Option<FormState>,
    /// Fires at most once; `None` for detached (loading) popups, or after
    /// the result has been delivered.
    resolver: Option<oneshot::Sender<PopupResult>>,
}

impl Popup {
    fn base(kind: PopupKind, title: impl Into<String>) -> Self {
        Self {
            id: PopupId::new(),
            kind,
            tone: Tone::default(),
            title: title.into(),
            message: None,
            buttons: Vec::new(),
            closable: true,
            backdrop_dismiss: true,
            persistent: false,
            form: None,
            resolver: None,
        }
    }

    /// A two-button confirmation dialog. Always carries exactly a cancel
    /// and a confirm button; backdrop and ESC resolve `Cancel`.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        let mut popup = Self::base(PopupKind::Confirm, title);
        popup.message = Some(message.into());
        popup.buttons = vec![
            PopupButton::close("Cancel", CloseAction::Cancel).style(ButtonStyle::Secondary),
            PopupButton::close("Confirm", CloseAction::Confirm),
        ];
        popup
    }

    /// A single-button acknowledgement dialog.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        let mut popup = Self::base(PopupKind::Alert, title);
        popup.message = Some(message.into());
        popup.buttons = vec![PopupButton::close("OK", CloseAction::Close)];
        popup
    }

    /// A progress dialog. Persistent and buttonless: only an explicit
    /// `close` targeting its ID removes it.
    pub fn loading(title: impl Into<String>) -> Self {
        let mut popup = Self::base(PopupKind::Loading, title);
        popup.closable = false;
        popup.backdrop_dismiss = false;
        popup.persistent = true;
        popup
    }

    /// A form dialog; submit resolves with the collected values.
    pub fn form(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        let mut popup = Self::base(PopupKind::Form, title);
        popup.form = Some(FormState::new(fields));
        popup.buttons = vec![
            PopupButton::close("Cancel", CloseAction::Cancel).style(ButtonStyle::Secondary),
            PopupButton::close("Submit", CloseAction::Submit),
        ];
        popup
    }

    /// A free-form dialog; use the builder methods to fill it in.
    pub fn custom(title: impl Into<String>) -> Self {
        Self::base(PopupKind::Custom, title)
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the accent tone.
    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Appends a button.
    #[must_use]
    pub fn with_button(mut self, button: PopupButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Replaces the buttons wholesale.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Vec<PopupButton>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Controls whether the close icon and ESC dismiss this popup.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Controls whether a backdrop click dismisses this popup.
    #[must_use]
    pub fn backdrop_dismiss(mut self, backdrop_dismiss: bool) -> Self {
        self.backdrop_dismiss = backdrop_dismiss;
        self
    }

    /// Suppresses all implicit dismissal (backdrop, ESC, close icon).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> PopupId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PopupKind {
        self.kind
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn buttons(&self) -> &[PopupButton] {
        &self.buttons
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn dismisses_on_backdrop(&self) -> bool {
        self.backdrop_dismiss
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    /// The action an implicit dismissal gesture resolves with.
    #[must_use]
    pub fn dismiss_action(&self) -> CloseAction {
        match self.kind {
            PopupKind::Confirm => CloseAction::Cancel,
            _ => CloseAction::Dismiss,
        }
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut [PopupButton] {
        &mut self.buttons
    }

    pub(crate) fn attach_resolver(&mut self, tx: oneshot::Sender<PopupResult>) {
        self.resolver = Some(tx);
    }

    /// Takes the resolver out, guaranteeing at most one fulfillment.
    pub(crate) fn take_resolver(&mut self) -> Option<oneshot::Sender<PopupResult>> {
        self.resolver.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_ids_are_unique() {
        assert_ne!(Popup::custom("a").id(), Popup::custom("b").id());
    }

    #[test]
    fn confirm_carries_cancel_and_confirm_buttons() {
        let popup = Popup::confirm("Delete?", "Really?");
        assert_eq!(popup.kind(), PopupKind::Confirm);
        let labels: Vec<_> = popup.buttons().iter().map(PopupButton::label).collect();
        assert_eq!(labels, vec!["Cancel", "Confirm"]);
        assert!(popup.is_closable());
        assert!(popup.dismisses_on_backdrop());
        assert_eq!(popup.dismiss_action(), CloseAction::Cancel);
    }

    #[test]
    fn alert_has_one_button_and_dismisses_neutrally() {
        let popup = Popup::alert("Done", "All saved.");
        assert_eq!(popup.buttons().len(), 1);
        assert_eq!(popup.dismiss_action(), CloseAction::Dismiss);
    }

    #[test]
    fn loading_is_locked_down() {
        let popup = Popup::loading("Saving");
        assert!(popup.is_persistent());
        assert!(!popup.is_closable());
        assert!(!popup.dismisses_on_backdrop());
        assert!(popup.buttons().is_empty());
    }

    #[test]
    fn form_state_tracks_values_by_key() {
        let mut state = FormState::new(vec![
            FormField::new("name", "Name").value("Ada"),
            FormField::new("pin", "PIN").secret(),
        ]);

        assert!(state.set_value("pin", "1234"));
        assert!(!state.set_value("missing", "x"));
        assert_eq!(
            state.values(),
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("pin".to_string(), "1234".to_string())
            ]
        );
    }

    #[test]
    fn custom_builder_accumulates_fields() {
        let popup = Popup::custom("Session expiring")
            .with_message("You will be logged out soon.")
            .with_tone(Tone::Warning)
            .with_button(PopupButton::close("Log out", CloseAction::Custom("logout".into())))
            .with_button(PopupButton::work("Stay signed in"))
            .backdrop_dismiss(false);

        assert_eq!(popup.kind(), PopupKind::Custom);
        assert_eq!(popup.tone(), Tone::Warning);
        assert_eq!(popup.buttons().len(), 2);
        assert!(!popup.dismisses_on_backdrop());
        assert!(popup.is_closable());
    }
}
