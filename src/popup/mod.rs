// SPDX-License-Identifier: MPL-2.0
//! Modal popup dialogs with one-shot results.
//!
//! Popups are round-trip: showing one returns a [`PopupFuture`] that the
//! opener can await, and closing it (a button, the backdrop, ESC, or an
//! explicit call) resolves that future exactly once with the chosen
//! [`CloseAction`] and any collected data. Entries form a stack: rendering
//! is insertion-ordered, but implicit dismissal gestures only ever reach the
//! topmost entry.
//!
//! # Components
//!
//! - [`entry`] - `Popup` entries, kinds, buttons and form state
//! - [`result`] - `PopupResult`, `CloseAction` and the one-shot future
//! - [`stack`] - `Stack` dispatcher owning the promise-lifecycle contract
//!
//! # Usage
//!
//! ```
//! use iced_herald::popup::{ConfirmOptions, Stack};
//!
//! let mut stack = Stack::new();
//! let decision = stack.confirm(ConfirmOptions::new("Delete?", "No way back."));
//!
//! // ... user clicks the confirm button ...
//! stack.press_button(decision.id(), "Confirm");
//! # let _ = decision;
//! ```

pub mod entry;
pub mod result;
pub mod stack;

pub use entry::{
    ButtonIntent, ButtonPatch, ButtonStyle, FormField, FormState, Popup, PopupButton, PopupId,
    PopupKind, Tone,
};
pub use result::{CloseAction, FormValues, PopupFuture, PopupResult};
pub use stack::{
    AlertOptions, ButtonPress, ConfirmOptions, DismissGesture, FormOptions, Message, Stack,
    WorkRequested,
};
