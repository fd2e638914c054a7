// SPDX-License-Identifier: MPL-2.0
//! Popup results and the one-shot future returned by `show`.
//!
//! Every normal closure path resolves the future with a [`PopupResult`];
//! there is no error case a caller has to handle. Cancellation, backdrop
//! clicks and hard resets are just different [`CloseAction`]s.

use super::entry::PopupId;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Form values collected on submit, as `(key, value)` pairs in field order.
pub type FormValues = Vec<(String, String)>;

/// How a popup was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseAction {
    /// The confirm button.
    Confirm,
    /// The cancel button, or an implicit dismissal of a confirm dialog.
    Cancel,
    /// A form's submit button.
    Submit,
    /// Backdrop click, ESC, or the close icon.
    Dismiss,
    /// A plain close (acknowledgement buttons, programmatic close).
    Close,
    /// The stack was reset while this popup was open.
    CloseAll,
    /// A caller-defined action.
    Custom(String),
}

/// The value a popup's future resolves with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupResult {
    pub action: CloseAction,
    pub data: Option<FormValues>,
}

impl PopupResult {
    #[must_use]
    pub fn new(action: CloseAction) -> Self {
        Self { action, data: None }
    }

    #[must_use]
    pub fn with_data(action: CloseAction, data: FormValues) -> Self {
        Self {
            action,
            data: Some(data),
        }
    }

    /// Returns whether the user answered affirmatively.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self.action, CloseAction::Confirm | CloseAction::Submit)
    }
}

/// A pending popup result.
///
/// Resolves exactly once, when the matching entry is closed. If the owning
/// stack is torn down without closing the popup first (host shutdown), the
/// future resolves with [`CloseAction::Close`] instead of hanging or
/// erroring.
#[derive(Debug)]
pub struct PopupFuture {
    id: PopupId,
    rx: oneshot::Receiver<PopupResult>,
}

impl PopupFuture {
    pub(crate) fn new(id: PopupId, rx: oneshot::Receiver<PopupResult>) -> Self {
        Self { id, rx }
    }

    /// The ID of the popup this future belongs to, for targeted `close`
    /// or `press_button` calls while it is still open.
    #[must_use]
    pub fn id(&self) -> PopupId {
        self.id
    }
}

impl Future for PopupFuture {
    type Output = PopupResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Sender dropped without a send: the stack is gone.
            Poll::Ready(Err(_)) => Poll::Ready(PopupResult::new(CloseAction::Close)),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_covers_confirm_and_submit() {
        assert!(PopupResult::new(CloseAction::Confirm).is_confirmed());
        assert!(PopupResult::new(CloseAction::Submit).is_confirmed());
        assert!(!PopupResult::new(CloseAction::Cancel).is_confirmed());
        assert!(!PopupResult::new(CloseAction::CloseAll).is_confirmed());
    }

    #[tokio::test]
    async fn future_resolves_with_sent_result() {
        let (tx, rx) = oneshot::channel();
        let future = PopupFuture::new(PopupId::new(), rx);

        tx.send(PopupResult::new(CloseAction::Confirm)).unwrap();
        assert_eq!(future.await, PopupResult::new(CloseAction::Confirm));
    }

    #[tokio::test]
    async fn dropped_sender_resolves_to_close() {
        let (tx, rx) = oneshot::channel::<PopupResult>();
        let future = PopupFuture::new(PopupId::new(), rx);

        drop(tx);
        assert_eq!(future.await.action, CloseAction::Close);
    }
}
