// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::popup::{self, PopupId, PopupResult};
use crate::toast;
use std::time::Instant;

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Theme override: "light", "dark" or "system".
    pub theme: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// queue-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast::Message),
    Popup(popup::Message),
    /// Periodic tick for auto-dismiss deadlines and diagnostics draining.
    Tick(Instant),
    /// Cycle the theme mode and persist it.
    ThemeToggled,

    // Demo triggers
    ShowSuccess,
    ShowInfo,
    ShowWarning,
    ShowError,
    ShowDuplicateErrors,
    ShowConfirm,
    ShowAlert,
    ShowForm,
    ShowLoading,
    ShowAsyncWork,
    ResetAll,

    /// A confirm/alert/form future resolved.
    PopupResolved(PopupResult),
    /// The simulated operation behind a loading popup finished.
    LoadingDone(PopupId),
    /// The simulated task behind a `Work` button settled.
    WorkFinished {
        id: PopupId,
        label: String,
        result: Result<(), String>,
    },
}
