// SPDX-License-Identifier: MPL-2.0
//! The notification center: one toast queue plus one popup stack behind a
//! single context object.
//!
//! The center is an explicit instance, not ambient global state: the host
//! application owns it, hands references to whatever renders or updates it,
//! and tests construct as many independent centers as they need. All
//! mutations of either queue go through this API (or the queue managers it
//! exposes), which keeps the dedup, capacity and promise invariants
//! consistent on the single UI thread without locks.

use crate::config::{
    Config, DEFAULT_INFO_DURATION_MS, DEFAULT_MAX_TOASTS, DEFAULT_SUCCESS_DURATION_MS,
    DEFAULT_WARNING_DURATION_MS, MAX_MAX_TOASTS, MAX_TOAST_DURATION_MS, MIN_MAX_TOASTS,
    MIN_TOAST_DURATION_MS,
};
use crate::diagnostics::DiagnosticsHandle;
use crate::popup::{
    self, AlertOptions, CloseAction, ConfirmOptions, FormOptions, FormValues, Popup, PopupFuture,
    PopupId,
};
use crate::toast::{self, Toast, ToastId, ToastKind};
use std::time::Duration;

/// Runtime notification settings, clamped from a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub max_toasts: usize,
    pub success_duration: Duration,
    pub info_duration: Duration,
    pub warning_duration: Duration,
    /// `None` keeps errors on screen until dismissed by hand.
    pub error_duration: Option<Duration>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            success_duration: Duration::from_millis(DEFAULT_SUCCESS_DURATION_MS),
            info_duration: Duration::from_millis(DEFAULT_INFO_DURATION_MS),
            warning_duration: Duration::from_millis(DEFAULT_WARNING_DURATION_MS),
            error_duration: None,
        }
    }
}

impl NotificationSettings {
    /// Builds settings from a persisted config, clamping out-of-range
    /// values instead of rejecting them.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let n = &config.notifications;
        let defaults = Self::default();
        let clamp_ms = |ms: u64| {
            Duration::from_millis(ms.clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS))
        };
        Self {
            max_toasts: n
                .max_toasts
                .unwrap_or(defaults.max_toasts)
                .clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS),
            success_duration: n
                .success_duration_ms
                .map(clamp_ms)
                .unwrap_or(defaults.success_duration),
            info_duration: n
                .info_duration_ms
                .map(clamp_ms)
                .unwrap_or(defaults.info_duration),
            warning_duration: n
                .warning_duration_ms
                .map(clamp_ms)
                .unwrap_or(defaults.warning_duration),
            error_duration: n.error_duration_ms.map(clamp_ms),
        }
    }

    /// Returns the configured auto-dismiss duration for a toast kind.
    #[must_use]
    pub fn duration_for(&self, kind: ToastKind) -> Option<Duration> {
        match kind {
            ToastKind::Success => Some(self.success_duration),
            ToastKind::Info => Some(self.info_duration),
            ToastKind::Warning => Some(self.warning_duration),
            ToastKind::Error => self.error_duration,
        }
    }
}

/// One toast queue plus one popup stack.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    settings: NotificationSettings,
    toasts: toast::Manager,
    popups: popup::Stack,
}

impl NotificationCenter {
    /// Creates a center with the given settings.
    #[must_use]
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            toasts: toast::Manager::with_capacity(settings.max_toasts),
            popups: popup::Stack::new(),
            settings,
        }
    }

    /// Creates a center straight from a persisted config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(NotificationSettings::from_config(config))
    }

    /// Wires both queues to a diagnostics collector.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.toasts.set_diagnostics(handle.clone());
        self.popups.set_diagnostics(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Toast surface
    // ------------------------------------------------------------------

    /// Dispatches a toast, applying the configured kind duration unless the
    /// builder already chose explicit timing.
    pub fn dispatch(&mut self, toast: Toast) -> ToastId {
        let toast = if toast.has_explicit_timing() {
            toast
        } else {
            match self.settings.duration_for(toast.kind()) {
                Some(duration) => toast.duration(duration),
                None => toast.persistent(),
            }
        };
        self.toasts.dispatch(toast)
    }

    /// Dispatches a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::success(message))
    }

    /// Dispatches an info toast.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::info(message))
    }

    /// Dispatches a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::warning(message))
    }

    /// Dispatches an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::error(message))
    }

    /// Removes a toast; a stale ID is a no-op.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.toasts.remove(id)
    }

    /// Removes all toasts.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Removes all toasts of one kind.
    pub fn clear_kind(&mut self, kind: ToastKind) {
        self.toasts.clear_kind(kind);
    }

    // ------------------------------------------------------------------
    // Popup surface
    // ------------------------------------------------------------------

    /// Shows a confirmation dialog.
    pub fn confirm(&mut self, options: ConfirmOptions) -> PopupFuture {
        self.popups.confirm(options)
    }

    /// Shows an acknowledgement dialog.
    pub fn alert(&mut self, options: AlertOptions) -> PopupFuture {
        self.popups.alert(options)
    }

    /// Shows a form dialog.
    pub fn form(&mut self, options: FormOptions) -> PopupFuture {
        self.popups.form(options)
    }

    /// Shows a caller-assembled dialog.
    pub fn custom(&mut self, popup: Popup) -> PopupFuture {
        self.popups.custom(popup)
    }

    /// Shows a detached loading popup.
    pub fn loading(&mut self, title: impl Into<String>) -> PopupId {
        self.popups.loading(title)
    }

    /// Closes a popup (the given ID, or the topmost).
    pub fn close(
        &mut self,
        action: CloseAction,
        data: Option<FormValues>,
        id: Option<PopupId>,
    ) -> bool {
        self.popups.close(action, data, id)
    }

    /// Resolves every open popup with `CloseAll` and empties the stack.
    pub fn close_all(&mut self) {
        self.popups.close_all();
    }

    // ------------------------------------------------------------------
    // Shared lifecycle
    // ------------------------------------------------------------------

    /// Sweeps expired toast deadlines; call from the tick subscription.
    pub fn tick(&mut self) {
        self.toasts.tick();
    }

    /// Hard reset (logout): drops every toast and resolves every popup.
    pub fn reset(&mut self) {
        self.toasts.clear();
        self.popups.close_all();
    }

    /// Whether the tick subscription needs to run.
    #[must_use]
    pub fn has_pending_dismissals(&self) -> bool {
        self.toasts.has_pending_dismissals()
    }

    /// The toast queue, for rendering and message handling.
    #[must_use]
    pub fn toasts(&self) -> &toast::Manager {
        &self.toasts
    }

    #[must_use]
    pub fn toasts_mut(&mut self) -> &mut toast::Manager {
        &mut self.toasts
    }

    /// The popup stack, for rendering and message handling.
    #[must_use]
    pub fn popups(&self) -> &popup::Stack {
        &self.popups
    }

    #[must_use]
    pub fn popups_mut(&mut self) -> &mut popup::Stack {
        &mut self.popups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationsConfig;

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = Config {
            notifications: NotificationsConfig {
                max_toasts: Some(500),
                success_duration_ms: Some(u64::MAX),
                ..NotificationsConfig::default()
            },
            ..Config::default()
        };

        let settings = NotificationSettings::from_config(&config);
        assert_eq!(settings.max_toasts, MAX_MAX_TOASTS);
        assert_eq!(
            settings.success_duration,
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
        assert_eq!(settings.warning_duration, Duration::from_millis(7_000));
    }

    #[test]
    fn configured_durations_apply_to_dispatch() {
        let mut center = NotificationCenter::new(NotificationSettings {
            success_duration: Duration::from_secs(1),
            ..NotificationSettings::default()
        });

        center.success("quick");
        let toast = center.toasts().iter().next().unwrap();
        assert_eq!(toast.effective_duration(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn configured_error_duration_makes_errors_expire() {
        let mut center = NotificationCenter::new(NotificationSettings {
            error_duration: Some(Duration::ZERO),
            ..NotificationSettings::default()
        });

        center.error("fleeting");
        center.tick();
        assert!(center.toasts().is_empty());
    }

    #[test]
    fn explicit_builder_timing_wins_over_settings() {
        let mut center = NotificationCenter::new(NotificationSettings {
            success_duration: Duration::from_secs(1),
            ..NotificationSettings::default()
        });

        center.dispatch(Toast::success("pinned").persistent());
        let toast = center.toasts().iter().next().unwrap();
        assert_eq!(toast.effective_duration(), None);
    }

    #[test]
    fn capacity_comes_from_settings() {
        let mut center = NotificationCenter::new(NotificationSettings {
            max_toasts: 2,
            ..NotificationSettings::default()
        });

        for i in 0..4 {
            center.info(format!("toast-{i}"));
        }
        assert_eq!(center.toasts().len(), 2);
    }

    #[test]
    fn reset_clears_both_queues() {
        let mut center = NotificationCenter::default();
        center.success("toast");
        let _future = center.confirm(ConfirmOptions::new("Q", "q"));
        center.loading("Busy");

        center.reset();
        assert!(center.toasts().is_empty());
        assert!(center.popups().is_empty());
    }
}
