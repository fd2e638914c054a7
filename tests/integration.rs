// SPDX-License-Identifier: MPL-2.0
use iced_herald::center::{NotificationCenter, NotificationSettings};
use iced_herald::config::{self, Config, GeneralConfig, NotificationsConfig};
use iced_herald::popup::{AlertOptions, CloseAction, ConfirmOptions, DismissGesture};
use iced_herald::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn config_round_trip_feeds_the_center() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Light,
        },
        notifications: NotificationsConfig {
            max_toasts: Some(2),
            success_duration_ms: Some(1_000),
            ..NotificationsConfig::default()
        },
    };
    config::save_to_path(&config, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    let mut center = NotificationCenter::from_config(&loaded);

    // Capacity from the file is enforced end to end.
    for i in 0..4 {
        center.success(format!("saved-{i}"));
    }
    assert_eq!(center.toasts().len(), 2);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn six_dispatches_keep_the_five_most_recent() {
    let mut center = NotificationCenter::new(NotificationSettings::default());
    for i in 0..6 {
        center.info(format!("toast-{i}"));
    }

    let messages: Vec<_> = center
        .toasts()
        .iter()
        .map(|t| t.message().to_string())
        .collect();
    assert_eq!(
        messages,
        vec!["toast-1", "toast-2", "toast-3", "toast-4", "toast-5"]
    );
}

#[tokio::test]
async fn confirm_future_resolves_after_button_press() {
    let mut center = NotificationCenter::default();
    let future = center.confirm(ConfirmOptions::new("Delete?", "This cannot be undone."));
    let id = future.id();

    center.popups_mut().press_button(id, "Confirm");

    let result = future.await;
    assert_eq!(result.action, CloseAction::Confirm);
    assert!(center.popups().is_empty());
}

#[tokio::test]
async fn stacked_popups_dismiss_from_the_top() {
    let mut center = NotificationCenter::default();
    let first = center.alert(AlertOptions::new("A", "first"));
    let second = center.alert(AlertOptions::new("B", "second"));

    assert!(center.popups_mut().dismiss_top(DismissGesture::Escape));
    assert_eq!(second.await.action, CloseAction::Dismiss);
    assert!(center.popups().contains(first.id()));

    assert!(center.popups_mut().dismiss_top(DismissGesture::Escape));
    assert_eq!(first.await.action, CloseAction::Dismiss);
}

#[tokio::test]
async fn reset_resolves_open_popups_with_close_all() {
    let mut center = NotificationCenter::default();
    center.success("about to vanish");
    let future = center.confirm(ConfirmOptions::new("Stay?", "Session ending."));

    center.reset();

    assert!(center.toasts().is_empty());
    assert!(center.popups().is_empty());
    assert_eq!(future.await.action, CloseAction::CloseAll);
}

#[test]
fn loading_popup_lifecycle_is_detached() {
    let mut center = NotificationCenter::default();
    let id = center.loading("Saving");

    // No gesture can remove it; the owning operation closes it by ID.
    assert!(!center.popups_mut().dismiss_top(DismissGesture::Backdrop));
    assert!(center.close(CloseAction::Close, None, Some(id)));
    assert!(center.popups().is_empty());

    // A second close of the same ID is a stale no-op.
    assert!(!center.close(CloseAction::Close, None, Some(id)));
}
