// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification center into a real Iced event
//! loop.
//!
//! The `App` struct owns the center, the persisted configuration, and the
//! diagnostics collector, and translates messages into queue mutations or
//! async follow-up tasks. Policy decisions (tick gating, theme persistence,
//! what the demo buttons trigger) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::center::NotificationCenter;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;

/// Root Iced application state bridging the notification center, the
/// persisted preferences and the diagnostics collector.
pub struct App {
    center: NotificationCenter,
    config: Config,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
    /// Attempt counter for the simulated sync task.
    attempts: u32,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(parse_theme)
            .unwrap_or(config.general.theme_mode);

        let diagnostics = DiagnosticsCollector::default();
        let mut center = NotificationCenter::from_config(&config);
        center.set_diagnostics(diagnostics.handle());
        if let Some(warning) = warning {
            center.warning(warning);
        }

        (
            Self {
                center,
                config,
                theme_mode,
                diagnostics,
                attempts: 0,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "iced_herald demo".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(
                self.center.has_pending_dismissals(),
                self.diagnostics.has_pending(),
            ),
            subscription::create_escape_subscription(!self.center.popups().is_empty()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            center: &self.center,
            theme_mode: self.theme_mode,
            events_recorded: self.diagnostics.len(),
        })
    }
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Launches the Iced application loop; called from `main.rs`.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // The boot closure must be Fn, not FnOnce, but flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot closure called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
