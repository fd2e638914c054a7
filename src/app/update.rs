// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo application.
//!
//! Every message funnels through [`handle_message`]; queue mutations go
//! through the notification center, and async follow-ups come back as
//! `Task`s resolving to further messages.

use super::{App, Message};
use crate::config;
use crate::popup::{
    AlertOptions, ButtonStyle, CloseAction, ConfirmOptions, FormField, FormOptions, Popup,
    PopupButton, PopupResult, Tone, WorkRequested,
};
use crate::toast::{Toast, ToastAction};
use iced::Task;
use std::time::Duration;

pub(super) fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Toast(toast_message) => {
            if let Some(invoked) = app.center.toasts_mut().handle_message(&toast_message) {
                // The only wired action in the demo is "Retry".
                app.center.remove(invoked.id);
                app.center.info("Retrying request…");
            }
            Task::none()
        }
        Message::Popup(popup_message) => {
            if let Some(work) = app.center.popups_mut().handle_message(&popup_message) {
                return run_simulated_work(app, work);
            }
            Task::none()
        }
        Message::Tick(_instant) => {
            app.center.tick();
            app.diagnostics.process_pending();
            Task::none()
        }
        Message::ThemeToggled => {
            app.theme_mode = app.theme_mode.next();
            app.config.general.theme_mode = app.theme_mode;
            if let Err(err) = config::save(&app.config) {
                app.center.warning(format!("Could not save settings: {err}"));
            }
            Task::none()
        }
        Message::ShowSuccess => {
            app.center.success("Employee record saved");
            Task::none()
        }
        Message::ShowInfo => {
            app.center.info("Attendance sheet refreshed");
            Task::none()
        }
        Message::ShowWarning => {
            app.center.warning("Session expires in 5 minutes");
            Task::none()
        }
        Message::ShowError => {
            app.center.dispatch(
                Toast::error("Network request failed").with_action(ToastAction::new("Retry")),
            );
            Task::none()
        }
        Message::ShowDuplicateErrors => {
            // Both land in the same tick; dedup keeps exactly one.
            app.center.error("Network down");
            app.center.error("Network down");
            Task::none()
        }
        Message::ShowConfirm => {
            let future = app.center.confirm(
                ConfirmOptions::new(
                    "Delete employee?",
                    "The record and its attendance history will be removed.",
                )
                .confirm_text("Delete")
                .danger(),
            );
            Task::perform(future, Message::PopupResolved)
        }
        Message::ShowAlert => {
            let future = app.center.alert(
                AlertOptions::new("Export complete", "The timesheet was written to disk.")
                    .tone(Tone::Success),
            );
            Task::perform(future, Message::PopupResolved)
        }
        Message::ShowForm => {
            let future = app.center.form(
                FormOptions::new(
                    "Log hours",
                    vec![
                        FormField::new("project", "Project").placeholder("Project name"),
                        FormField::new("hours", "Hours").value("8"),
                    ],
                )
                .message("Recorded against today's timesheet.")
                .submit_text("Log"),
            );
            Task::perform(future, Message::PopupResolved)
        }
        Message::ShowLoading => {
            let id = app.center.loading("Generating payslip");
            Task::perform(tokio::time::sleep(Duration::from_secs(2)), move |()| {
                Message::LoadingDone(id)
            })
        }
        Message::ShowAsyncWork => {
            let future = app.center.custom(
                Popup::custom("Sync attendance")
                    .with_message("Push local check-ins to the server.")
                    .with_tone(Tone::Info)
                    .with_button(
                        PopupButton::close("Cancel", CloseAction::Cancel)
                            .style(ButtonStyle::Secondary),
                    )
                    .with_button(PopupButton::work("Sync now")),
            );
            Task::perform(future, Message::PopupResolved)
        }
        Message::ResetAll => {
            app.center.reset();
            Task::none()
        }
        Message::PopupResolved(result) => {
            report_popup_result(app, &result);
            Task::none()
        }
        Message::LoadingDone(id) => {
            app.center.close(CloseAction::Close, None, Some(id));
            app.center.success("Payslip ready");
            Task::none()
        }
        Message::WorkFinished { id, label, result } => {
            let outcome = match &result {
                Ok(()) => Ok(Some(PopupResult::new(CloseAction::Custom("synced".into())))),
                Err(message) => Err(message.clone()),
            };
            app.center.popups_mut().finish_button(id, &label, outcome);
            match result {
                Ok(()) => {
                    app.center.success("Attendance synced");
                }
                Err(message) => {
                    app.center.error(format!("Sync failed: {message}"));
                }
            }
            Task::none()
        }
    }
}

/// Simulates the async task behind a `Work` button: the first attempt
/// fails, the retry succeeds, exercising the loading-button recovery path.
fn run_simulated_work(app: &mut App, work: WorkRequested) -> Task<Message> {
    app.attempts += 1;
    let succeed = app.attempts % 2 == 0;
    let WorkRequested { id, label } = work;
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(1200)).await;
            if succeed {
                Ok(())
            } else {
                Err("connection reset by peer".to_string())
            }
        },
        move |result| Message::WorkFinished {
            id,
            label: label.clone(),
            result,
        },
    )
}

/// Turns a resolved popup future into user feedback.
fn report_popup_result(app: &mut App, result: &PopupResult) {
    match &result.action {
        CloseAction::Confirm => {
            app.center.success("Employee deleted");
        }
        CloseAction::Submit => {
            let fields = result.data.as_ref().map_or(0, Vec::len);
            app.center.success(format!("Logged {fields} fields"));
        }
        CloseAction::Cancel | CloseAction::Dismiss => {
            app.center.info("No changes made");
        }
        // Work buttons and resets already reported their outcome.
        CloseAction::Close | CloseAction::CloseAll | CloseAction::Custom(_) => {}
    }
}
