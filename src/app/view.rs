// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The base screen is a grid of trigger buttons; the popup layer and the
//! toast overlay are stacked on top of it, toasts last so they stay
//! visible while a dialog is open.

use super::Message;
use crate::center::NotificationCenter;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use crate::ui::{popup as popup_ui, toast as toast_ui};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the demo view.
pub(super) struct ViewContext<'a> {
    pub center: &'a NotificationCenter,
    pub theme_mode: ThemeMode,
    pub events_recorded: usize,
}

/// Renders the demo screen with the notification layers on top.
pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = view_triggers(&ctx);

    let mut layers = Stack::new().push(base);
    if let Some(popup_layer) = popup_ui::view_layer(ctx.center.popups()) {
        layers = layers.push(popup_layer.map(Message::Popup));
    }
    layers = layers.push(toast_ui::view_overlay(ctx.center.toasts()).map(Message::Toast));
    layers.into()
}

fn view_triggers<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Text::new("iced_herald demo")
        .size(typography::TITLE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let status = Text::new(format!(
        "theme: {:?} · toasts: {} · popups: {} · events recorded: {}",
        ctx.theme_mode,
        ctx.center.toasts().len(),
        ctx.center.popups().len(),
        ctx.events_recorded,
    ))
    .size(typography::CAPTION);

    let toast_row = Row::new()
        .spacing(spacing::XS)
        .push(trigger("Success toast", Message::ShowSuccess))
        .push(trigger("Info toast", Message::ShowInfo))
        .push(trigger("Warning toast", Message::ShowWarning))
        .push(trigger("Error + retry", Message::ShowError))
        .push(trigger("Duplicate errors", Message::ShowDuplicateErrors));

    let popup_row = Row::new()
        .spacing(spacing::XS)
        .push(trigger("Confirm", Message::ShowConfirm))
        .push(trigger("Alert", Message::ShowAlert))
        .push(trigger("Form", Message::ShowForm))
        .push(trigger("Loading", Message::ShowLoading))
        .push(trigger("Async button", Message::ShowAsyncWork));

    let misc_row = Row::new()
        .spacing(spacing::XS)
        .push(trigger("Toggle theme", Message::ThemeToggled))
        .push(trigger("Reset all", Message::ResetAll));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(status)
        .push(toast_row)
        .push(popup_row)
        .push(misc_row);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn trigger(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}
