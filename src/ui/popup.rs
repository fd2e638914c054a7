// SPDX-License-Identifier: MPL-2.0
//! Modal popup widgets.
//!
//! The modal layer dims everything beneath it and centers a dialog card.
//! Stacked popups each add their own layer, so the dialog underneath stays
//! visible but unreachable; only the topmost layer is interactive, and only
//! its backdrop emits the dismiss gesture.

use crate::popup::{ButtonStyle, Message, Popup, PopupKind, Stack, Tone};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, center, container, mouse_area, opaque, text, text_input, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color for a dialog tone, if any.
#[must_use]
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Neutral => None,
        Tone::Info => Some(palette::INFO_500),
        Tone::Success => Some(palette::SUCCESS_500),
        Tone::Warning => Some(palette::WARNING_500),
        Tone::Danger => Some(palette::ERROR_500),
    }
}

/// Renders the modal layers for every open popup, or `None` when the stack
/// is empty.
///
/// Compose the result over the base view with an `iced::widget::Stack`; the
/// layer blocks interaction with everything beneath it.
pub fn view_layer(stack: &Stack) -> Option<Element<'_, Message>> {
    if stack.is_empty() {
        return None;
    }

    let count = stack.len();
    let mut layers = iced::widget::Stack::new();
    for (index, popup) in stack.iter().enumerate() {
        let is_top = index + 1 == count;
        let card = dialog_card(popup);

        let mut area = mouse_area(center(opaque(card)).style(backdrop_style));
        if is_top {
            // Only the topmost layer translates outside clicks into a
            // dismiss gesture; lower layers just swallow them.
            area = area.on_press(Message::Backdrop);
        }
        layers = layers.push(opaque(area));
    }
    Some(layers.into())
}

/// Renders one dialog card.
fn dialog_card(popup: &Popup) -> Element<'_, Message> {
    let accent = tone_color(popup.tone());

    let title = Text::new(popup.title())
        .size(typography::TITLE_SM)
        .style(move |theme: &Theme| text::Style {
            color: accent.or(Some(theme.palette().text)),
        });

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if popup.is_closable() && !popup.is_persistent() {
        header = header.push(
            button(Text::new("✕").size(typography::BODY_SM))
                .on_press(Message::CloseIcon)
                .padding(spacing::XXS)
                .style(close_icon_style),
        );
    }

    let mut content = Column::new().spacing(spacing::SM).push(header);

    if let Some(message) = popup.message() {
        content = content.push(text(message).size(typography::BODY).style(
            |theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            },
        ));
    }

    if popup.kind() == PopupKind::Loading {
        content = content.push(
            text("Please wait…")
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_STRONG,
                        ..theme.palette().text
                    }),
                }),
        );
    }

    if let Some(form) = popup.form() {
        let popup_id = popup.id();
        for field in form.fields() {
            let key = field.key().to_string();
            let input = text_input(field.placeholder_text(), field.current_value())
                .on_input(move |value| Message::FormInput(popup_id, key.clone(), value))
                .secure(field.is_secret())
                .padding(spacing::XS)
                .size(typography::BODY);
            content = content.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(format!("{}:", field.label())).size(typography::BODY_SM))
                    .push(input),
            );
        }
    }

    if !popup.buttons().is_empty() {
        let mut buttons = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        for popup_button in popup.buttons() {
            let label = if popup_button.is_loading() {
                format!("{}…", popup_button.label())
            } else {
                popup_button.label().to_string()
            };
            let style = popup_button.button_style();
            let mut widget = button(Text::new(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(move |theme: &Theme, status| dialog_button_style(theme, status, style));
            if !popup_button.is_disabled() && !popup_button.is_loading() {
                widget = widget.on_press(Message::Button(
                    popup.id(),
                    popup_button.label().to_string(),
                ));
            }
            buttons = buttons.push(widget);
        }
        content = content.push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| dialog_container_style(theme, accent))
        .into()
}

/// Style function for the dimmed area behind a dialog.
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Style function for the dialog card.
fn dialog_container_style(theme: &Theme, accent: Option<Color>) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: accent.unwrap_or(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Style function for the close icon.
fn close_icon_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for dialog buttons.
fn dialog_button_style(theme: &Theme, status: button::Status, style: ButtonStyle) -> button::Style {
    let palette_ext = theme.extended_palette();
    let (background, text_color) = match style {
        ButtonStyle::Primary => (
            palette_ext.primary.base.color,
            palette_ext.primary.base.text,
        ),
        ButtonStyle::Secondary => (
            palette_ext.background.weak.color,
            palette_ext.background.weak.text,
        ),
        ButtonStyle::Danger => (palette::ERROR_500, palette::WHITE),
    };

    let alpha = match status {
        button::Status::Active => opacity::OPAQUE,
        button::Status::Hovered => 0.85,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..background
        })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
