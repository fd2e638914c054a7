// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts render as small cards with a kind-colored accent border, an
//! optional row of action buttons and a dismiss cross. The overlay stacks
//! them in the bottom-right corner, oldest on top.

use crate::toast::{ActionStyle, Manager, Message, Toast, ToastKind};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color for a toast kind.
#[must_use]
pub fn accent_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Info => palette::INFO_500,
        ToastKind::Warning => palette::WARNING_500,
        ToastKind::Error => palette::ERROR_500,
    }
}

/// Returns the marker glyph for a toast kind.
fn kind_glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Info => "i",
        ToastKind::Warning => "!",
        ToastKind::Error => "✕",
    }
}

/// Renders a single toast card.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let accent = accent_color(toast.kind());

    let glyph = Text::new(kind_glyph(toast.kind()))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let title = Text::new(toast.title())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let message = Text::new(toast.message())
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let mut content = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(message);

    if !toast.actions().is_empty() {
        let mut actions = Row::new().spacing(spacing::XS);
        for action in toast.actions() {
            let label = if action.is_loading() {
                format!("{}…", action.label())
            } else {
                action.label().to_string()
            };
            let style = action.action_style();
            let mut action_button = button(Text::new(label).size(typography::BODY_SM))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| action_button_style(theme, status, style));
            if !action.is_loading() {
                action_button =
                    action_button.on_press(Message::Action(toast.id(), action.label().to_string()));
            }
            actions = actions.push(action_button);
        }
        content = content.push(actions);
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Renders the toast overlay with all active toasts.
///
/// Positions toasts in the bottom-right corner, stacked vertically in
/// insertion order.
pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = manager.iter().map(view).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
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

/// Style function for toast action buttons.
fn action_button_style(theme: &Theme, status: button::Status, style: ActionStyle) -> button::Style {
    let accent = match style {
        ActionStyle::Primary => theme.extended_palette().primary.base.color,
        ActionStyle::Secondary => palette::GRAY_400,
        ActionStyle::Danger => palette::ERROR_500,
    };

    let alpha = match status {
        button::Status::Active => opacity::OPAQUE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: None,
        text_color: Color { a: alpha, ..accent },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_colors_are_distinct() {
        let success = accent_color(ToastKind::Success);
        let info = accent_color(ToastKind::Info);
        let warning = accent_color(ToastKind::Warning);
        let error = accent_color(ToastKind::Error);

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn card_border_carries_the_kind_accent() {
        let style = toast_container_style(&Theme::Dark, accent_color(ToastKind::Error));

        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert!(style.background.is_some());
    }

    #[test]
    fn every_kind_has_a_glyph() {
        for kind in [
            ToastKind::Success,
            ToastKind::Info,
            ToastKind::Warning,
            ToastKind::Error,
        ] {
            assert!(!kind_glyph(kind).is_empty());
        }
    }
}
