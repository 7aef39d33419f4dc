// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual flash messages.
//!
//! Toasts are the visual representation of display units, appearing as
//! cards tinted and bordered per their kind's preset, with a dismiss
//! button and pointer-hover wiring for the pause/resume behavior.

use super::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use super::icons;
use super::stack::{Message, Stack, ToastEntry};
use crate::preset::{self, Preset};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    ///
    /// `now` drives the entrance/exit opacity from the entry's controller;
    /// pointer enter/leave and the close button map to the stack messages
    /// that advance the dismissal state machine.
    pub fn view(entry: &ToastEntry, now: Instant) -> Element<'_, Message> {
        let unit = entry.unit();
        let preset = preset::resolve(unit.kind());
        let fade = entry.controller().opacity(now);
        let id = entry.id();

        // Kind icon inside its tinted circular well
        let icon_well = Container::new(icons::kind_glyph(unit.kind()))
            .width(Length::Fixed(sizing::ICON_WELL))
            .height(Length::Fixed(sizing::ICON_WELL))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| icon_well_style(preset, fade));

        // Message text
        let text_color = with_fade(preset.text, fade);
        let message_widget = Text::new(unit.text())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        // Dismiss button (always visible)
        let cross: Element<'static, Message> = icons::cross_glyph().into();
        let dismiss_button = button(cross)
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_well).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(unit.width_px() as f32))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(preset, fade));

        mouse_area(card)
            .on_enter(Message::PointerEnter(id))
            .on_exit(Message::PointerLeave(id))
            .into()
    }

    /// Renders the container overlay with all visible toasts.
    ///
    /// Positions toasts in the top-right corner, stacked vertically in
    /// push order.
    pub fn view_overlay(stack: &Stack, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = stack
            .visible()
            .map(|entry| Self::view(entry, now))
            .collect();

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
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Scales a color's alpha by the transition fade factor.
fn with_fade(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(preset: &Preset, fade: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(with_fade(preset.background, fade))),
        border: iced::Border {
            color: with_fade(preset.border, fade),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(with_fade(preset.text, fade)),
        ..Default::default()
    }
}

/// Style function for the circular icon well.
fn icon_well_style(preset: &Preset, fade: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(with_fade(
            preset.icon_background,
            fade,
        ))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
