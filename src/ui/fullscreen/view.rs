// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer layout: black backdrop, the nested carousel (zoomed
//! and repositioned per the gesture state), the overlay's own indicator
//! and the optional back button.

use crate::ui::carousel;
use crate::ui::carousel::indicator;
use crate::ui::fullscreen::component::{Message, State};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{container, mouse_area, responsive, Container, Image, Stack};
use iced::{Background, Color, Element, Length, Padding, Theme};

const BACK_BUTTON_SIZE: f32 = 32.0;
const BACK_BUTTON_PADDING: f32 = 16.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let opacity = state.backdrop_opacity();
    let backdrop = Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity,
                ..Color::BLACK
            })),
            ..container::Style::default()
        });

    let content = mouse_area(slide_layer(state)).on_double_click(Message::DoubleTapped);

    let indicator_overlay = Container::new(indicator::view(
        state.indicator(),
        state.carousel().config.indicator_tint.color(),
        state.carousel().config.indicator_active_tint.color(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(BACK_BUTTON_PADDING);

    let mut stack = Stack::new()
        .push(backdrop)
        .push(content)
        .push(indicator_overlay);

    if let Some(back) = back_button(state) {
        stack = stack.push(back);
    }

    stack.into()
}

/// The slide content, shifted by the dismiss drag and scaled/recentered
/// by the zoom and reposition state.
fn slide_layer(state: &State) -> Element<'_, Message> {
    let inner: Element<'_, Message> = if state.is_zoomed() {
        zoomed_slide(state)
    } else {
        carousel::view(state.carousel()).map(Message::Carousel)
    };

    shifted(inner, 0.0, state.drag_offset())
}

/// The active slide rendered at the current zoom scale, its center offset
/// from the reposition sub-component.
fn zoomed_slide(state: &State) -> Element<'_, Message> {
    let carousel = state.carousel();
    let Some(image) = carousel.image_for(carousel.active_index()) else {
        return carousel::view(carousel).map(Message::Carousel);
    };

    let handle = image.handle.clone();
    let fit = carousel.config.slide_fill.content_fit();
    let scale = state.scale();
    let center = state.image_center();

    responsive(move |size| {
        let slide = Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(fit)
            .scale(scale);

        // The reposition center is absolute in cell coordinates; turn it
        // into an offset from the resting centered position.
        let (dx, dy) = match center {
            Some(center) => (center.x - size.width / 2.0, center.y - size.height / 2.0),
            None => (0.0, 0.0),
        };

        Container::new(shifted(slide.into(), dx, dy))
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into()
    })
    .into()
}

fn back_button(state: &State) -> Option<Element<'_, Message>> {
    let icon = state.back_button_icon()?;
    let image = Image::new(Handle::from_path(icon))
        .width(Length::Fixed(BACK_BUTTON_SIZE))
        .height(Length::Fixed(BACK_BUTTON_SIZE));

    Some(
        Container::new(mouse_area(image).on_press(Message::BackPressed))
            .width(Length::Fill)
            .align_x(Horizontal::Left)
            .padding(BACK_BUTTON_PADDING)
            .into(),
    )
}

/// Shifts centered content by `(dx, dy)` using asymmetric padding: with
/// the content center-aligned, doubling the offset on one side moves the
/// center by the offset itself.
fn shifted(content: Element<'_, Message>, dx: f32, dy: f32) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(Padding {
            top: (2.0 * dy).max(0.0),
            bottom: (-2.0 * dy).max(0.0),
            left: (2.0 * dx).max(0.0),
            right: (-2.0 * dx).max(0.0),
        })
        .into()
}
