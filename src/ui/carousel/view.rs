// SPDX-License-Identifier: MPL-2.0
//! Inline carousel view: active slide cell, loading placeholder, and the
//! page indicator overlaid at the bottom.

use crate::ui::carousel::component::{Message, State};
use crate::ui::carousel::indicator;
use crate::ui::widgets::LoadingSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, Container, Image, Row, Stack};
use iced::{Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let cell = mouse_area(slide_cell(state)).on_press(Message::SlidePressed);

    let indicator_overlay = Container::new(indicator::view(
        state.indicator(),
        state.config.indicator_tint.color(),
        state.config.indicator_active_tint.color(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(8);

    Stack::new().push(cell).push(indicator_overlay).into()
}

/// The active slide: its cached image, or the loading placeholder while
/// the fetch is outstanding. A failed fetch keeps the placeholder; the
/// widget has no error surface.
fn slide_cell(state: &State) -> Element<'_, Message> {
    let index = state.active_index();

    if let Some(image) = state.image_for(index) {
        return Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(state.config.slide_fill.content_fit())
            .into();
    }

    if state.slide_count() == 0 {
        // Nothing assigned yet; render an empty cell.
        return Container::new(Row::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let spinner =
        LoadingSpinner::new(state.config.spinner_color.color(), state.spinner_rotation());

    Container::new(spinner.into_element())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
