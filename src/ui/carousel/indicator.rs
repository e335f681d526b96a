// SPDX-License-Identifier: MPL-2.0
//! Page-indicator projection and dot-row view.

use crate::config::{INDICATOR_DOT_SIZE, INDICATOR_DOT_SPACING};
use iced::widget::{container, Container, Row};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Pure projection of the carousel state onto the page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub dot_count: usize,
    pub active_dot: usize,
    pub visible: bool,
}

impl Indicator {
    /// Projects indicator state for the inline widget: visible only when
    /// the show flag is set and there is more than one slide.
    #[must_use]
    pub fn project(slide_count: usize, active_index: usize, show: bool) -> Self {
        Self {
            dot_count: slide_count,
            active_dot: active_index,
            visible: show && slide_count > 1,
        }
    }
}

/// Renders the indicator as a row of dots. Returns an empty element when
/// the indicator is hidden.
pub fn view<'a, Message: 'a>(
    indicator: Indicator,
    tint: Color,
    active_tint: Color,
) -> Element<'a, Message> {
    if !indicator.visible {
        return Row::new().into();
    }

    let mut row = Row::new().spacing(INDICATOR_DOT_SPACING);
    for dot in 0..indicator.dot_count {
        let color = if dot == indicator.active_dot {
            active_tint
        } else {
            tint
        };
        row = row.push(dot_view(color));
    }

    row.into()
}

fn dot_view<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    Container::new(Row::new())
        .width(Length::Fixed(INDICATOR_DOT_SIZE))
        .height(Length::Fixed(INDICATOR_DOT_SIZE))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: (INDICATOR_DOT_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
