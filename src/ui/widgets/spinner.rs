// SPDX-License-Identifier: MPL-2.0
//! Canvas-based loading spinner shown while a slide image is in flight.

use crate::config::SPINNER_SIZE;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

/// A rotating half-arc over a faint full ring. The host advances the
/// rotation angle with its tick subscription while the active slide is
/// still loading.
pub struct LoadingSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl LoadingSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Wraps the spinner in a fixed-size canvas widget.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(SPINNER_SIZE))
            .height(Length::Fixed(SPINNER_SIZE))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: TRACK_ALPHA,
                        ..self.color
                    }),
                );

                // Half arc starting at the top, offset by the rotation.
                let start = self.rotation - FRAC_PI_2;
                let mut builder = canvas::path::Builder::new();
                builder.arc(canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + PI),
                });

                frame.stroke(
                    &builder.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
