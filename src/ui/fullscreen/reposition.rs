// SPDX-License-Identifier: MPL-2.0
//! Pan-to-reposition sub-component, armed while the image is zoomed.
//!
//! The zoomed image's center moves by sampled pan velocity per event and
//! is clamped so the image never reveals blank space beyond its own
//! bounds. Vertically, an image shorter than the viewport collapses to a
//! fixed centered offset instead.

use crate::config::{CarouselConfig, SlideFill, REPOSITION_VELOCITY_FACTOR};
use iced::{Point, Size, Vector};

/// Layout rectangle sizes a reposition step needs.
///
/// `cell` is one slide cell of the nested collection (full overlay width,
/// slider-strip height), `slider` the strip itself, `viewport` the whole
/// overlay, and `image` the displayed image size at the current scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frames {
    pub viewport: Size,
    pub slider: Size,
    pub cell: Size,
    pub image: Size,
}

/// Reposition sub-component state.
///
/// `None` means the image sits at the cell center (the state after any
/// scale change, which recenters the image).
#[derive(Debug, Clone, Default)]
pub struct State {
    center: Option<Point>,
}

/// Messages for the reposition sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pan velocity sampled for one gesture-changed event.
    PanChanged { velocity: Vector, frames: Frames },
    /// Snap back to the cell center (scale changed or slide changed).
    Reset,
}

/// Effects produced by repositioning.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The image center moved; apply it to the active slide.
    Centered(Point),
}

impl State {
    /// Handle a reposition message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PanChanged { velocity, frames } => {
                let current = self
                    .center
                    .unwrap_or_else(|| centered_in_cell(frames.cell));
                let proposed = Point::new(
                    current.x + velocity.x * REPOSITION_VELOCITY_FACTOR,
                    current.y + velocity.y * REPOSITION_VELOCITY_FACTOR,
                );
                let clamped = clamp_center(proposed, &frames);
                self.center = Some(clamped);
                Effect::Centered(clamped)
            }
            Message::Reset => {
                self.center = None;
                Effect::None
            }
        }
    }

    /// Current image center, or `None` while centered.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.center
    }
}

fn centered_in_cell(cell: Size) -> Point {
    Point::new(cell.width / 2.0, cell.height / 2.0)
}

/// Clamps a proposed image center so no cell edge shows blank space.
#[must_use]
pub fn clamp_center(proposed: Point, frames: &Frames) -> Point {
    let min_x = frames.cell.width - frames.image.width / 2.0;
    let max_x = frames.image.width / 2.0;

    let top_gap = (frames.viewport.height - frames.slider.height) / 2.0;
    let initial_y = frames.cell.height / 2.0;
    let min_y = top_gap + frames.slider.height - frames.image.height / 2.0;
    let max_y = frames.image.height / 2.0 - top_gap;

    let x = if proposed.x < min_x {
        min_x
    } else if proposed.x > max_x {
        max_x
    } else {
        proposed.x
    };

    let y = if frames.image.height <= frames.viewport.height {
        // Shorter than the viewport: no vertical travel, stay centered.
        initial_y
    } else if proposed.y < min_y {
        min_y
    } else if proposed.y > max_y {
        max_y
    } else {
        proposed.y
    };

    Point::new(x, y)
}

/// Displayed size of the active image at the current zoom scale.
///
/// Mirrors the fill modes the carousel configures on its image widgets so
/// the clamp geometry matches what is actually on screen.
#[must_use]
pub fn displayed_image_size(natural: Size, cell: Size, fill: SlideFill, scale: f32) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return cell;
    }

    let width_ratio = cell.width / natural.width;
    let height_ratio = cell.height / natural.height;
    let base = match fill {
        SlideFill::Cover => width_ratio.max(height_ratio),
        SlideFill::Contain => width_ratio.min(height_ratio),
    };

    Size::new(
        natural.width * base * scale,
        natural.height * base * scale,
    )
}

/// Convenience wrapper combining fill mode lookup and scaling.
#[must_use]
pub fn frames_for(
    viewport: Size,
    slider: Size,
    natural: Size,
    config: &CarouselConfig,
    scale: f32,
) -> Frames {
    let cell = Size::new(viewport.width, slider.height);
    Frames {
        viewport,
        slider,
        cell,
        image: displayed_image_size(natural, cell, config.slide_fill, scale),
    }
}
