// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer component orchestrating its gesture sub-components.
//!
//! The viewer is seeded from the inline carousel: same slide list, a
//! snapshot of its cache, the current position. A nested carousel (with
//! its own indicator suppressed) handles paging and fetching; zoom,
//! dismiss and reposition sub-components handle the gestures, with pans
//! routed by the current scale.

use crate::config::MIN_SCALE;
use crate::media::FetchRequest;
use crate::ui::carousel::{self, Indicator, Seed};
use crate::ui::fullscreen::{dismiss, reposition, zoom};
use iced::{Point, Vector};
use std::path::PathBuf;

/// Full-screen viewer state.
#[derive(Debug, Clone)]
pub struct State {
    carousel: carousel::State,
    zoom: zoom::State,
    dismiss: dismiss::State,
    reposition: reposition::State,
}

/// Messages consumed by [`State::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The overlay finished presenting; load the seeded position.
    Presented,
    /// A message for the nested carousel (drags, fetch completions,
    /// spinner ticks), routed through the overlay.
    Carousel(carousel::Message),
    /// The back button was pressed.
    BackPressed,
    /// A pinch gesture began.
    PinchStarted,
    /// Pinch velocity sampled for one gesture-changed event.
    PinchChanged { velocity: f32 },
    /// The pinch gesture was released.
    PinchEnded,
    /// A double tap on the active slide.
    DoubleTapped,
    /// Pan velocity sampled for one gesture-changed event. Routed to
    /// reposition while zoomed, to dismiss otherwise.
    PanChanged {
        velocity: Vector,
        frames: reposition::Frames,
    },
    /// The pan gesture was released.
    PanEnded,
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay is visible; notify the visibility observer and run
    /// the fetch if the seeded slide is uncached.
    Presented { fetch: Option<FetchRequest> },
    /// The nested collection settled on a slide.
    SlideChanged {
        index: usize,
        fetch: Option<FetchRequest>,
    },
    /// Close the overlay: remove it and notify the visibility observer.
    Closed,
}

impl State {
    /// Builds a viewer from a carousel seed. The nested carousel adopts
    /// the full-screen variant of the seed's config.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        let config = seed.config.for_full_screen();
        Self {
            carousel: carousel::State::from_seed(Seed { config, ..seed }),
            zoom: zoom::State::default(),
            dismiss: dismiss::State::default(),
            reposition: reposition::State::default(),
        }
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Presented => match self.carousel.handle(carousel::Message::Reload) {
                carousel::Effect::Reloaded { fetch } => Effect::Presented { fetch },
                _ => Effect::None,
            },
            Message::Carousel(inner) => match self.carousel.handle(inner) {
                carousel::Effect::SlideChanged { index, fetch } => {
                    Effect::SlideChanged { index, fetch }
                }
                // The nested config never enables a second full-screen.
                _ => Effect::None,
            },
            Message::BackPressed => Effect::Closed,
            Message::PinchStarted => {
                self.apply_zoom(zoom::Message::PinchStarted);
                Effect::None
            }
            Message::PinchChanged { velocity } => {
                self.apply_zoom(zoom::Message::PinchChanged { velocity });
                Effect::None
            }
            Message::PinchEnded => {
                self.apply_zoom(zoom::Message::PinchEnded);
                Effect::None
            }
            Message::DoubleTapped => {
                self.apply_zoom(zoom::Message::DoubleTapped);
                Effect::None
            }
            Message::PanChanged { velocity, frames } => {
                if self.zoom.is_zoomed() {
                    self.reposition
                        .handle(reposition::Message::PanChanged { velocity, frames });
                } else {
                    self.dismiss.handle(dismiss::Message::PanChanged {
                        velocity_y: velocity.y,
                    });
                }
                Effect::None
            }
            Message::PanEnded => {
                if self.zoom.is_zoomed() {
                    return Effect::None;
                }
                match self.dismiss.handle(dismiss::Message::PanEnded) {
                    dismiss::Effect::Dismiss => Effect::Closed,
                    _ => Effect::None,
                }
            }
        }
    }

    /// Applies a zoom effect: any scale change recenters the image and
    /// the paging lock follows the sub-component's verdict.
    fn apply_zoom(&mut self, msg: zoom::Message) {
        match self.zoom.handle(msg) {
            zoom::Effect::ScaleChanged(_) => {
                self.reposition.handle(reposition::Message::Reset);
            }
            zoom::Effect::PagingEnabled(enabled) => {
                self.carousel.set_paging_enabled(enabled);
            }
            zoom::Effect::Toggled {
                scale: _,
                paging_enabled,
            } => {
                self.reposition.handle(reposition::Message::Reset);
                self.carousel.set_paging_enabled(paging_enabled);
            }
            zoom::Effect::None => {}
        }
    }

    /// The nested carousel, for view code and host forwarding.
    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    /// Current zoom scale applied to the active slide.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// Vertical drag offset of the whole overlay content.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.dismiss.offset_y()
    }

    /// Backdrop opacity tracking the dismiss drag.
    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        if self.zoom.scale() > MIN_SCALE {
            1.0
        } else {
            self.dismiss.opacity()
        }
    }

    /// Repositioned image center, or `None` while centered.
    #[must_use]
    pub fn image_center(&self) -> Option<Point> {
        self.reposition.center()
    }

    /// Projection for the overlay's own page indicator, shown whenever
    /// there is more than one slide.
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        Indicator::project(self.carousel.slide_count(), self.carousel.active_index(), true)
    }

    /// Back button image, if the host configured one.
    #[must_use]
    pub fn back_button_icon(&self) -> Option<&PathBuf> {
        self.carousel.config.back_button_icon.as_ref()
    }

    #[must_use]
    pub fn needs_spinner_ticks(&self) -> bool {
        self.carousel.needs_spinner_ticks()
    }
}
