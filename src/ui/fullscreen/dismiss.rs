// SPDX-License-Identifier: MPL-2.0
//! Pan-to-dismiss sub-component, armed while the image is unzoomed.
//!
//! Vertical pan velocity is sampled per gesture-changed event and
//! accumulated into an offset; the backdrop fades with the offset down to
//! a floor so the overlay never fully vanishes mid-drag. Releasing beyond
//! the threshold commits the dismissal, otherwise the overlay springs
//! back.

use crate::config::{
    DISMISS_OFFSET_THRESHOLD, DISMISS_VELOCITY_FACTOR, MIN_DISMISS_OPACITY, OPACITY_PER_POINT,
};

/// Pan-to-dismiss sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    offset_y: f32,
}

/// Messages for the dismiss sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Vertical pan velocity sampled for one gesture-changed event.
    PanChanged { velocity_y: f32 },
    /// The pan gesture was released.
    PanEnded,
}

/// Effects produced by the dismiss gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay moved; apply the offset and backdrop opacity.
    Moved { offset_y: f32, opacity: f32 },
    /// Released beyond the threshold: fade out and close the overlay.
    Dismiss,
    /// Released within the threshold: spring back to rest.
    Reset,
}

/// Backdrop opacity for a drag offset: full at rest, fading linearly,
/// floored so the content stays faintly visible until the release
/// decision.
#[must_use]
pub fn opacity_for(offset_y: f32) -> f32 {
    ((DISMISS_OFFSET_THRESHOLD - offset_y.abs()) * OPACITY_PER_POINT)
        .clamp(MIN_DISMISS_OPACITY, 1.0)
}

/// Release decision: strictly beyond the threshold closes the overlay,
/// the threshold itself springs back.
#[must_use]
pub fn should_dismiss(offset_y: f32) -> bool {
    offset_y.abs() > DISMISS_OFFSET_THRESHOLD
}

impl State {
    /// Handle a dismiss message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PanChanged { velocity_y } => {
                self.offset_y += velocity_y * DISMISS_VELOCITY_FACTOR;
                Effect::Moved {
                    offset_y: self.offset_y,
                    opacity: opacity_for(self.offset_y),
                }
            }
            Message::PanEnded => {
                let dismissed = should_dismiss(self.offset_y);
                self.offset_y = 0.0;
                if dismissed {
                    Effect::Dismiss
                } else {
                    Effect::Reset
                }
            }
        }
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Current backdrop opacity implied by the drag offset.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        opacity_for(self.offset_y)
    }
}
