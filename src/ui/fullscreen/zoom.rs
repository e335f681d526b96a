// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component: pinch scaling and double-tap toggling.
//!
//! The scale lives in `[MIN_SCALE, MAX_SCALE]`. While zoomed the nested
//! collection's paging is locked so pan gestures reposition the image;
//! paging comes back only when the scale returns to exactly `MIN_SCALE`
//! (the clamp makes that value precisely attainable, so the float
//! equality is deliberate).

use crate::config::{MAX_SCALE, MIN_SCALE, PINCH_VELOCITY_FACTOR};

/// Zoom sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    scale: f32,
}

impl Default for State {
    fn default() -> Self {
        Self { scale: MIN_SCALE }
    }
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pinch gesture began.
    PinchStarted,
    /// Pinch velocity sampled for one gesture-changed event.
    PinchChanged { velocity: f32 },
    /// The pinch gesture was released.
    PinchEnded,
    /// A double-tap toggles between unzoomed and fully zoomed.
    DoubleTapped,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Live scale update during a pinch; paging stays locked.
    ScaleChanged(f32),
    /// Lock or unlock the nested collection's paging gestures.
    PagingEnabled(bool),
    /// Double-tap toggled the scale; apply both in one animated step.
    Toggled { scale: f32, paging_enabled: bool },
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PinchStarted => Effect::PagingEnabled(false),
            Message::PinchChanged { velocity } => {
                self.scale =
                    (self.scale + velocity * PINCH_VELOCITY_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
                Effect::ScaleChanged(self.scale)
            }
            Message::PinchEnded => Effect::PagingEnabled(self.scale == MIN_SCALE),
            Message::DoubleTapped => {
                if self.scale == MIN_SCALE {
                    self.scale = MAX_SCALE;
                    Effect::Toggled {
                        scale: MAX_SCALE,
                        paging_enabled: false,
                    }
                } else {
                    self.scale = MIN_SCALE;
                    Effect::Toggled {
                        scale: MIN_SCALE,
                        paging_enabled: true,
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether a pan should reposition the image instead of dragging the
    /// overlay towards dismissal.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_scale_is_unzoomed() {
        let state = State::default();
        assert_eq!(state.scale(), MIN_SCALE);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn pinch_accumulates_velocity() {
        let mut state = State::default();
        state.handle(Message::PinchChanged { velocity: 10.0 });
        assert_relative_eq!(state.scale(), 1.3);

        state.handle(Message::PinchChanged { velocity: 10.0 });
        assert_relative_eq!(state.scale(), 1.6);
    }

    #[test]
    fn scale_clamped_for_any_velocity_sequence() {
        let mut state = State::default();
        for velocity in [500.0, -2000.0, 75.0, f32::MAX, -f32::MAX, 3.0] {
            state.handle(Message::PinchChanged { velocity });
            assert!(state.scale() >= MIN_SCALE);
            assert!(state.scale() <= MAX_SCALE);
        }
    }

    #[test]
    fn pinch_start_always_locks_paging() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::PinchStarted),
            Effect::PagingEnabled(false)
        );
    }

    #[test]
    fn pinch_end_restores_paging_only_at_min_scale() {
        let mut state = State::default();
        state.handle(Message::PinchChanged { velocity: 10.0 });
        assert_eq!(
            state.handle(Message::PinchEnded),
            Effect::PagingEnabled(false)
        );

        state.handle(Message::PinchChanged { velocity: -1000.0 });
        assert_eq!(
            state.handle(Message::PinchEnded),
            Effect::PagingEnabled(true)
        );
    }

    #[test]
    fn double_tap_toggles_between_extremes() {
        let mut state = State::default();

        let zoom_in = state.handle(Message::DoubleTapped);
        assert_eq!(
            zoom_in,
            Effect::Toggled {
                scale: MAX_SCALE,
                paging_enabled: false
            }
        );
        assert!(state.is_zoomed());

        let zoom_out = state.handle(Message::DoubleTapped);
        assert_eq!(
            zoom_out,
            Effect::Toggled {
                scale: MIN_SCALE,
                paging_enabled: true
            }
        );
        assert!(!state.is_zoomed());
    }

    #[test]
    fn double_tap_from_partial_zoom_returns_to_min() {
        let mut state = State::default();
        state.handle(Message::PinchChanged { velocity: 20.0 });
        assert!(state.is_zoomed());

        let effect = state.handle(Message::DoubleTapped);
        assert_eq!(
            effect,
            Effect::Toggled {
                scale: MIN_SCALE,
                paging_enabled: true
            }
        );
    }
}
