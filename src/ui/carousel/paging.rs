// SPDX-License-Identifier: MPL-2.0
//! Paging sub-component: the settled ⇄ dragging state machine.
//!
//! A drag ending at scroll offset `x` with page width `w` settles on
//! `floor(x / w)`, clamped to the slide range. The full-screen viewer
//! disables paging wholesale while zoomed so pan gestures reposition the
//! image instead of turning pages.

/// Paging sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    slide_count: usize,
    active_index: usize,
    enabled: bool,
    dragging: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            slide_count: 0,
            active_index: 0,
            enabled: true,
            dragging: false,
        }
    }
}

/// Messages for the paging sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A horizontal drag began.
    DragStarted,
    /// The drag deceleration ended at the given scroll offset.
    DragEnded { offset_x: f32, page_width: f32 },
    /// The slide list was (re)assigned with this many slides.
    SetSlideCount(usize),
    /// Enable or disable paging gestures.
    SetEnabled(bool),
    /// Jump directly to a slide (full-screen hand-off seeding).
    JumpTo(usize),
}

/// Effects produced by paging transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The collection came to rest on this slide. Emitted on every
    /// settle, even when the index did not change.
    Settled(usize),
}

impl State {
    /// Handle a paging message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragStarted => {
                if self.enabled {
                    self.dragging = true;
                }
                Effect::None
            }
            Message::DragEnded {
                offset_x,
                page_width,
            } => {
                if !self.enabled || self.slide_count == 0 {
                    self.dragging = false;
                    return Effect::None;
                }

                self.dragging = false;
                self.active_index = self.settle_index(offset_x, page_width);
                Effect::Settled(self.active_index)
            }
            Message::SetSlideCount(count) => {
                self.slide_count = count;
                self.active_index = clamp_index(self.active_index, count);
                Effect::None
            }
            Message::SetEnabled(enabled) => {
                self.enabled = enabled;
                if !enabled {
                    self.dragging = false;
                }
                Effect::None
            }
            Message::JumpTo(index) => {
                self.active_index = clamp_index(index, self.slide_count);
                Effect::None
            }
        }
    }

    fn settle_index(&self, offset_x: f32, page_width: f32) -> usize {
        if page_width <= 0.0 {
            return self.active_index;
        }

        let raw = (offset_x / page_width).floor();
        if raw <= 0.0 {
            0
        } else {
            clamp_index(raw as usize, self.slide_count)
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Clamps an index into `0..count`, falling back to 0 for an empty list.
fn clamp_index(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        index.min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_slides(count: usize) -> State {
        let mut state = State::default();
        state.handle(Message::SetSlideCount(count));
        state
    }

    #[test]
    fn settle_computes_index_from_offset() {
        let mut state = with_slides(4);

        let effect = state.handle(Message::DragEnded {
            offset_x: 640.0,
            page_width: 320.0,
        });

        assert_eq!(effect, Effect::Settled(2));
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn settle_mid_page_rounds_down() {
        let mut state = with_slides(4);

        let effect = state.handle(Message::DragEnded {
            offset_x: 500.0,
            page_width: 320.0,
        });

        assert_eq!(effect, Effect::Settled(1));
    }

    #[test]
    fn settle_clamps_to_last_slide() {
        let mut state = with_slides(3);

        let effect = state.handle(Message::DragEnded {
            offset_x: 3200.0,
            page_width: 320.0,
        });

        assert_eq!(effect, Effect::Settled(2));
    }

    #[test]
    fn settle_on_same_index_still_notifies() {
        let mut state = with_slides(2);

        let first = state.handle(Message::DragEnded {
            offset_x: 0.0,
            page_width: 320.0,
        });
        let second = state.handle(Message::DragEnded {
            offset_x: 10.0,
            page_width: 320.0,
        });

        assert_eq!(first, Effect::Settled(0));
        assert_eq!(second, Effect::Settled(0));
    }

    #[test]
    fn zero_page_width_keeps_current_index() {
        let mut state = with_slides(3);
        state.handle(Message::JumpTo(1));

        let effect = state.handle(Message::DragEnded {
            offset_x: 500.0,
            page_width: 0.0,
        });

        assert_eq!(effect, Effect::Settled(1));
    }

    #[test]
    fn disabled_paging_ignores_drag_end() {
        let mut state = with_slides(4);
        state.handle(Message::SetEnabled(false));

        let effect = state.handle(Message::DragEnded {
            offset_x: 640.0,
            page_width: 320.0,
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn shrinking_slide_list_clamps_active_index() {
        let mut state = with_slides(5);
        state.handle(Message::JumpTo(4));

        state.handle(Message::SetSlideCount(2));
        assert_eq!(state.active_index(), 1);

        state.handle(Message::SetSlideCount(0));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn drag_started_requires_enabled() {
        let mut state = with_slides(2);
        state.handle(Message::SetEnabled(false));
        state.handle(Message::DragStarted);
        assert!(!state.is_dragging());

        state.handle(Message::SetEnabled(true));
        state.handle(Message::DragStarted);
        assert!(state.is_dragging());
    }

    #[test]
    fn jump_to_clamps_out_of_range() {
        let mut state = with_slides(3);
        state.handle(Message::JumpTo(10));
        assert_eq!(state.active_index(), 2);
    }
}
