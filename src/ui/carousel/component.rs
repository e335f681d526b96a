// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.
//!
//! The component owns the URL list, the active index, the slide cache and
//! the paging sub-component. It never performs I/O itself: cache misses
//! surface as [`FetchRequest`] values inside effects, the host runs them
//! as Iced tasks and feeds the [`FetchedSlide`] completions back in.

use crate::config::{CarouselConfig, SPINNER_SPEED};
use crate::media::{FetchRequest, FetchedSlide, ImageData, SlideCache};
use crate::ui::carousel::{indicator::Indicator, paging};
use std::f32::consts::TAU;
use std::sync::Arc;

/// Carousel widget state.
#[derive(Debug, Clone)]
pub struct State {
    /// Host-assigned configuration, applied on the next reload.
    pub config: CarouselConfig,
    slides: Vec<String>,
    cache: SlideCache,
    paging: paging::State,
    /// Bumped when the slide list is reassigned wholesale, so in-flight
    /// fetch completions from the previous list are dropped.
    generation: u64,
    spinner_rotation: f32,
}

/// Seed handed to a spawned full-screen viewer: the same slide list, a
/// snapshot of the cache, and the current position.
#[derive(Debug, Clone)]
pub struct Seed {
    pub slides: Vec<String>,
    pub cache: SlideCache,
    pub active_index: usize,
    pub config: CarouselConfig,
}

/// Messages consumed by [`State::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Re-derive everything from the assigned slide list and config.
    /// The widget does not refresh on property mutation by itself.
    Reload,
    /// A paging drag began.
    DragStarted,
    /// A paging drag settled at the given scroll offset.
    DragEnded { offset_x: f32, page_width: f32 },
    /// An asynchronous fetch completed.
    SlideFetched(FetchedSlide),
    /// The active slide was pressed (full-screen request).
    SlidePressed,
    /// Animation tick for loading placeholders.
    SpinnerTick,
}

/// Side effects the host should perform after handling a carousel message.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Reload finished; run the fetch if the active slide is uncached.
    Reloaded { fetch: Option<FetchRequest> },
    /// The collection settled on a slide. The host forwards the index to
    /// its observer and runs the fetch if one is needed.
    SlideChanged {
        index: usize,
        fetch: Option<FetchRequest>,
    },
    /// Open the full-screen viewer with this seed.
    OpenFullScreen(Seed),
}

impl State {
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            slides: Vec::new(),
            cache: SlideCache::new(),
            paging: paging::State::default(),
            generation: 0,
            spinner_rotation: 0.0,
        }
    }

    /// Builds a carousel from a full-screen seed, sharing the seed's cache
    /// snapshot. Used by the full-screen viewer for its nested collection.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        let mut state = Self::new(seed.config);
        state.slides = seed.slides;
        state.cache = seed.cache;
        state
            .paging
            .handle(paging::Message::SetSlideCount(state.slides.len()));
        state.paging.handle(paging::Message::JumpTo(seed.active_index));
        state
    }

    /// Assigns a new slide list. Takes effect on the next `Reload`; the
    /// active index is clamped then. The generation bump orphans any
    /// fetches still in flight for the previous list.
    pub fn set_slides(&mut self, slides: Vec<String>) {
        self.slides = slides;
        self.generation += 1;
    }

    /// Enable or disable paging gestures (full-screen zoom lock).
    pub fn set_paging_enabled(&mut self, enabled: bool) {
        self.paging.handle(paging::Message::SetEnabled(enabled));
    }

    /// Handle a carousel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Reload => {
                self.paging
                    .handle(paging::Message::SetSlideCount(self.slides.len()));
                Effect::Reloaded {
                    fetch: self.fetch_for_active(),
                }
            }
            Message::DragStarted => {
                self.paging.handle(paging::Message::DragStarted);
                Effect::None
            }
            Message::DragEnded {
                offset_x,
                page_width,
            } => match self.paging.handle(paging::Message::DragEnded {
                offset_x,
                page_width,
            }) {
                paging::Effect::Settled(index) => Effect::SlideChanged {
                    index,
                    fetch: self.fetch_for_active(),
                },
                paging::Effect::None => Effect::None,
            },
            Message::SlideFetched(fetched) => {
                if fetched.generation != self.generation {
                    // Completion for a slide list that no longer exists.
                    return Effect::None;
                }
                // A failed fetch keeps the placeholder; a success is cached
                // even when the user has scrolled away in the meantime.
                if let Ok(image) = fetched.result {
                    self.cache.insert(fetched.index, image);
                }
                Effect::None
            }
            Message::SlidePressed => {
                if self.config.enable_full_screen && !self.slides.is_empty() {
                    Effect::OpenFullScreen(self.seed())
                } else {
                    Effect::None
                }
            }
            Message::SpinnerTick => {
                if self.is_loading(self.active_index()) {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > TAU {
                        self.spinner_rotation -= TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// The fetch needed to show the active slide, if its image is missing.
    ///
    /// Concurrent duplicate fetches for one index are not deduplicated;
    /// the cache's last-write-wins insert makes the race harmless.
    fn fetch_for_active(&self) -> Option<FetchRequest> {
        let index = self.active_index();
        let url = self.slides.get(index)?;
        if self.cache.contains(index) {
            return None;
        }
        Some(FetchRequest {
            generation: self.generation,
            index,
            url: url.clone(),
        })
    }

    /// Seed for a spawned full-screen viewer.
    #[must_use]
    pub fn seed(&self) -> Seed {
        Seed {
            slides: self.slides.clone(),
            cache: self.cache.snapshot(),
            active_index: self.active_index(),
            config: self.config.clone(),
        }
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.paging.active_index()
    }

    #[must_use]
    pub fn is_paging_enabled(&self) -> bool {
        self.paging.is_enabled()
    }

    /// The decoded image for a slide, if cached.
    #[must_use]
    pub fn image_for(&self, index: usize) -> Option<&Arc<ImageData>> {
        self.cache.peek(index)
    }

    /// Whether a slide still shows its loading placeholder.
    #[must_use]
    pub fn is_loading(&self, index: usize) -> bool {
        index < self.slides.len() && !self.cache.contains(index)
    }

    /// Whether the host should keep spinner ticks flowing.
    #[must_use]
    pub fn needs_spinner_ticks(&self) -> bool {
        self.is_loading(self.active_index())
    }

    /// Projection for the inline page indicator.
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        Indicator::project(
            self.slide_count(),
            self.active_index(),
            self.config.show_indicator,
        )
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub(crate) fn cache_mut(&mut self) -> &mut SlideCache {
        &mut self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    fn urls(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://example.com/slide-{i}.jpg"))
            .collect()
    }

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    fn fetched(state: &State, index: usize, result: crate::error::Result<ImageData>) -> Message {
        Message::SlideFetched(FetchedSlide {
            generation: state.generation(),
            index,
            result,
        })
    }

    #[test]
    fn reload_requests_fetch_for_active_uncached_slide() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(4));

        let effect = state.handle(Message::Reload);
        match effect {
            Effect::Reloaded { fetch: Some(req) } => {
                assert_eq!(req.index, 0);
                assert_eq!(req.url, "https://example.com/slide-0.jpg");
            }
            other => panic!("expected fetch for slide 0, got {other:?}"),
        }
    }

    #[test]
    fn reload_with_cached_active_slide_skips_fetch() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(2));
        state.cache_mut().insert(0, test_image());

        let effect = state.handle(Message::Reload);
        assert!(matches!(effect, Effect::Reloaded { fetch: None }));
    }

    #[test]
    fn reload_with_empty_slide_list_is_quiet() {
        let mut state = State::new(CarouselConfig::default());
        let effect = state.handle(Message::Reload);
        assert!(matches!(effect, Effect::Reloaded { fetch: None }));
    }

    #[test]
    fn settle_notifies_and_fetches() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(4));
        state.handle(Message::Reload);

        let effect = state.handle(Message::DragEnded {
            offset_x: 640.0,
            page_width: 320.0,
        });

        match effect {
            Effect::SlideChanged {
                index: 2,
                fetch: Some(req),
            } => assert_eq!(req.index, 2),
            other => panic!("expected settle on slide 2 with fetch, got {other:?}"),
        }
    }

    #[test]
    fn fetched_image_lands_in_cache() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(2));
        state.handle(Message::Reload);

        state.handle(fetched(&state, 0, Ok(test_image())));
        assert!(!state.is_loading(0));
        assert!(state.image_for(0).is_some());
    }

    #[test]
    fn fetched_image_for_scrolled_away_slide_is_still_cached() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(3));
        state.handle(Message::Reload);

        // Build the completion for slide 0, then move to slide 1.
        let completion = fetched(&state, 0, Ok(test_image()));
        state.handle(Message::DragEnded {
            offset_x: 320.0,
            page_width: 320.0,
        });

        state.handle(completion);
        assert!(state.image_for(0).is_some());
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn stale_generation_fetch_is_dropped() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(2));
        state.handle(Message::Reload);
        let stale = fetched(&state, 0, Ok(test_image()));

        state.set_slides(urls(5));
        state.handle(Message::Reload);

        state.handle(stale);
        assert!(state.image_for(0).is_none());
    }

    #[test]
    fn failed_fetch_keeps_placeholder() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(1));
        state.handle(Message::Reload);

        state.handle(fetched(
            &state,
            0,
            Err(crate::error::Error::Http("HTTP status: 404".into())),
        ));

        assert!(state.is_loading(0));
        assert!(state.image_for(0).is_none());
    }

    #[test]
    fn reload_after_shrink_clamps_active_index() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(5));
        state.handle(Message::Reload);
        state.handle(Message::DragEnded {
            offset_x: 4.0 * 320.0,
            page_width: 320.0,
        });
        assert_eq!(state.active_index(), 4);

        state.set_slides(urls(2));
        state.handle(Message::Reload);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn slide_press_without_full_screen_silently_noops() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(3));
        state.handle(Message::Reload);

        let effect = state.handle(Message::SlidePressed);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn slide_press_opens_full_screen_with_seed() {
        let config = CarouselConfig {
            enable_full_screen: true,
            ..CarouselConfig::default()
        };
        let mut state = State::new(config);
        state.set_slides(urls(3));
        state.handle(Message::Reload);
        state.handle(fetched(&state, 0, Ok(test_image())));
        state.handle(Message::DragEnded {
            offset_x: 320.0,
            page_width: 320.0,
        });

        match state.handle(Message::SlidePressed) {
            Effect::OpenFullScreen(seed) => {
                assert_eq!(seed.slides.len(), 3);
                assert_eq!(seed.active_index, 1);
                assert!(seed.cache.contains(0));
            }
            other => panic!("expected full-screen seed, got {other:?}"),
        }
    }

    #[test]
    fn seed_cache_diverges_from_widget_cache() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(2));
        state.handle(Message::Reload);
        state.handle(fetched(&state, 0, Ok(test_image())));

        let mut seed = state.seed();
        seed.cache.insert(1, test_image());

        assert!(seed.cache.contains(1));
        assert!(state.image_for(1).is_none());
    }

    #[test]
    fn from_seed_adopts_position_and_cache() {
        let seed = Seed {
            slides: urls(4),
            cache: {
                let mut cache = SlideCache::new();
                cache.insert(2, test_image());
                cache
            },
            active_index: 2,
            config: CarouselConfig::default().for_full_screen(),
        };

        let state = State::from_seed(seed);
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.slide_count(), 4);
        assert!(state.image_for(2).is_some());
        assert!(!state.indicator().visible);
    }

    #[test]
    fn spinner_ticks_only_while_active_slide_loads() {
        let mut state = State::new(CarouselConfig::default());
        state.set_slides(urls(1));
        state.handle(Message::Reload);
        assert!(state.needs_spinner_ticks());

        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);

        state.handle(fetched(&state, 0, Ok(test_image())));
        assert!(!state.needs_spinner_ticks());

        let rotation = state.spinner_rotation();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), rotation);
    }
}
