// SPDX-License-Identifier: MPL-2.0
//! Demo gallery: an inline carousel over a handful of photo URLs, with
//! the full-screen viewer enabled. Keyboard-free controls only; paging
//! is driven through the prev/next buttons, which stand in for swipe
//! gestures.

use iced::time::{self, Duration};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Subscription, Task, Theme};
use iced_carousel::config::CarouselConfig;
use iced_carousel::media::{self, FetchRequest};
use iced_carousel::ui::{carousel, fullscreen};

const SLIDES: [&str; 4] = [
    "https://picsum.photos/id/1015/1200/800",
    "https://picsum.photos/id/1025/1200/800",
    "https://picsum.photos/id/1039/1200/800",
    "https://picsum.photos/id/1043/1200/800",
];

const SPINNER_TICK_MS: u64 = 50;

/// Virtual page width used when translating button presses into settle
/// offsets.
const PAGE_WIDTH: f32 = 100.0;

fn main() -> iced::Result {
    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("iced_carousel gallery")
        .theme(|_: &Gallery| Theme::Dark)
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    client: Option<reqwest::Client>,
    carousel: carousel::State,
    viewer: Option<fullscreen::State>,
}

#[derive(Debug, Clone)]
enum Message {
    Carousel(carousel::Message),
    Viewer(fullscreen::Message),
    Previous,
    Next,
    SpinnerTick,
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let config = CarouselConfig {
            enable_full_screen: true,
            ..CarouselConfig::default()
        };

        let mut state = carousel::State::new(config);
        state.set_slides(SLIDES.iter().map(|s| (*s).to_string()).collect());
        let effect = state.handle(carousel::Message::Reload);

        let mut gallery = Gallery {
            client: media::client().ok(),
            carousel: state,
            viewer: None,
        };
        let task = gallery.apply_carousel_effect(effect);

        (gallery, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => {
                let effect = self.carousel.handle(msg);
                self.apply_carousel_effect(effect)
            }
            Message::Viewer(msg) => {
                let Some(viewer) = &mut self.viewer else {
                    return Task::none();
                };
                match viewer.handle(msg) {
                    fullscreen::Effect::Presented { fetch }
                    | fullscreen::Effect::SlideChanged { fetch, .. } => {
                        self.run_fetch(fetch, true)
                    }
                    fullscreen::Effect::Closed => {
                        self.viewer = None;
                        Task::none()
                    }
                    fullscreen::Effect::None => Task::none(),
                }
            }
            Message::Previous => self.page_to(self.active_index().saturating_sub(1)),
            Message::Next => self.page_to(self.active_index() + 1),
            Message::SpinnerTick => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.handle(fullscreen::Message::Carousel(
                        carousel::Message::SpinnerTick,
                    ));
                } else {
                    self.carousel.handle(carousel::Message::SpinnerTick);
                }
                Task::none()
            }
        }
    }

    fn apply_carousel_effect(&mut self, effect: carousel::Effect) -> Task<Message> {
        match effect {
            carousel::Effect::Reloaded { fetch }
            | carousel::Effect::SlideChanged { fetch, .. } => self.run_fetch(fetch, false),
            carousel::Effect::OpenFullScreen(seed) => {
                self.viewer = Some(fullscreen::State::new(seed));
                Task::done(Message::Viewer(fullscreen::Message::Presented))
            }
            carousel::Effect::None => Task::none(),
        }
    }

    /// Spawns the fetch as a task, routing the completion back into the
    /// overlay's nested carousel or the inline one.
    fn run_fetch(&self, fetch: Option<FetchRequest>, to_viewer: bool) -> Task<Message> {
        let (Some(request), Some(client)) = (fetch, self.client.clone()) else {
            return Task::none();
        };

        Task::perform(media::fetch_slide(client, request), move |fetched| {
            let inner = carousel::Message::SlideFetched(fetched);
            if to_viewer {
                Message::Viewer(fullscreen::Message::Carousel(inner))
            } else {
                Message::Carousel(inner)
            }
        })
    }

    /// Translates a button press into the drag-settle message pair.
    fn page_to(&mut self, index: usize) -> Task<Message> {
        let settle = carousel::Message::DragEnded {
            offset_x: index as f32 * PAGE_WIDTH,
            page_width: PAGE_WIDTH,
        };

        if self.viewer.is_some() {
            self.update(Message::Viewer(fullscreen::Message::Carousel(settle)))
        } else {
            self.update(Message::Carousel(settle))
        }
    }

    fn active_index(&self) -> usize {
        match &self.viewer {
            Some(viewer) => viewer.carousel().active_index(),
            None => self.carousel.active_index(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let loading = match &self.viewer {
            Some(viewer) => viewer.needs_spinner_ticks(),
            None => self.carousel.needs_spinner_ticks(),
        };

        if loading {
            time::every(Duration::from_millis(SPINNER_TICK_MS)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        if let Some(viewer) = &self.viewer {
            return fullscreen::view(viewer).map(Message::Viewer);
        }

        let slides = container(carousel::view(&self.carousel).map(Message::Carousel))
            .width(Length::Fill)
            .height(Length::Fill);

        let controls = row![
            button(text("Previous")).on_press(Message::Previous),
            button(text("Next")).on_press(Message::Next),
        ]
        .spacing(8);

        column![slides, container(controls).center_x(Length::Fill).padding(8)].into()
    }
}
