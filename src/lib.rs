// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a horizontally paging image carousel widget for the
//! Iced GUI framework.
//!
//! Slides are fetched lazily over HTTP as they become visible and cached
//! for the lifetime of the widget. An optional full-screen viewer adds
//! pinch-to-zoom, double-tap zoom, pan-to-reposition and pan-to-dismiss
//! gestures over the same slide collection.
//!
//! Components carry no I/O of their own: updates return effects naming
//! the fetches to run, and the host drives them through Iced tasks.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod config;
pub mod error;
pub mod media;
pub mod ui;

pub use config::CarouselConfig;
pub use error::{Error, Result};
