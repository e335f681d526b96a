// SPDX-License-Identifier: MPL-2.0
//! Slide image pipeline: fetch, decode, and the per-index cache.

pub mod cache;
pub mod fetch;
pub mod image;

pub use cache::{CacheStats, SlideCache};
pub use fetch::{client, fetch_image, fetch_slide, FetchRequest, FetchedSlide};
pub use image::ImageData;
