// SPDX-License-Identifier: MPL-2.0
//! Per-slide image cache.
//!
//! A plain index-keyed map with no eviction: an image fetched once stays
//! for the lifetime of the widget instance. The cache is only ever touched
//! from the UI thread (fetch completions are routed back as messages), so
//! it needs no synchronization. [`SlideCache::snapshot`] supports the
//! full-screen hand-off: both sides read the same decoded images but
//! mutate independent maps afterwards.

use crate::media::ImageData;
use std::collections::HashMap;
use std::sync::Arc;

/// Statistics about cache behavior, mostly useful in tests and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups that found an image.
    pub hits: u64,
    /// Number of lookups that found nothing.
    pub misses: u64,
    /// Number of images inserted.
    pub insertions: u64,
}

/// Index-keyed cache of decoded slide images.
#[derive(Debug, Clone, Default)]
pub struct SlideCache {
    entries: HashMap<usize, Arc<ImageData>>,
    stats: CacheStats,
}

impl SlideCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the image for a slide index, counting the hit or miss.
    pub fn get(&mut self, index: usize) -> Option<Arc<ImageData>> {
        match self.entries.get(&index) {
            Some(image) => {
                self.stats.hits += 1;
                Some(Arc::clone(image))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for an image without touching the statistics.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Borrow the image for a slide index without counting a lookup.
    /// Used by view code, which must not skew the stats on every frame.
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<&Arc<ImageData>> {
        self.entries.get(&index)
    }

    /// Stores an image for a slide index. A duplicate insert from a raced
    /// second fetch simply overwrites: last write wins.
    pub fn insert(&mut self, index: usize, image: ImageData) {
        self.entries.insert(index, Arc::new(image));
        self.stats.insertions += 1;
    }

    /// Cheap copy for the full-screen hand-off: the `Arc`'d images are
    /// shared, the maps diverge independently from here on.
    #[must_use]
    pub fn snapshot(&self) -> SlideCache {
        SlideCache {
            entries: self.entries.clone(),
            stats: CacheStats::default(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
