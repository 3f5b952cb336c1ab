// SPDX-License-Identifier: MPL-2.0
//! In-memory dog photo cache.
//!
//! Photos are fetched lazily as result pages arrive and kept in a bounded
//! LRU so paging back and forth does not re-download every image. Lookups
//! use `peek` so the render pass never needs mutable access.

use crate::config::DEFAULT_PHOTO_CACHE_ENTRIES;
use iced::widget::image;
use lru::LruCache;
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;

pub struct PhotoCache {
    entries: LruCache<String, image::Handle>,
    /// URLs currently being fetched, to avoid duplicate downloads.
    pending: BTreeSet<String>,
}

impl fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoCache")
            .field("cached", &self.entries.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl PhotoCache {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_PHOTO_CACHE_ENTRIES)
                .expect("DEFAULT_PHOTO_CACHE_ENTRIES must be non-zero"),
        );
        Self {
            entries: LruCache::new(capacity),
            pending: BTreeSet::new(),
        }
    }

    /// Read-only lookup for the view. Does not refresh recency.
    pub fn get(&self, url: &str) -> Option<image::Handle> {
        self.entries.peek(url).cloned()
    }

    /// Marks a URL as being fetched. Returns `false` when the photo is
    /// already cached or already on its way, i.e. no fetch should start.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if url.is_empty() || self.entries.contains(url) || self.pending.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Stores a downloaded photo and clears its pending mark.
    pub fn complete_fetch(&mut self, url: &str, bytes: Vec<u8>) {
        self.pending.remove(url);
        self.entries
            .put(url.to_string(), image::Handle::from_bytes(bytes));
    }

    /// Clears the pending mark after a failed download so a later page can
    /// try again.
    pub fn abort_fetch(&mut self, url: &str) {
        self.pending.remove(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_fetch_marks_each_url_once() {
        let mut cache = PhotoCache::new(8);
        assert!(cache.begin_fetch("https://example.com/a.jpg"));
        assert!(!cache.begin_fetch("https://example.com/a.jpg"), "pending");
        assert!(!cache.begin_fetch(""), "empty URLs are never fetched");
    }

    #[test]
    fn complete_fetch_makes_the_photo_visible() {
        let mut cache = PhotoCache::new(8);
        cache.begin_fetch("u");
        cache.complete_fetch("u", vec![1, 2, 3]);
        assert!(cache.get("u").is_some());
        assert!(!cache.begin_fetch("u"), "already cached");
    }

    #[test]
    fn abort_fetch_allows_a_retry() {
        let mut cache = PhotoCache::new(8);
        cache.begin_fetch("u");
        cache.abort_fetch("u");
        assert!(cache.begin_fetch("u"), "retry after failure");
    }
}
