//! Resolved tooltip content, keyed by [`CacheKey`].
//!
//! The cache lives as long as the controller that owns it. Nothing is evicted
//! or invalidated: content is immutable for the lifetime of a page.

use std::collections::HashMap;

use super::request::{CacheKey, TooltipRequest};

/// Rendered tooltip markup for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    pub html: String,
}

impl CachedEntry {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, CachedEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_for(request: &TooltipRequest) -> CacheKey {
        request.cache_key()
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<&CachedEntry> {
        self.entries.get(key)
    }

    /// Store an entry. A second store for the same key replaces the first.
    pub fn store(&mut self, key: CacheKey, entry: CachedEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::request::TooltipKind;

    fn key(k: &str) -> CacheKey {
        TooltipRequest::new(TooltipKind::Item, "us", "en", "", k).cache_key()
    }

    #[test]
    fn test_store_then_lookup() {
        let mut cache = ResponseCache::new();
        cache.store(key("the-gavel"), CachedEntry::new("<div>gavel</div>"));
        assert_eq!(
            cache.lookup(&key("the-gavel")),
            Some(&CachedEntry::new("<div>gavel</div>"))
        );
    }

    #[test]
    fn test_lookup_missing() {
        let cache = ResponseCache::new();
        assert!(cache.lookup(&key("never-stored")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut cache = ResponseCache::new();
        cache.store(key("a"), CachedEntry::new("first"));
        cache.store(key("a"), CachedEntry::new("second"));
        assert_eq!(cache.lookup(&key("a")).unwrap().html, "second");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_for_distinguishes_kind_region_and_locale() {
        let skill = TooltipRequest::new(TooltipKind::Skill, "us", "en", "barbarian", "bash");
        assert_eq!(ResponseCache::key_for(&skill), skill.cache_key());
        assert_eq!(ResponseCache::key_for(&skill).to_string(), "us-en-skill-bash");

        let rune = TooltipRequest::new(TooltipKind::Rune, "us", "en", "bash", "bash");
        let eu = TooltipRequest::new(TooltipKind::Skill, "eu", "en", "barbarian", "bash");
        assert_ne!(ResponseCache::key_for(&skill), ResponseCache::key_for(&rune));
        assert_ne!(ResponseCache::key_for(&skill), ResponseCache::key_for(&eu));
    }
}
