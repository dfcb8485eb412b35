//! Resolution caching.
//!
//! This module provides [`CachedResolver`]: a [`NavigationConfig`] paired
//! with an LRU memo of past resolutions, so re-rendering the same route does
//! not rescan the tree. It is gated behind the `cache` feature flag and uses
//! the [`lru`] crate internally.
//!
//! The cache stores positions into the owned config rather than references,
//! and is cleared whenever the config is replaced.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so you can monitor
//! cache effectiveness at runtime.
//!
//! # Examples
//!
//! ```
//! use sams_navigator::cache::CachedResolver;
//! use sams_navigator::defaults::sams_navigation;
//!
//! let mut resolver = CachedResolver::new(sams_navigation(2024));
//! assert!(resolver.resolve("/dashboard/schools/list").is_child_active("school-list"));
//! assert!(resolver.resolve("/dashboard/schools/list").is_child_active("school-list"));
//!
//! assert_eq!(resolver.stats().misses, 1);
//! assert_eq!(resolver.stats().hits, 1);
//! ```

use crate::config::NavigationConfig;
use crate::error::ConfigError;
use crate::resolve::ResolvedMatch;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Position of a matched top-level entry within the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryIndex {
    Section(usize),
    Resource(usize),
}

/// Cached resolution, independent of the config's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchKey {
    entry: Option<EntryIndex>,
    child: Option<usize>,
    match_length: usize,
}

impl MatchKey {
    fn from_match(config: &NavigationConfig, resolved: &ResolvedMatch<'_>) -> Self {
        let entry = resolved.section.and_then(|section| {
            config
                .sections
                .iter()
                .position(|s| std::ptr::eq(s, section))
                .map(EntryIndex::Section)
                .or_else(|| {
                    config
                        .resources
                        .iter()
                        .position(|r| std::ptr::eq(r, section))
                        .map(EntryIndex::Resource)
                })
        });

        let child = resolved.section.zip(resolved.child).and_then(|(section, child)| {
            section
                .children()
                .iter()
                .position(|c| std::ptr::eq(c, child))
        });

        Self {
            entry,
            child,
            match_length: resolved.match_length,
        }
    }

    fn materialize(self, config: &NavigationConfig) -> ResolvedMatch<'_> {
        let section = match self.entry {
            Some(EntryIndex::Section(i)) => config.sections.get(i),
            Some(EntryIndex::Resource(i)) => config.resources.get(i),
            None => None,
        };
        let child = section
            .zip(self.child)
            .and_then(|(section, i)| section.children().get(i));

        ResolvedMatch {
            section,
            child,
            match_length: self.match_length,
        }
    }
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full cache invalidations.
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Resolver with an LRU memo keyed by path.
#[derive(Debug)]
pub struct CachedResolver {
    config: NavigationConfig,
    cache: LruCache<String, MatchKey>,
    stats: CacheStats,
}

impl CachedResolver {
    /// Default number of cached paths.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a resolver with the default capacity.
    pub fn new(config: NavigationConfig) -> Self {
        let cap = NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_cap(config, cap)
    }

    /// Create a resolver caching at most `capacity` paths.
    pub fn with_capacity(config: NavigationConfig, capacity: usize) -> Result<Self, ConfigError> {
        let cap = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(Self::with_cap(config, cap))
    }

    fn with_cap(config: NavigationConfig, cap: NonZeroUsize) -> Self {
        Self {
            config,
            cache: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Resolve `current_path`, reusing a previous result when available.
    pub fn resolve(&mut self, current_path: &str) -> ResolvedMatch<'_> {
        let cached = self.cache.get(current_path).copied();

        let key = if let Some(key) = cached {
            self.stats.hits += 1;
            trace_log!("Resolution cache hit for path: '{}'", current_path);
            key
        } else {
            self.stats.misses += 1;
            trace_log!("Resolution cache miss for path: '{}'", current_path);
            let key = MatchKey::from_match(&self.config, &self.config.resolve(current_path));
            self.cache.push(current_path.to_string(), key);
            key
        };

        key.materialize(&self.config)
    }

    /// The configuration being resolved against.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Replace the configuration and invalidate the cache.
    pub fn set_config(&mut self, config: NavigationConfig) {
        self.config = config;
        self.clear();
    }

    /// Drop all cached entries and increment the invalidation counter.
    pub fn clear(&mut self) {
        debug_log!(
            "Clearing resolution cache: {} entries removed ({} prior invalidations, hit rate: {:.1}%)",
            self.cache.len(),
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
        self.cache.clear();
        self.stats.invalidations += 1;
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of cached paths.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Clone for CachedResolver {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            cache: LruCache::new(self.cache.cap()),
            stats: self.stats.clone(),
        }
    }
}
