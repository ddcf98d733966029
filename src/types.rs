//! Core domain types for tambo-docs-mcp.
//!
//! These are plain data carriers: the section index built by discovery,
//! the fetch cache entries, and per-search results.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// A discovered documentation section.
///
/// `path` is the unique key within the discovered set; the section index is
/// de-duplicated by path and kept sorted ascending by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    /// Absolute site-relative path, e.g. `/concepts/components`.
    pub path: String,
    /// Display title taken from the anchor text that referenced this path.
    pub title: String,
    /// First non-empty path segment, e.g. `concepts`; absent if the path
    /// has no segments.
    pub category: Option<String>,
}

impl DocSection {
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        let path = path.into();
        let category = extract_category(&path);
        Self {
            path,
            title: title.into(),
            category,
        }
    }
}

/// Derives the category from a path: the first non-empty `/`-separated
/// segment, or `None` for paths without segments.
#[must_use]
pub fn extract_category(path: &str) -> Option<String> {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

/// A memoized fetch result.
///
/// Entries are valid for a fixed window from creation; a stale entry is
/// treated as absent and overwritten by the next fetch. There is no capacity
/// eviction — the cache grows for the process lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The fully-formed tool result text for the cached path.
    pub content: String,
    /// Creation time.
    pub created: Instant,
}

impl CacheEntry {
    #[must_use]
    pub fn new(content: String) -> Self {
        Self {
            content,
            created: Instant::now(),
        }
    }

    /// Returns true while the entry is younger than `ttl`.
    #[must_use]
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.created.elapsed() < ttl
    }
}

/// A single search match. Transient: produced per search call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Path of the matching section.
    pub path: String,
    /// Display title of the matching section.
    pub title: String,
    /// Category of the matching section, if any.
    pub category: Option<String>,
    /// Bounded excerpt of the matched content.
    pub snippet: String,
}
