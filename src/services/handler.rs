//! Document handler: section index, fetch cache, and the
//! discovery/fetch/search pipeline.

use crate::error::{FetchError, HandlerError, HandlerResult};
use crate::services::extract;
use crate::types::{CacheEntry, DocSection, SearchResult};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// Fetch results stay valid for exactly this long.
const CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Namespace prefix disambiguating doc-fetch entries from other cache uses.
const CACHE_KEY_PREFIX: &str = "docs:";

/// Searched when no discovery run has produced any sections, so search stays
/// useful against well-known paths. Unlike discovered sections these carry
/// no category, so hits from them render without a category tag.
fn fallback_sections() -> Vec<DocSection> {
    let fixed = [
        ("/getting-started/quickstart", "Quickstart"),
        ("/concepts/components", "Components"),
        ("/api-reference/react-hooks", "React Hooks"),
    ];
    fixed
        .into_iter()
        .map(|(path, title)| DocSection {
            path: path.to_string(),
            title: title.to_string(),
            category: None,
        })
        .collect()
}

/// Section index with its load state.
///
/// `NotLoaded -> (discover ok) -> Loaded`; a failed discovery leaves the
/// state (and any prior sections) untouched. Once loaded, only an explicit
/// new discovery call replaces the set.
#[derive(Debug, Default)]
struct SectionIndex {
    sections: Vec<DocSection>,
    loaded: bool,
}

/// Owns the in-memory section index and fetch cache; implements discovery,
/// fetch + extraction, search, and listing. Knows nothing about the MCP
/// transport.
pub struct DocHandler {
    client: reqwest::Client,
    site_root: String,
    sections: RwLock<SectionIndex>,
    cache: RwLock<HashMap<String, CacheEntry>>,
    cache_ttl: Duration,
}

impl DocHandler {
    /// Creates a handler targeting `site_root` (scheme + host, no trailing
    /// slash required).
    #[must_use]
    pub fn new(site_root: impl Into<String>) -> Self {
        let mut site_root = site_root.into();
        while site_root.ends_with('/') {
            site_root.pop();
        }
        Self {
            client: reqwest::Client::new(),
            site_root,
            sections: RwLock::new(SectionIndex::default()),
            cache: RwLock::new(HashMap::new()),
            cache_ttl: CACHE_TTL,
        }
    }

    /// Overrides the cache freshness window. Test hook; the default is the
    /// fixed 10-minute window.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// The configured documentation site root.
    #[must_use]
    pub fn site_root(&self) -> &str {
        &self.site_root
    }

    /// GETs `url` and returns the body text, failing on non-success status.
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// Crawls the site landing page and replaces the section index with the
    /// discovered set. All-or-nothing: on failure the prior set is untouched.
    pub async fn discover(&self) -> HandlerResult<Vec<DocSection>> {
        let url = format!("{}/", self.site_root);
        let html = self.get(&url).await.map_err(HandlerError::Discovery)?;

        let sections = extract::discover_links(&html);
        tracing::info!(count = sections.len(), "discovered documentation sections");

        let mut index = self.sections.write().await;
        index.sections = sections.clone();
        index.loaded = true;

        Ok(sections)
    }

    /// Idempotent guard: runs discovery iff none has ever succeeded. Never
    /// re-runs once sections are loaded; refresh is explicit via
    /// [`DocHandler::discover`].
    pub async fn ensure_loaded(&self) -> HandlerResult<()> {
        if self.sections.read().await.loaded {
            return Ok(());
        }
        self.discover().await?;
        Ok(())
    }

    /// Snapshot of the current section set.
    pub async fn sections(&self) -> Vec<DocSection> {
        self.sections.read().await.sections.clone()
    }

    /// Fetches one documentation path and returns the formatted text block,
    /// serving repeat fetches within the freshness window from the cache.
    ///
    /// Errors are surfaced to the caller and never cached, so a later call
    /// retries the network rather than the cache.
    pub async fn fetch(&self, path: &str) -> HandlerResult<String> {
        if path.is_empty() {
            return Err(HandlerError::InvalidArgument { name: "path" });
        }

        let cache_key = format!("{CACHE_KEY_PREFIX}{path}");
        if let Some(entry) = self.cache.read().await.get(&cache_key) {
            if entry.is_fresh(self.cache_ttl) {
                tracing::debug!(path, "serving fetch from cache");
                return Ok(entry.content.clone());
            }
        }

        let url = format!("{}{}", self.site_root, path);
        let html = self.get(&url).await?;
        let page = extract::extract_page(&html);

        let text = format!(
            "# {}\n\nPath: {}\nURL: {}\n\n{}",
            page.title, path, url, page.content
        );

        self.cache
            .write()
            .await
            .insert(cache_key, CacheEntry::new(text.clone()));

        Ok(text)
    }

    /// Linear search with snippet extraction over the discovered corpus.
    ///
    /// Fetch failures are isolated per candidate: one bad page is logged and
    /// skipped, never aborting the whole search. Zero matches is a success.
    pub async fn search(&self, query: &str) -> HandlerResult<Vec<SearchResult>> {
        if query.is_empty() {
            return Err(HandlerError::InvalidArgument { name: "query" });
        }

        self.ensure_loaded().await?;

        let mut candidates = self.sections().await;
        if candidates.is_empty() {
            candidates = fallback_sections();
        }

        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for section in candidates {
            let text = match self.fetch(&section.path).await {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(path = %section.path, error = %err, "skipping section during search");
                    continue;
                }
            };

            if text.to_lowercase().contains(&needle) {
                results.push(SearchResult {
                    path: section.path,
                    title: section.title,
                    category: section.category,
                    snippet: extract::extract_snippet(&text, query),
                });
            }
        }

        Ok(results)
    }
}
