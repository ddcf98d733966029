//! Pure HTML extraction functions.
//!
//! Everything in this module is a synchronous `(html, rules) -> data`
//! function. Parsing is confined here because `scraper::Html` is not `Send`
//! and must never live across an await point in the async handler.

use crate::types::DocSection;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Substituted when no content container matched or the container was empty.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content found";

/// Bytes of context kept before a snippet match.
const SNIPPET_BEFORE: usize = 50;
/// Bytes of context kept after a snippet match.
const SNIPPET_AFTER: usize = 100;
/// Snippet length when the query is not found in the text.
const SNIPPET_FALLBACK_CHARS: usize = 150;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("static selector"));
static DATA_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-title]").expect("static selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));
static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("static selector"));
static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("static selector"));
static CONTENT_CLASS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".content, [data-content], .markdown-body").expect("static selector")
});

/// Fixed path-prefix patterns accepted by discovery, anchored at the start.
///
/// The pattern set is heuristic and deliberately preserved as-is: behavior
/// compatibility with the target site is the contract.
static CATEGORY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(concepts?|api|cli|examples?|getting-started|guides?)")
        .expect("static pattern")
});

/// A title/content pair extracted from one documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    pub content: String,
}

/// Collapses all whitespace runs to single spaces and trims.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Scans every hyperlink in the landing page and returns the accepted
/// documentation sections, de-duplicated by path (first occurrence in
/// document order wins) and sorted ascending by path.
///
/// A link is a candidate iff it has a non-empty href that is root-relative
/// (a single leading `/`, not protocol-relative `//`) and non-empty anchor
/// text. A candidate is accepted iff its href contains `/docs/` or matches
/// one of the fixed path-prefix patterns.
#[must_use]
pub fn discover_links(html: &str) -> Vec<DocSection> {
    let document = Html::parse_document(html);
    let mut seen: HashSet<String> = HashSet::new();
    let mut sections = Vec::new();

    for element in document.select(&LINK_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let text = element_text(element);
        if href.is_empty() || !href.starts_with('/') || href.starts_with("//") || text.is_empty()
        {
            continue;
        }
        if !href.contains("/docs/") && !CATEGORY_PREFIX.is_match(href) {
            continue;
        }
        if seen.insert(href.to_string()) {
            sections.push(DocSection::new(href, text));
        }
    }

    sections.sort_by(|a, b| a.path.cmp(&b.path));
    sections
}

/// Extracts title and normalized body content from one page.
///
/// Title fallback: first `<h1>`, else first element carrying `data-title`,
/// else the page `<title>`. Content container fallback keys on element
/// presence, not text: the first `<main>` in the document is the container
/// if one exists (even when empty), else the first `<article>`, else the
/// first match of a content/markdown-body class selector. A missing or
/// empty container yields the fixed placeholder.
#[must_use]
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let mut title = first_text(&document, &H1_SELECTOR);
    if title.is_empty() {
        title = first_text(&document, &DATA_TITLE_SELECTOR);
    }
    if title.is_empty() {
        title = first_text(&document, &TITLE_SELECTOR);
    }

    let mut content = content_container(&document)
        .map(element_text)
        .unwrap_or_default();
    if content.is_empty() {
        content = NO_CONTENT_PLACEHOLDER.to_string();
    }

    ExtractedPage { title, content }
}

fn content_container(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&MAIN_SELECTOR)
        .next()
        .or_else(|| document.select(&ARTICLE_SELECTOR).next())
        .or_else(|| document.select(&CONTENT_CLASS_SELECTOR).next())
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Extracts a bounded excerpt around the first case-insensitive occurrence
/// of `query` in `text`.
///
/// No occurrence: the first 150 characters plus a trailing ellipsis. Found:
/// a window from 50 bytes before the match to 100 bytes after the match end,
/// clipped to the text bounds and clamped to char boundaries, wrapped in
/// leading/trailing ellipses.
#[must_use]
pub fn extract_snippet(text: &str, query: &str) -> String {
    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();

    let Some(index) = haystack.find(&needle) else {
        let head: String = text.chars().take(SNIPPET_FALLBACK_CHARS).collect();
        return format!("{head}...");
    };

    // Offsets were located in the lowercased text, so the window is cut from
    // it as well; lowercasing can shift byte offsets for a few multi-byte
    // case mappings.
    let start = floor_char_boundary(&haystack, index.saturating_sub(SNIPPET_BEFORE));
    let end = ceil_char_boundary(
        &haystack,
        (index + needle.len() + SNIPPET_AFTER).min(haystack.len()),
    );

    format!("...{}...", &haystack[start..end])
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
