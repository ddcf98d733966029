//! Documentation tool entry points and text rendering.
//!
//! Each `execute_*` function backs one MCP tool and is also what the CLI
//! subcommands call directly. Outputs are human-readable text blocks; the
//! MCP layer passes them through unchanged.

use crate::error::HandlerResult;
use crate::services::DocHandler;
use crate::types::{DocSection, SearchResult};
use schemars::JsonSchema;
use serde::Deserialize;

/// Category bucket used for sections whose path has no segments.
const OTHER_CATEGORY: &str = "Other";

/// Input for the `fetch_docs` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FetchInput {
    /// The documentation path to fetch (e.g. /concepts/components)
    pub path: String,
}

/// Input for the `search_docs` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Search query to find relevant documentation
    pub query: String,
}

/// Executes the `discover_docs` tool: crawl the landing page and enumerate
/// every discovered section.
///
/// # Errors
///
/// Returns [`crate::error::HandlerError::Discovery`] when the crawl fails;
/// the prior section set is left untouched.
pub async fn execute_discover(handler: &DocHandler) -> HandlerResult<String> {
    let sections = handler.discover().await?;
    Ok(render_discovery(&sections))
}

/// Executes the `fetch_docs` tool.
///
/// # Errors
///
/// Returns an error for an empty path or a failed fetch.
pub async fn execute_fetch(handler: &DocHandler, input: FetchInput) -> HandlerResult<String> {
    handler.fetch(&input.path).await
}

/// Executes the `search_docs` tool. Zero matches renders an explicit
/// "no results" message rather than an error.
///
/// # Errors
///
/// Returns an error for an empty query or a failed initial discovery.
pub async fn execute_search(handler: &DocHandler, input: SearchInput) -> HandlerResult<String> {
    let results = handler.search(&input.query).await?;
    Ok(render_search(&input.query, &results))
}

/// Executes the `list_sections` tool: sections grouped by category.
///
/// # Errors
///
/// Returns an error when the initial discovery fails.
pub async fn execute_sections(handler: &DocHandler) -> HandlerResult<String> {
    handler.ensure_loaded().await?;
    let sections = handler.sections().await;
    Ok(render_sections(&sections))
}

fn render_section_line(section: &DocSection) -> String {
    format!("• **{}** - {}", section.title, section.path)
}

/// Renders the discovery enumeration: count, then one line per section with
/// title, path, and category when present.
#[must_use]
pub fn render_discovery(sections: &[DocSection]) -> String {
    let lines: Vec<String> = sections
        .iter()
        .map(|s| match &s.category {
            Some(category) => format!("{} ({category})", render_section_line(s)),
            None => render_section_line(s),
        })
        .collect();

    format!(
        "Discovered {} documentation sections:\n\n{}",
        sections.len(),
        lines.join("\n")
    )
}

/// Renders the grouped section listing. Categories appear in first-seen
/// order of the (sorted) section set; members keep their sorted positions.
#[must_use]
pub fn render_sections(sections: &[DocSection]) -> String {
    if sections.is_empty() {
        return "No documentation sections discovered. Try running discover_docs first."
            .to_string();
    }

    let mut groups: Vec<(&str, Vec<&DocSection>)> = Vec::new();
    for section in sections {
        let category = section.category.as_deref().unwrap_or(OTHER_CATEGORY);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(section),
            None => groups.push((category, vec![section])),
        }
    }

    let body: Vec<String> = groups
        .iter()
        .map(|(category, members)| {
            let lines: Vec<String> = members.iter().map(|s| render_section_line(s)).collect();
            format!("## {category}\n{}", lines.join("\n"))
        })
        .collect();

    format!(
        "Available documentation sections ({} total):\n\n{}",
        sections.len(),
        body.join("\n\n")
    )
}

/// Renders search matches, or an explicit no-results message.
#[must_use]
pub fn render_search(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No results found for \"{query}\"");
    }

    let entries: Vec<String> = results
        .iter()
        .map(|r| {
            let category = r
                .category
                .as_deref()
                .map(|c| format!(" [{c}]"))
                .unwrap_or_default();
            format!("**{}** ({}){category}\n{}\n", r.title, r.path, r.snippet)
        })
        .collect();

    format!(
        "Found {} results for \"{query}\":\n\n{}",
        results.len(),
        entries.join("\n")
    )
}
