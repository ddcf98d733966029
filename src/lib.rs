//! tambo-docs-mcp: MCP server for documentation retrieval.
//!
//! This library crawls a fixed documentation website, extracts readable text
//! from its pages, and exposes the corpus to LLM hosts as four MCP tools.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Router                   │
//! │  discover_docs, list_sections,              │
//! │  fetch_docs, search_docs                    │
//! └─────────────────┬───────────────────────────┘
//! ┌─────────────────▼───────────────────────────┐
//! │             Document Handler                │
//! │   section index · 10-minute fetch cache     │
//! └───────┬─────────────────────┬───────────────┘
//!    ┌────▼─────┐         ┌─────▼─────┐
//!    │ reqwest  │         │  scraper  │
//!    │ HTTP GET │         │ HTML→text │
//!    └──────────┘         └───────────┘
//! ```
//!
//! The handler owns all mutable state (no globals), so independent handler
//! instances — one per test, for example — never interfere.

pub mod error;
pub mod server;
pub mod services;
pub mod tools;
pub mod types;

pub use error::{FetchError, HandlerError, HandlerResult};
pub use server::DocsServer;
pub use services::DocHandler;
pub use types::{CacheEntry, DocSection, SearchResult};

/// The documentation site served by default.
pub const DEFAULT_SITE_ROOT: &str = "https://docs.tambo.co";
