//! Common test utilities for tambo-docs-mcp integration tests.
//!
//! Provides `TestSite`, a mockito-backed stand-in for the documentation
//! website, wired to a `DocHandler` instance.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use mockito::{Mock, ServerGuard};
use std::sync::Arc;
use std::time::Duration;
use tambo_docs_mcp::DocHandler;

/// A mock documentation site plus a handler pointed at it.
pub struct TestSite {
    pub server: ServerGuard,
    pub handler: Arc<DocHandler>,
}

impl TestSite {
    /// Spawns a mock site and a handler with the default cache window.
    pub async fn new() -> Self {
        let server = mockito::Server::new_async().await;
        let handler = Arc::new(DocHandler::new(server.url()));
        Self { server, handler }
    }

    /// Spawns a mock site with an overridden cache freshness window.
    pub async fn with_cache_ttl(ttl: Duration) -> Self {
        let server = mockito::Server::new_async().await;
        let handler = Arc::new(DocHandler::new(server.url()).with_cache_ttl(ttl));
        Self { server, handler }
    }

    /// Mounts the landing page at `/` with the given HTML.
    pub async fn mock_landing(&mut self, html: &str) -> Mock {
        self.server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(html)
            .create_async()
            .await
    }

    /// Mounts a documentation page at `path`.
    pub async fn mock_page(&mut self, path: &str, html: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(html)
            .create_async()
            .await
    }

    /// Mounts a documentation page expected to be hit exactly `hits` times.
    pub async fn mock_page_n(&mut self, path: &str, html: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(html)
            .expect(hits)
            .create_async()
            .await
    }

    /// Mounts an error response at `path`.
    pub async fn mock_error(&mut self, path: &str, status: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_body("Error")
            .create_async()
            .await
    }

    /// Mounts an error response expected to be hit exactly `hits` times.
    pub async fn mock_error_n(&mut self, path: &str, status: usize, hits: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_body("Error")
            .expect(hits)
            .create_async()
            .await
    }
}

/// Builds a landing page from `(href, anchor text)` pairs.
pub fn landing_html(links: &[(&str, &str)]) -> String {
    let anchors: Vec<String> = links
        .iter()
        .map(|(href, text)| format!(r#"<li><a href="{href}">{text}</a></li>"#))
        .collect();
    format!(
        "<html><head><title>Docs</title></head><body><nav><ul>{}</ul></nav></body></html>",
        anchors.join("\n")
    )
}

/// Builds a documentation page with an `<h1>` title and `<main>` body.
pub fn doc_html(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{title} | Docs</title></head>\
         <body><h1>{title}</h1><main><p>{body}</p></main></body></html>"
    )
}
