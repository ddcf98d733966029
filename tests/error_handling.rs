//! Sad path tests: invalid arguments, HTTP failures, discovery failures,
//! and search failure isolation.

mod common;

use common::{doc_html, landing_html, TestSite};
use mockito::Matcher;
use tambo_docs_mcp::tools::{execute_search, SearchInput};
use tambo_docs_mcp::{FetchError, HandlerError};

#[tokio::test]
async fn test_empty_path_fails_before_any_network_call() {
    let mut site = TestSite::new().await;
    let any = site
        .server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let err = site.handler.fetch("").await.unwrap_err();

    assert!(matches!(err, HandlerError::InvalidArgument { name: "path" }));
    any.assert_async().await;
}

#[tokio::test]
async fn test_empty_query_fails_before_any_network_call() {
    let mut site = TestSite::new().await;
    let any = site
        .server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let err = site.handler.search("").await.unwrap_err();

    assert!(matches!(
        err,
        HandlerError::InvalidArgument { name: "query" }
    ));
    any.assert_async().await;
}

#[tokio::test]
async fn test_fetch_surfaces_http_status() {
    let mut site = TestSite::new().await;
    site.mock_error("/docs/missing", 404).await;

    let err = site.handler.fetch("/docs/missing").await.unwrap_err();

    match err {
        HandlerError::Fetch(FetchError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/docs/missing"));
        }
        other => panic!("expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn test_discovery_failure_is_retryable_and_nondestructive() {
    let mut site = TestSite::new().await;
    let good = site
        .mock_landing(&landing_html(&[("/docs/intro", "Intro")]))
        .await;

    site.handler.discover().await.unwrap();
    assert_eq!(site.handler.sections().await.len(), 1);

    good.remove_async().await;
    site.mock_error("/", 503).await;

    let err = site.handler.discover().await.unwrap_err();
    assert_eq!(err.code(), "DISCOVERY_ERROR");

    // The failed run left the previously discovered set untouched.
    let sections = site.handler.sections().await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].path, "/docs/intro");
}

#[tokio::test]
async fn test_search_propagates_initial_discovery_failure() {
    let mut site = TestSite::new().await;
    site.mock_error("/", 500).await;

    let err = site.handler.search("anything").await.unwrap_err();

    assert!(matches!(err, HandlerError::Discovery(_)));
}

#[tokio::test]
async fn test_search_isolates_per_candidate_failures() {
    let mut site = TestSite::new().await;
    site.mock_landing(&landing_html(&[
        ("/docs/broken", "Broken"),
        ("/docs/working", "Working"),
    ]))
    .await;
    site.mock_error("/docs/broken", 500).await;
    site.mock_page("/docs/working", &doc_html("Working", "the elusive term"))
        .await;

    let out = execute_search(
        &site.handler,
        SearchInput {
            query: "elusive".into(),
        },
    )
    .await
    .unwrap();

    assert!(out.starts_with("Found 1 results"));
    assert!(out.contains("/docs/working"));
    assert!(!out.contains("/docs/broken"));
}

#[tokio::test]
async fn test_search_falls_back_to_known_paths_when_index_empty() {
    let mut site = TestSite::new().await;
    // Landing page with no documentation links: discovery succeeds with an
    // empty set, so search tries the fixed well-known paths.
    site.mock_landing(&landing_html(&[("/pricing", "Pricing")]))
        .await;
    let quickstart = site
        .mock_page(
            "/getting-started/quickstart",
            &doc_html("Quickstart", "install the sdk first"),
        )
        .await;
    site.mock_error("/concepts/components", 404).await;
    site.mock_error("/api-reference/react-hooks", 404).await;

    let results = site.handler.search("sdk").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, "/getting-started/quickstart");
    assert_eq!(results[0].title, "Quickstart");
    // Fallback entries carry no category, so the hit renders without a tag.
    assert_eq!(results[0].category, None);
    quickstart.assert_async().await;
}
