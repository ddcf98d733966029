//! MCP server implementation using rmcp.

use crate::error::HandlerError;
use crate::services::DocHandler;
use crate::tools::{self, FetchInput, SearchInput};
use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{tool, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

/// Normalizes a handler outcome into a structured tool result.
///
/// The host never receives a raw fault: failures become error-flagged
/// results carrying the failure's message as text.
fn to_tool_result(result: Result<String, HandlerError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => CallToolResult::error(vec![Content::text(format!("Error: {err}"))]),
    }
}

/// MCP server exposing the four documentation tools.
#[derive(Clone)]
pub struct DocsServer {
    handler: Arc<DocHandler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocsServer {
    /// Creates a server targeting `site_root`.
    #[must_use]
    pub fn new(site_root: impl Into<String>) -> Self {
        Self::with_handler(Arc::new(DocHandler::new(site_root)))
    }

    /// Creates a server around an existing handler (shared with tests or the
    /// CLI).
    #[must_use]
    pub fn with_handler(handler: Arc<DocHandler>) -> Self {
        Self {
            handler,
            tool_router: Self::tool_router(),
        }
    }

    /// The document handler backing this server.
    #[must_use]
    pub fn handler(&self) -> &Arc<DocHandler> {
        &self.handler
    }

    /// Declared tool schemas, in declaration order.
    #[must_use]
    pub fn list_tool_schemas(&self) -> Vec<rmcp::model::Tool> {
        self.tool_router.list_all()
    }

    #[tool(description = "Fetch documentation content from the docs site")]
    async fn fetch_docs(
        &self,
        Parameters(input): Parameters<FetchInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(
            tools::execute_fetch(&self.handler, input).await,
        ))
    }

    #[tool(description = "Search for documentation pages containing specific terms")]
    async fn search_docs(
        &self,
        Parameters(input): Parameters<SearchInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(
            tools::execute_search(&self.handler, input).await,
        ))
    }

    #[tool(description = "Dynamically discover and list all available documentation sections")]
    async fn list_sections(&self) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(tools::execute_sections(&self.handler).await))
    }

    #[tool(description = "Crawl the main docs page to discover all available documentation paths")]
    async fn discover_docs(&self) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(tools::execute_discover(&self.handler).await))
    }
}

impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!(
            "tambo-docs-mcp: documentation retrieval for {}.\n\n\
             WORKFLOW:\n\
             1. discover_docs -> build the section index\n\
             2. list_sections -> browse sections by category\n\
             3. search_docs -> find pages containing a term\n\
             4. fetch_docs -> read one page as plain text\n\n\
             search_docs and list_sections run discovery automatically on \
             first use; fetched pages are cached for 10 minutes.",
            self.handler.site_root()
        );

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tambo-docs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Tambo Documentation MCP Server".to_string()),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }
}
