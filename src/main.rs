//! tambo-docs-mcp: MCP server for documentation retrieval.
//!
//! Usage:
//!   tambo-docs-mcp --mcp                  # Start MCP server on stdio
//!   tambo-docs-mcp discover              # Crawl and list discovered paths
//!   tambo-docs-mcp fetch <path>          # Fetch one page as plain text
//!   tambo-docs-mcp search <query>        # Search discovered pages
//!   tambo-docs-mcp sections              # List sections grouped by category

use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use std::sync::Arc;
use tambo_docs_mcp::server::DocsServer;
use tambo_docs_mcp::services::DocHandler;
use tambo_docs_mcp::{tools, DEFAULT_SITE_ROOT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tambo-docs-mcp")]
#[command(about = "MCP server for documentation discovery, fetching, and search")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Documentation site root to target
    #[arg(long, default_value = DEFAULT_SITE_ROOT)]
    site_root: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the landing page and list discovered documentation paths
    Discover,

    /// Fetch one documentation page as plain text
    Fetch {
        /// Documentation path, e.g. /concepts/components
        path: String,
    },

    /// Search discovered pages for a term
    Search {
        /// Search query
        query: String,
    },

    /// List discovered sections grouped by category
    Sections,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tambo_docs_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.mcp {
        run_mcp_server(cli.site_root).await
    } else if let Some(cmd) = cli.command {
        run_cli(cli.site_root, cmd).await
    } else {
        eprintln!("Use --mcp to start the MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(site_root: String) -> anyhow::Result<()> {
    tracing::info!(site_root, "starting MCP server");

    let server = DocsServer::new(site_root);

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_cli(site_root: String, cmd: Commands) -> anyhow::Result<()> {
    let handler = Arc::new(DocHandler::new(site_root));

    let output = match cmd {
        Commands::Discover => tools::execute_discover(&handler).await?,
        Commands::Fetch { path } => {
            tools::execute_fetch(&handler, tools::FetchInput { path }).await?
        }
        Commands::Search { query } => {
            tools::execute_search(&handler, tools::SearchInput { query }).await?
        }
        Commands::Sections => tools::execute_sections(&handler).await?,
    };

    println!("{output}");
    Ok(())
}
