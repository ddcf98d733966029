//! MCP tool implementations.

mod docs;

pub use docs::{
    execute_discover, execute_fetch, execute_search, execute_sections, render_discovery,
    render_search, render_sections, FetchInput, SearchInput,
};
