//! Core services for documentation discovery, fetching, and search.

pub mod extract;
mod handler;

pub use handler::DocHandler;
