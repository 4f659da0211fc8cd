pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod report;
pub mod search;

pub use search::{build_search_url, Endpoint, SearchRequest};
