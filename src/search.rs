use serde::Deserialize;
use url::form_urlencoded;

use crate::config::{DEFAULT_ARXIV_API_BASE, DEFAULT_MAX_RESULTS};

// arXiv query template. The base carries its own trailing `?`.
macro_rules! arxiv_url {
    () => { concat!(
        "{}search_query=all:{}&start=0",
        "&max_results={}&sortBy=relevance&sortOrder=descending"
    ) }
}

const IEEE_XPLORE_SEARCH: &str = "https://ieeexplore.ieee.org/search/searchresult.jsp?queryText=";
const SCIENCEDIRECT_SEARCH: &str = "https://www.sciencedirect.com/search?qs=";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: i32
}

impl SearchRequest {
    pub fn new(query: &str) -> Self {
        SearchRequest {
            query: query.to_string(),
            max_results: DEFAULT_MAX_RESULTS
        }
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Arxiv,
    IeeeXplore,
    #[serde(rename = "sciencedirect")]
    ScienceDirect,
}

impl Endpoint {
    pub fn url(&self, request: &SearchRequest) -> String {
        match self {
            Endpoint::Arxiv => arxiv_url_with_base(
                DEFAULT_ARXIV_API_BASE,
                &request.query,
                request.max_results
            ),
            Endpoint::IeeeXplore => format!("{}{}", IEEE_XPLORE_SEARCH, encode_query(&request.query)),
            Endpoint::ScienceDirect => format!("{}{}", SCIENCEDIRECT_SEARCH, encode_query(&request.query)),
        }
    }
}

/// Builds the arXiv API search URL for `query`.
///
/// `max_results` is rendered as given, zero and negative values included.
pub fn build_search_url(query: &str, max_results: i32) -> String {
    arxiv_url_with_base(DEFAULT_ARXIV_API_BASE, query, max_results)
}

pub fn arxiv_url_with_base(base: &str, query: &str, max_results: i32) -> String {
    format!(arxiv_url!(), base, encode_query(query), max_results)
}

/// Form-encodes a query component: space becomes `+`, everything outside
/// ASCII alphanumerics and `*-._` is percent-escaped.
pub fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}
