use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::{
    config::ArxivConfig,
    error::FetchError,
    search::{arxiv_url_with_base, SearchRequest}
};

#[derive(Debug)]
pub struct ArxivClient {
    client: Client,
    config: ArxivConfig
}

impl ArxivClient {
    pub fn new(config: ArxivConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ArxivConfig) -> Self {
        ArxivClient {
            client,
            config
        }
    }

    pub fn create_query_url(&self, request: &SearchRequest) -> String {
        arxiv_url_with_base(&self.config.base_url, &request.query, request.max_results)
    }

    /// Single GET, no retry. Any non-2xx status is an error.
    pub fn fetch(&self, request: &SearchRequest) -> Result<String, FetchError> {
        let url = self.create_query_url(request);
        debug!(%url, "fetching arXiv results");
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NonSuccessStatus(status));
        }
        Ok(response.text()?)
    }

    /// Fetches and swallows any failure after logging it.
    pub fn search(&self, request: &SearchRequest) -> Option<String> {
        match self.fetch(request) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(query = %request.query, error = %e, "error searching arXiv");
                None
            }
        }
    }

    /// Fetches each term once and drops the bodies. Returns how many answered.
    pub fn probe(&self, terms: &[String], max_results: i32) -> usize {
        terms.iter()
            .filter(|term| {
                let request = SearchRequest::new(term).with_max_results(max_results);
                match self.search(&request) {
                    Some(body) => {
                        info!(query = %term, bytes = body.len(), "arXiv responded");
                        true
                    }
                    None => false,
                }
            })
            .count()
    }
}
