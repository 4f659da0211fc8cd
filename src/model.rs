use serde::Deserialize;

use crate::search::{Endpoint, SearchRequest};

// Catalog records. Everything here is static reading-list data.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: u16,
    pub doi: String,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<String>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub label: String,
    pub papers: Vec<Paper>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchLink {
    Literal {
        source: String,
        url: String
    },
    Query {
        source: String,
        endpoint: Endpoint,
        query: String,
        #[serde(default)]
        max_results: Option<i32>
    },
}

impl SearchLink {
    pub fn source(&self) -> &str {
        match self {
            SearchLink::Literal { source, .. } => source,
            SearchLink::Query { source, .. } => source,
        }
    }

    pub fn url(&self) -> String {
        match self {
            SearchLink::Literal { url, .. } => url.clone(),
            SearchLink::Query { endpoint, query, max_results, .. } => {
                let mut request = SearchRequest::new(query);
                if let Some(n) = max_results {
                    request = request.with_max_results(*n);
                }
                endpoint.url(&request)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Tip,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub kind: NoteKind,
    pub text: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edition {
    pub name: String,
    pub banner: String,
    pub heading: String,
    pub categories: Vec<Category>,
    pub links_heading: String,
    pub links: Vec<SearchLink>,
    pub notes_heading: String,
    #[serde(default)]
    pub summary: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Queries used by the arXiv probe. Printed only when `list_terms` is set.
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(default)]
    pub list_terms: bool
}

impl Edition {
    pub fn paper_count(&self) -> usize {
        self.categories.iter().map(|c| c.papers.len()).sum()
    }

    /// Earliest and latest publication year, `None` for an empty edition.
    pub fn year_range(&self) -> Option<(u16, u16)> {
        let mut years = self.categories.iter()
            .flat_map(|c| c.papers.iter().map(|p| p.year));
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(year: u16) -> Paper {
        Paper {
            title: format!("Paper {}", year),
            authors: String::from("Doe, J."),
            journal: String::from("Journal"),
            year,
            doi: String::from("10.0/x"),
            url: String::from("https://example.org"),
            description: String::new(),
            status: None
        }
    }

    fn edition(categories: Vec<Category>) -> Edition {
        Edition {
            name: String::from("test"),
            banner: String::new(),
            heading: String::new(),
            categories,
            links_heading: String::new(),
            links: vec![],
            notes_heading: String::new(),
            summary: true,
            notes: vec![],
            search_terms: vec![],
            list_terms: false
        }
    }

    #[test]
    fn test_counts_and_year_range() {
        let e = edition(vec![
            Category { label: String::from("a"), papers: vec![paper(2023), paper(2021)] },
            Category { label: String::from("b"), papers: vec![paper(2024)] },
        ]);
        assert_eq!(e.paper_count(), 3);
        assert_eq!(e.year_range(), Some((2021, 2024)));
    }

    #[test]
    fn test_empty_year_range() {
        assert_eq!(edition(vec![]).year_range(), None);
    }

    #[test]
    fn test_search_link_variants() {
        let links: Vec<SearchLink> = serde_json::from_str(r#"[
            {"source": "CORE", "url": "https://core.ac.uk/search?q=aviation+weather"},
            {"source": "arXiv", "endpoint": "arxiv", "query": "fog & mist", "max_results": 20},
            {"source": "ScienceDirect", "endpoint": "sciencedirect", "query": "RVR prediction"}
        ]"#).unwrap();

        assert_eq!(links[0].source(), "CORE");
        assert_eq!(links[0].url(), "https://core.ac.uk/search?q=aviation+weather");
        assert_eq!(
            links[1].url(),
            "http://export.arxiv.org/api/query?search_query=all:fog+%26+mist&start=0&max_results=20&sortBy=relevance&sortOrder=descending"
        );
        assert_eq!(links[2].url(), "https://www.sciencedirect.com/search?qs=RVR+prediction");
    }
}
