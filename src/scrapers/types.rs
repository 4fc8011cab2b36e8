use crate::config::{DEFAULT_CATEGORY, DEFAULT_LOCATION, DEFAULT_MAX_RESULTS, DEFAULT_SORT};
use serde::{Deserialize, Serialize};

/// Search parameters as supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Search keywords
    pub query: String,
    /// Location subdomain, or free text to match against location names
    pub location: String,
    /// Category code
    pub category: String,
    /// Minimum price in dollars
    pub min_price: Option<i64>,
    /// Maximum price in dollars
    pub max_price: Option<i64>,
    /// One of the sort option keys; anything else is ignored
    pub sort_by: String,
    /// Only listings with pictures
    pub has_image: bool,
    /// Only listings posted today
    pub posted_today: bool,
    /// Collapse duplicate postings
    pub bundle_duplicates: bool,
    /// Radius in miles around `postal_code`
    pub search_distance: Option<u32>,
    /// ZIP/postal code the radius is centred on
    pub postal_code: Option<String>,
    /// Number of results to return
    pub max_results: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            min_price: None,
            max_price: None,
            sort_by: DEFAULT_SORT.to_string(),
            has_image: false,
            posted_today: false,
            bundle_duplicates: true,
            search_distance: None,
            postal_code: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
