use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compact listing record recovered from a search-results page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingSummary {
    pub title: String,
    pub url: String,
    /// Raw currency text as shown on the page, e.g. "$1,200"
    pub price: Option<String>,
    pub neighborhood: Option<String>,
    pub date: Option<String>,
    pub thumbnail: Option<String>,
}

/// Full record recovered from a single listing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingDetail {
    pub url: String,
    pub title: String,
    pub price: Option<String>,
    pub description: Option<String>,
    /// Lower-cased attribute label -> value, in document order
    pub attributes: Option<IndexMap<String, String>>,
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub posted: Option<String>,
    pub images: Option<Vec<String>>,
    pub fetched_at: DateTime<Utc>,
}

/// Envelope returned by a successful search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub location: String,
    pub location_name: String,
    pub category: String,
    pub category_name: String,
    /// Canonical first-page search URL
    pub url: String,
    pub result_count: usize,
    pub results: Vec<ListingSummary>,
    pub fetched_at: DateTime<Utc>,
}

/// A code/display-name pair from one of the reference tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeName {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationList {
    pub total: usize,
    pub locations: Vec<CodeName>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryList {
    pub total: usize,
    pub categories: Vec<CodeName>,
}

/// Structured error returned to callers instead of a result envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
