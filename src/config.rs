use std::time::Duration;

pub const DEFAULT_LOCATION: &str = "newyork";
pub const DEFAULT_CATEGORY: &str = "sss";
pub const DEFAULT_SORT: &str = "relevant";
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// HTTP settings for the page fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            max_redirects: 10,
        }
    }
}

/// What a search does with already accumulated pages when a later fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fail the whole call and drop earlier pages
    #[default]
    Abort,
    /// Return whatever was accumulated before the failing page
    ReturnPartial,
}

/// Paging behaviour of the search loop
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// A page with fewer results than this is treated as the last one
    pub last_page_threshold: usize,
    /// Upper bound applied to any requested `max_results`
    pub max_results_cap: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            last_page_threshold: 20,
            max_results_cap: 120,
            failure_policy: FailurePolicy::Abort,
        }
    }
}
