use crate::config::{FailurePolicy, SearchConfig};
use crate::error::{Result, ScoutError};
use crate::models::{CategoryList, ListingDetail, ListingSummary, LocationList, SearchResponse};
use crate::reference;
use crate::scrapers::detail::parse_listing_detail;
use crate::scrapers::fetcher::HttpFetcher;
use crate::scrapers::results::parse_search_results;
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::SearchParams;
use crate::scrapers::url_builder::build_search_url;
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Craigslist search and listing lookups over a page fetcher
pub struct CraigslistScraper<F = HttpFetcher> {
    fetcher: F,
    config: SearchConfig,
}

impl CraigslistScraper<HttpFetcher> {
    /// Create a scraper backed by the HTTP fetcher with default settings
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }
}

impl<F: PageFetcher> CraigslistScraper<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::with_config(fetcher, SearchConfig::default())
    }

    pub fn with_config(fetcher: F, config: SearchConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve location and category to table codes.
    ///
    /// Runs before any network access; either failure ends the search.
    fn validate(&self, params: &SearchParams) -> Result<SearchParams> {
        let location = reference::resolve_location(&params.location).ok_or_else(|| {
            ScoutError::UnknownLocation {
                input: params.location.clone(),
            }
        })?;
        let category = reference::resolve_category(&params.category).ok_or_else(|| {
            ScoutError::UnknownCategory {
                input: params.category.clone(),
            }
        })?;

        if !params.location.trim().eq_ignore_ascii_case(location) {
            debug!("Resolved location '{}' to '{}'", params.location, location);
        }

        Ok(SearchParams {
            location: location.to_string(),
            category: category.to_string(),
            max_results: params.max_results.min(self.config.max_results_cap),
            ..params.clone()
        })
    }

    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        self.search_with_cancel(params, &CancellationToken::new())
            .await
    }

    /// Search listings, following result pages until enough are collected.
    ///
    /// Pages are fetched one at a time. The loop stops once `max_results` are
    /// accumulated, on an empty page, or after a page shorter than
    /// `last_page_threshold`. A failed fetch fails the call unless the
    /// failure policy allows returning partial results. Cancellation is
    /// observed before and during each page fetch.
    pub async fn search_with_cancel(
        &self,
        params: &SearchParams,
        cancel: &CancellationToken,
    ) -> Result<SearchResponse> {
        let params = self.validate(params)?;
        let max_results = params.max_results;

        info!(
            "Searching '{}' in {}/{} (up to {} results)",
            params.query, params.location, params.category, max_results
        );

        let mut results: Vec<ListingSummary> = Vec::new();
        let mut offset = 0;

        while results.len() < max_results {
            let url = build_search_url(&params, offset);

            let page = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ScoutError::Cancelled { url: url.clone() }),
                html = self.fetcher.fetch(&url) => html,
            };

            let html = match page {
                Ok(html) => html,
                Err(e @ ScoutError::Cancelled { .. }) => return Err(e),
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::ReturnPartial if !results.is_empty() => {
                        warn!(
                            "Fetch failed at offset {}, returning {} accumulated results: {}",
                            offset,
                            results.len(),
                            e
                        );
                        break;
                    }
                    _ => {
                        warn!("Search aborted at {}: {}", url, e);
                        return Err(e);
                    }
                },
            };

            let page_results = parse_search_results(&html, &params.location);
            let page_len = page_results.len();
            debug!("Offset {} yielded {} results", offset, page_len);

            if page_len == 0 {
                break;
            }

            results.extend(page_results);
            offset += page_len;

            if page_len < self.config.last_page_threshold {
                break;
            }
        }

        results.truncate(max_results);
        info!("Search returned {} results", results.len());

        Ok(SearchResponse {
            query: params.query.clone(),
            location_name: reference::location_name(&params.location)
                .unwrap_or(params.location.as_str())
                .to_string(),
            category_name: reference::category_name(&params.category)
                .unwrap_or(params.category.as_str())
                .to_string(),
            url: build_search_url(&params, 0),
            result_count: results.len(),
            results,
            location: params.location,
            category: params.category,
            fetched_at: Utc::now(),
        })
    }

    /// Fetch and parse a single listing page
    pub async fn get_listing(&self, url: &str) -> Result<ListingDetail> {
        let html = self.fetcher.fetch(url).await?;
        let detail = parse_listing_detail(&html, url);
        debug!(
            "Parsed listing '{}' with {} images",
            detail.title,
            detail.images.as_ref().map_or(0, Vec::len)
        );
        Ok(detail)
    }

    pub fn list_locations(&self, filter_text: Option<&str>) -> LocationList {
        reference::list_locations(filter_text)
    }

    pub fn list_categories(&self) -> CategoryList {
        reference::list_categories()
    }
}
