//! Error taxonomy for listing lookups.
//!
//! Validation failures never touch the network. Fetch failures abort the call
//! and carry the URL that failed. Per-node parse failures are not errors at
//! this level; see [`crate::scrapers::results::NodeSkip`].

use crate::models::ErrorPayload;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Debug, Error)]
pub enum ScoutError {
    /// Location code matched neither exactly nor by substring
    #[error("Unknown location: '{input}'. Use list_locations to see valid options.")]
    UnknownLocation { input: String },

    /// Category code is not in the category table
    #[error("Unknown category: '{input}'. Use list_categories to see valid options.")]
    UnknownCategory { input: String },

    /// Connection, DNS, timeout or body read failure
    #[error("Request failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-2xx status
    #[error("HTTP error {status}: {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    /// Search was cancelled between page fetches
    #[error("Search cancelled before fetching {url}")]
    Cancelled { url: String },

    #[error("Unknown tool: '{name}'")]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

impl ScoutError {
    /// Hint shown alongside validation errors
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownLocation { .. } => {
                Some("Try a location like 'newyork', 'losangeles', 'chicago', 'seattle', etc.")
            }
            Self::UnknownCategory { .. } => {
                Some("Try 'sss' (All For Sale), 'mca' (Motorcycles), 'cta' (Cars & Trucks), etc.")
            }
            _ => None,
        }
    }

    /// URL involved in a failed fetch, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. } | Self::HttpStatus { url, .. } | Self::Cancelled { url } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            suggestion: self.suggestion().map(str::to_string),
            url: self.url().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_payload_has_suggestion_but_no_url() {
        let payload = ScoutError::UnknownLocation {
            input: "NYC".to_string(),
        }
        .to_payload();

        assert_eq!(
            payload.error,
            "Unknown location: 'NYC'. Use list_locations to see valid options."
        );
        assert!(payload.suggestion.is_some());
        assert!(payload.url.is_none());
    }

    #[test]
    fn status_payload_carries_url_and_reason() {
        let payload = ScoutError::HttpStatus {
            url: "https://newyork.craigslist.org/search/sss".to_string(),
            status: 403,
            reason: "Forbidden".to_string(),
        }
        .to_payload();

        assert_eq!(payload.error, "HTTP error 403: Forbidden");
        assert_eq!(
            payload.url.as_deref(),
            Some("https://newyork.craigslist.org/search/sss")
        );
        assert!(payload.suggestion.is_none());
    }
}
