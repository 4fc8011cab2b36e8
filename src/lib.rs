//! Craigslist search, listing detail and reference-data lookups.
//!
//! [`scrapers::CraigslistScraper`] is the entry point; [`tools`] exposes the
//! same operations as JSON tool calls.

pub mod config;
pub mod error;
pub mod models;
pub mod reference;
pub mod scrapers;
pub mod tools;

pub use error::{Result, ScoutError};
pub use scrapers::{CraigslistScraper, HttpFetcher, PageFetcher, SearchParams};
