pub mod craigslist;
pub mod detail;
mod dom;
pub mod fetcher;
pub mod results;
pub mod traits;
pub mod types;
pub mod url_builder;

pub use craigslist::CraigslistScraper;
pub use fetcher::HttpFetcher;
pub use traits::PageFetcher;
pub use types::SearchParams;
