//! Incremental gallery crawling
//!
//! This module implements the crawl-until-converged engine: repeated
//! listing-page fetches for one author's gallery, scraps or journal feed,
//! link matching against the local archive, and the two completeness
//! policies (new-only and full resync), with cooperative cancellation.

pub mod fetcher;
pub mod incremental;
pub mod page;

pub use fetcher::HttpPageFetcher;
pub use incremental::{CancelFlag, IncrementalCrawler};
pub use page::{ListingPage, PageFetcher};
