//! galsync - Incremental Gallery Archive Synchronizer
//!
//! Periodically harvests an artist's published work listing from a
//! paginated, session-gated gallery host and determines which entries are
//! new relative to a locally held archive, without re-fetching content
//! already known to exist.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - The incremental crawl engine and page-fetch capability
//! - [`matcher`] - Canonical identifier matching against the archive
//! - [`registry`] - Per-service author registry with a flat text store
//! - [`service`] - Hosting-service profiles (hosts as data, not subtypes)
//! - [`models`] - Core data structures and types
//! - [`utils`] - Alpha-numeric ordering and common helpers
//!
//! # Example
//!
//! ```no_run
//! use galsync::crawler::{HttpPageFetcher, IncrementalCrawler};
//! use galsync::config::Config;
//! use galsync::matcher::ItemMatcher;
//! use galsync::models::{Area, CrawlPolicy};
//! use galsync::service::ServiceProfile;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let profile = ServiceProfile::fur_affinity();
//!     let matcher = ItemMatcher::build_index(&profile, ["1234567", "88001.journal"]);
//!     let fetcher = HttpPageFetcher::new(&config.crawler, &profile)?;
//!     let crawler = IncrementalCrawler::new(profile, fetcher, matcher);
//!     let result = crawler.crawl("fox", Area::Gallery, CrawlPolicy::NewOnly).await;
//!     println!("{} new items found", result.new_count());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod matcher;
pub mod models;
pub mod registry;
pub mod service;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{CancelFlag, HttpPageFetcher, IncrementalCrawler, ListingPage, PageFetcher};
    pub use crate::error::{Error, Result};
    pub use crate::matcher::ItemMatcher;
    pub use crate::models::{Area, CrawlOutcome, CrawlPolicy, CrawlResult};
    pub use crate::registry::AuthorRegistry;
    pub use crate::service::ServiceProfile;
}

// Direct re-exports for convenience
pub use models::{Area, CrawlOutcome, CrawlPolicy, CrawlResult};
