//! Listing-page boundary types
//!
//! The crawler drives page fetches through the [`PageFetcher`] capability.
//! The contract at this boundary is normative: a fetch must return quickly
//! on failure, must never panic or error past the boundary, and surfaces
//! any failure — network error, malformed page, deauthenticated session —
//! as `authenticated = false` with no links. The crawler treats that as an
//! empty page and lets the convergence check terminate the loop.

use async_trait::async_trait;

/// Result of fetching one page of a paginated listing
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Raw link strings extracted from the page, in document order
    pub links: Vec<String>,

    /// Whether the session was authenticated when the page was served
    pub authenticated: bool,
}

impl ListingPage {
    /// A successfully fetched page with the given links
    #[must_use]
    pub fn new(links: Vec<String>) -> Self {
        Self {
            links,
            authenticated: true,
        }
    }

    /// The page every failure collapses to: no links, not authenticated
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            links: Vec::new(),
            authenticated: false,
        }
    }
}

/// Page-fetch capability supplied per service.
///
/// Implementations carry mutable session/cookie state that is not safe for
/// concurrent use; one instance is exclusively owned by one crawler
/// invocation at a time. Retry policy, if any, lives behind this boundary —
/// the crawler never retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one listing page. Never fails: any error collapses to
    /// [`ListingPage::unauthenticated`].
    async fn fetch_listing_page(&self, url: &str) -> ListingPage;
}
