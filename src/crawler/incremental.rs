//! Incremental crawl engine
//!
//! Walks one (author, area) listing page by page until no new information
//! appears under the active completeness policy, passing every link through
//! the archived-item matcher and accumulating the ones not yet archived.
//!
//! The crawl runs on a single logical worker: page fetches are strictly
//! sequential within one invocation because the fetch capability carries
//! mutable session state. Cancellation is cooperative — the flag is polled
//! before every page fetch and before every link, so latency stays around
//! one link-processing step and partial results remain valid.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::crawler::page::PageFetcher;
use crate::matcher::ItemMatcher;
use crate::models::{Area, CrawlOutcome, CrawlPolicy, CrawlResult};
use crate::service::ServiceProfile;

/// Shared cancellation flag, set by the controlling thread and polled by
/// the crawl loop
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a fresh, unset flag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Crawler for one service, owning its fetch capability
///
/// Owning the fetcher enforces the session discipline: concurrent crawls
/// need independent fetcher instances, and therefore independent crawlers.
pub struct IncrementalCrawler<F: PageFetcher> {
    profile: ServiceProfile,
    fetcher: F,
    matcher: ItemMatcher,
    cancel: CancelFlag,
}

impl<F: PageFetcher> IncrementalCrawler<F> {
    /// Create a crawler over a service profile, a fetch capability and a
    /// pre-built archived-item index
    #[must_use]
    pub fn new(profile: ServiceProfile, fetcher: F, matcher: ItemMatcher) -> Self {
        Self {
            profile,
            fetcher,
            matcher,
            cancel: CancelFlag::new(),
        }
    }

    /// Create a crawler polling a caller-supplied cancellation flag
    #[must_use]
    pub fn with_cancel_flag(
        profile: ServiceProfile,
        fetcher: F,
        matcher: ItemMatcher,
        cancel: CancelFlag,
    ) -> Self {
        Self {
            profile,
            fetcher,
            matcher,
            cancel,
        }
    }

    /// Handle to this crawler's cancellation flag
    #[must_use]
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Crawl one author's area until convergence or cancellation.
    ///
    /// Pages are fetched starting at 1 and the loop exits once an iteration
    /// contributes no new undiscovered link — unless the policy is
    /// [`CrawlPolicy::FullResync`], which keeps paging as long as *any*
    /// previously-unseen link appears, archived or not. An unauthenticated
    /// or failed fetch counts as an empty page, so a dead session drives
    /// the loop to convergence instead of an error.
    pub async fn crawl(&self, author: &str, area: Area, policy: CrawlPolicy) -> CrawlResult {
        let mut all_seen: HashSet<String> = HashSet::new();
        let mut new_links: Vec<String> = Vec::new();
        let mut page: u32 = 1;
        let mut pages_visited: u32 = 0;
        let mut previous_new: Option<usize> = None;

        tracing::info!(author, area = %area, policy = %policy, "starting crawl");

        'paging: while !self.cancel.is_cancelled() && previous_new != Some(new_links.len()) {
            previous_new = Some(new_links.len());
            let previous_all = all_seen.len();

            let url = self.profile.listing_url(author, area, page);
            tracing::debug!(page, url = %url, "fetching listing page");

            let listing = self.fetcher.fetch_listing_page(&url).await;
            pages_visited += 1;

            if !listing.authenticated {
                tracing::debug!(page, "not authenticated, treating as empty page");
            } else {
                for link in listing.links {
                    if self.cancel.is_cancelled() {
                        break 'paging;
                    }
                    if area == Area::Journals && !link.contains(&self.profile.journal_fragment) {
                        continue;
                    }
                    if !all_seen.contains(&link) {
                        all_seen.insert(link.clone());
                    }
                    if !self.matcher.is_archived(&link) && !new_links.contains(&link) {
                        new_links.push(link);
                    }
                }
            }

            tracing::debug!(
                page,
                new = new_links.len(),
                total = all_seen.len(),
                "processed listing page"
            );

            // A full resync must keep paging as long as any new link at all
            // appeared, not just undiscovered ones
            if policy == CrawlPolicy::FullResync && all_seen.len() != previous_all {
                previous_new = None;
            }

            page += 1;
        }

        let outcome = if self.cancel.is_cancelled() {
            CrawlOutcome::Cancelled
        } else {
            CrawlOutcome::Converged
        };

        tracing::info!(
            author,
            area = %area,
            new = new_links.len(),
            total = all_seen.len(),
            pages = pages_visited,
            outcome = %outcome,
            "crawl finished"
        );

        CrawlResult {
            new_links,
            total_seen: all_seen.len(),
            pages_visited,
            outcome,
        }
    }
}
