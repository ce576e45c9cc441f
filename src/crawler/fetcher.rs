//! HTTP page fetcher
//!
//! A [`PageFetcher`] backed by reqwest with a cookie store, so one fetcher
//! instance carries one session. The fetcher extracts every anchor href
//! from the page, resolves it against the request URL, and decides the
//! authentication state by looking for the service's authenticated-page
//! marker (typically the logout link, which hosts only render for a live
//! session).
//!
//! Per the boundary contract, nothing here errors past the trait: any
//! failure collapses to an unauthenticated empty page and is logged.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::CrawlerConfig;
use crate::crawler::page::{ListingPage, PageFetcher};
use crate::service::ServiceProfile;
use crate::utils::error::FetchError;

/// Session-owning HTTP fetcher for one service
pub struct HttpPageFetcher {
    /// HTTP client with cookie store; mutable session state lives here,
    /// which is why one fetcher belongs to one crawler invocation
    client: Client,

    /// Substring present on pages served to an authenticated session
    auth_marker: String,
}

impl HttpPageFetcher {
    /// Create a fetcher from crawler configuration and a service profile
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &CrawlerConfig, profile: &ServiceProfile) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(config.enable_cookies)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            auth_marker: profile.auth_marker.clone(),
        })
    }

    /// Create a fetcher with default settings and an explicit marker,
    /// mainly for tests against a mock server
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_auth_marker(auth_marker: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            auth_marker: auth_marker.to_string(),
        })
    }

    /// Fetch and parse one listing page, with errors still visible
    async fn try_fetch(&self, url: &str) -> Result<ListingPage, FetchError> {
        let base = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let response = self.client.get(base.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let authenticated = body.contains(&self.auth_marker);
        let links = extract_links(&body, &base);

        Ok(ListingPage {
            links,
            authenticated,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_listing_page(&self, url: &str) -> ListingPage {
        match self.try_fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(url, error = %e, "listing fetch failed, treating as unauthenticated empty page");
                ListingPage::unauthenticated()
            }
        }
    }
}

/// Extract anchor hrefs from a page, resolved absolute against the request
/// URL, deduplicated, in document order
fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let absolute = match base.join(href) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            };
            if seen.insert(absolute.clone()) {
                links.push(absolute);
            }
        }
    }

    links
}
