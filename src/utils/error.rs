//! Error types for the galsync crawler
//!
//! This module defines custom error types used throughout the application.

use thiserror::Error;

/// Errors that can occur inside the HTTP page fetcher.
///
/// None of these ever cross the fetch-capability boundary: the crawler only
/// sees a [`ListingPage`](crate::crawler::ListingPage), and a failed fetch
/// surfaces as an unauthenticated empty page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with a non-success status code
    #[error("Server error: {0}")]
    Status(u16),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
