// Core data structures for the galsync crawler

use serde::{Deserialize, Serialize};

/// Listing area of an author's hosted content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    /// Main media gallery
    Gallery,
    /// Secondary "scraps" gallery
    Scraps,
    /// Journal feed
    Journals,
}

impl Area {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Scraps => "scraps",
            Self::Journals => "journals",
        }
    }

    /// Create from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gallery" => Some(Self::Gallery),
            "scraps" => Some(Self::Scraps),
            "journals" | "journal" => Some(Self::Journals),
            _ => None,
        }
    }

    /// Get all areas, in crawl order
    pub fn all() -> Vec<Self> {
        vec![Self::Gallery, Self::Scraps, Self::Journals]
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown area: {s} (expected gallery, scraps or journals)"))
    }
}

/// Completeness policy for one crawl invocation
///
/// New-only assumes the listing is time-ordered: once a page contributes no
/// undiscovered link, everything behind it is already archived. Full resync
/// drops that assumption and keeps paging as long as *any* previously-unseen
/// link appears, archived or not, which catches gaps anywhere in the listing
/// at the cost of visiting it whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlPolicy {
    /// Stop once a page contributes no undiscovered link
    NewOnly,
    /// Stop only once no page contributes any previously-unseen link at all
    FullResync,
}

impl std::fmt::Display for CrawlPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewOnly => write!(f, "new-only"),
            Self::FullResync => write!(f, "full-resync"),
        }
    }
}

/// How a crawl invocation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrawlOutcome {
    /// The active policy observed a page that contributed nothing new
    Converged,
    /// The cancellation flag was observed; accumulated results are partial
    /// but valid
    Cancelled,
}

impl std::fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of one crawl invocation over an (author, area) pair
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// Links not present in the archive, in first-seen order
    pub new_links: Vec<String>,

    /// Total count of distinct links observed across all pages visited
    pub total_seen: usize,

    /// Number of pages whose fetch completed
    pub pages_visited: u32,

    /// Completion state
    pub outcome: CrawlOutcome,
}

impl CrawlResult {
    /// Get count of new links
    pub fn new_count(&self) -> usize {
        self.new_links.len()
    }

    /// Whether the crawl was cancelled before convergence
    pub fn is_cancelled(&self) -> bool {
        self.outcome == CrawlOutcome::Cancelled
    }
}
