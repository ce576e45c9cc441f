//! Hosting-service profiles
//!
//! A hosting service is a configuration value, not a subtype: everything the
//! crawler and matcher need to know about one host fits in a
//! [`ServiceProfile`] — URL templates for the three listing areas, the URL
//! fragments that mark gallery and journal links, the archive identifier
//! prefix, and the marker that distinguishes an authenticated page. New
//! hosts are data (deserializable from TOML), not code.

use serde::{Deserialize, Serialize};

use crate::models::Area;

/// Everything site-specific about one gallery host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceProfile {
    /// Canonical service name, lowercase with underscores
    /// (e.g. `"fur_affinity"`); also keys the registry store section
    pub name: String,

    /// Base URL of the host, without trailing slash
    pub base_url: String,

    /// Listing path template for the main gallery,
    /// with `{author}` and `{page}` placeholders
    pub gallery_path: String,

    /// Listing path template for the secondary "scraps" gallery
    pub scraps_path: String,

    /// Listing path template for the journal feed
    pub journals_path: String,

    /// URL fragment that marks a gallery submission link
    pub gallery_fragment: String,

    /// URL fragment that marks a journal entry link
    pub journal_fragment: String,

    /// Prefix carried by archived identifiers for this service
    pub id_prefix: String,

    /// Marker appended to an identifier to distinguish journal-area content
    /// from gallery-area content sharing the same base token
    pub journal_suffix: String,

    /// Substring present on fetched pages only when the session is
    /// authenticated
    pub auth_marker: String,
}

impl ServiceProfile {
    /// Built-in profile for Fur Affinity
    #[must_use]
    pub fn fur_affinity() -> Self {
        Self {
            name: "fur_affinity".to_string(),
            base_url: "https://www.furaffinity.net".to_string(),
            gallery_path: "/gallery/{author}/{page}/".to_string(),
            scraps_path: "/scraps/{author}/{page}/".to_string(),
            journals_path: "/journals/{author}/{page}/".to_string(),
            gallery_fragment: "/view/".to_string(),
            journal_fragment: "/journal/".to_string(),
            id_prefix: "fa.".to_string(),
            journal_suffix: ".journal".to_string(),
            auth_marker: "/logout/".to_string(),
        }
    }

    /// Build the listing URL for one page of an author's area.
    ///
    /// # Examples
    ///
    /// ```
    /// use galsync::models::Area;
    /// use galsync::service::ServiceProfile;
    ///
    /// let profile = ServiceProfile::fur_affinity();
    /// let url = profile.listing_url("fox", Area::Gallery, 2);
    /// assert_eq!(url, "https://www.furaffinity.net/gallery/fox/2/");
    /// ```
    #[must_use]
    pub fn listing_url(&self, author: &str, area: Area, page: u32) -> String {
        let template = match area {
            Area::Gallery => &self.gallery_path,
            Area::Scraps => &self.scraps_path,
            Area::Journals => &self.journals_path,
        };
        let path = template
            .replace("{author}", author)
            .replace("{page}", &page.to_string());
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ServiceProfile {
    fn default() -> Self {
        Self::fur_affinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_per_area() {
        let profile = ServiceProfile::fur_affinity();
        assert_eq!(
            profile.listing_url("fox", Area::Gallery, 1),
            "https://www.furaffinity.net/gallery/fox/1/"
        );
        assert_eq!(
            profile.listing_url("fox", Area::Scraps, 3),
            "https://www.furaffinity.net/scraps/fox/3/"
        );
        assert_eq!(
            profile.listing_url("fox", Area::Journals, 1),
            "https://www.furaffinity.net/journals/fox/1/"
        );
    }

    #[test]
    fn test_profile_deserializes_from_toml() {
        let toml = r#"
            name = "art_host"
            base_url = "https://art.example"
            gallery_path = "/g/{author}/{page}"
            scraps_path = "/s/{author}/{page}"
            journals_path = "/j/{author}/{page}"
            gallery_fragment = "/work/"
            journal_fragment = "/diary/"
            id_prefix = "ah."
            journal_suffix = ".journal"
            auth_marker = "sign out"
        "#;
        let profile: ServiceProfile = toml::from_str(toml).unwrap();
        assert_eq!(profile.name, "art_host");
        assert_eq!(
            profile.listing_url("vix", Area::Gallery, 4),
            "https://art.example/g/vix/4"
        );
    }
}
