//! Downloaded-item matching
//!
//! Given a listing-page link, decide whether the work it points at is
//! already in the local archive. The crux is canonicalization: links and
//! archived entries must normalize to the same identifier token, or the
//! crawler re-downloads work it already has (or worse, skips work it
//! doesn't).

use std::collections::HashSet;

use crate::service::ServiceProfile;

/// Membership tester over the set of already-archived identifiers
#[derive(Debug, Clone)]
pub struct ItemMatcher {
    /// Canonical identifiers of every archived work
    archived: HashSet<String>,

    gallery_fragment: String,
    journal_fragment: String,
    journal_suffix: String,
    id_prefix: String,
}

impl ItemMatcher {
    /// Create a matcher with an empty index
    #[must_use]
    pub fn new(profile: &ServiceProfile) -> Self {
        Self {
            archived: HashSet::new(),
            gallery_fragment: profile.gallery_fragment.clone(),
            journal_fragment: profile.journal_fragment.clone(),
            journal_suffix: profile.journal_suffix.clone(),
            id_prefix: profile.id_prefix.clone(),
        }
    }

    /// Build the index from already-archived entry names.
    ///
    /// Each entry is reduced to its canonical identifier: the service's
    /// identifier prefix is stripped, and a part sub-index (`-2` for part 2
    /// of a post) is truncated at the first hyphen. A journal entry keeps
    /// its journal suffix, applied after the truncation, so index entries
    /// and canonicalized links always agree.
    #[must_use]
    pub fn build_index<I, S>(profile: &ServiceProfile, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::new(profile);
        for entry in entries {
            let id = matcher.canonical_entry(entry.as_ref());
            if !id.is_empty() {
                matcher.archived.insert(id);
            }
        }
        tracing::debug!(
            service = %profile.name,
            indexed = matcher.archived.len(),
            "built archived-item index"
        );
        matcher
    }

    /// Test whether a listing-page link points at an archived work.
    ///
    /// Canonicalization: strip trailing path separators, take the final
    /// path segment, truncate it at the first hyphen, and append the
    /// journal suffix when the link path belongs to the journal area.
    ///
    /// A link whose path matches neither the gallery nor the journal
    /// fragment reports **archived**: unrecognized link shapes (navigation,
    /// avatars, off-site links swept up by the page scrape) are
    /// conservatively skipped rather than re-downloaded. Deliberate
    /// least-surprise default; do not "fix" it into re-downloading.
    #[must_use]
    pub fn is_archived(&self, link: &str) -> bool {
        let from_gallery = link.contains(&self.gallery_fragment);
        let from_journal = link.contains(&self.journal_fragment);
        if !from_gallery && !from_journal {
            return true;
        }

        let trimmed = link.trim_end_matches('/');
        let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
        let segment = segment.split('-').next().unwrap_or(segment);

        if from_journal {
            self.archived
                .contains(&format!("{segment}{}", self.journal_suffix))
        } else {
            self.archived.contains(segment)
        }
    }

    /// Number of indexed identifiers
    #[must_use]
    pub fn index_len(&self) -> usize {
        self.archived.len()
    }

    /// Reduce an archive entry name to its canonical identifier
    fn canonical_entry(&self, entry: &str) -> String {
        let entry = entry.trim();
        let entry = entry.strip_prefix(&self.id_prefix).unwrap_or(entry);
        let (base, is_journal) = match entry.strip_suffix(&self.journal_suffix) {
            Some(base) => (base, true),
            None => (entry, false),
        };
        let base = base.split('-').next().unwrap_or(base);
        if is_journal {
            format!("{base}{}", self.journal_suffix)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_with(entries: &[&str]) -> ItemMatcher {
        ItemMatcher::build_index(&ServiceProfile::fur_affinity(), entries.iter().copied())
    }

    #[test]
    fn test_gallery_link_round_trip() {
        let matcher = matcher_with(&["1234567"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567/"));
        assert!(!matcher.is_archived("https://www.furaffinity.net/view/7654321/"));
    }

    #[test]
    fn test_part_suffix_is_stripped() {
        let matcher = matcher_with(&["1234567"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567-2/"));
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567-10"));
    }

    #[test]
    fn test_trailing_separators_are_stripped() {
        let matcher = matcher_with(&["1234567"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567///"));
    }

    #[test]
    fn test_journal_links_match_with_suffix() {
        let matcher = matcher_with(&["88001.journal"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/journal/88001/"));
        // Same token without the suffix in the index is a different work
        assert!(!matcher.is_archived("https://www.furaffinity.net/view/88001/"));
    }

    #[test]
    fn test_gallery_and_journal_share_base_token() {
        let matcher = matcher_with(&["5555", "5555.journal"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/5555/"));
        assert!(matcher.is_archived("https://www.furaffinity.net/journal/5555/"));
    }

    #[test]
    fn test_unrecognized_shapes_report_archived() {
        let matcher = matcher_with(&[]);
        assert!(matcher.is_archived("https://www.furaffinity.net/user/fox/"));
        assert!(matcher.is_archived("https://www.furaffinity.net/msg/submissions/"));
    }

    #[test]
    fn test_entry_prefix_is_stripped() {
        let matcher = matcher_with(&["fa.1234567"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567/"));
    }

    #[test]
    fn test_entry_part_suffix_collapses() {
        // Parts 1 and 2 of the same post share one identifier
        let matcher = matcher_with(&["1234567-1", "1234567-2"]);
        assert_eq!(matcher.index_len(), 1);
        assert!(matcher.is_archived("https://www.furaffinity.net/view/1234567/"));
    }

    #[test]
    fn test_journal_entry_keeps_suffix_through_truncation() {
        let matcher = matcher_with(&["88001-2.journal"]);
        assert!(matcher.is_archived("https://www.furaffinity.net/journal/88001/"));
    }

    #[test]
    fn test_empty_index_matches_nothing_recognized() {
        let matcher = matcher_with(&[]);
        assert!(!matcher.is_archived("https://www.furaffinity.net/view/1/"));
        assert_eq!(matcher.index_len(), 0);
    }
}
