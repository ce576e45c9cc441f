//! Flat section-keyed text store backing the author registry
//!
//! The store is a plain text file holding one section per service. A section
//! is a bracketed header line followed by `key=value` assignment lines, one
//! per entry; the key is a stable per-line integer and only matters when one
//! file holds several services' author lists:
//!
//! ```text
//! [FUR AFFINITY]
//! 1=aardwolf
//! 2=badger
//! ```
//!
//! Parsing is lenient: a missing or unreadable file yields an empty section
//! and a malformed line is skipped, never an abort. Writing a section
//! preserves every other section in the file byte-for-byte.

use std::fs;
use std::io;
use std::path::Path;

/// Derive the section header for a service's canonical name:
/// uppercased, underscores replaced with spaces, wrapped in brackets.
///
/// # Examples
///
/// ```
/// use galsync::registry::store::section_header;
///
/// assert_eq!(section_header("fur_affinity"), "[FUR AFFINITY]");
/// ```
#[must_use]
pub fn section_header(service: &str) -> String {
    format!("[{}]", service.to_uppercase().replace('_', " "))
}

/// Read the entries of one service's section.
///
/// Returns the entry values in file order. A missing or unreadable file is
/// not an error and yields an empty list; so does an absent section. Lines
/// without an `=` or with an empty value are skipped.
#[must_use]
pub fn read_section(path: &Path, service: &str) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "registry store not readable, starting empty");
            return Vec::new();
        }
    };

    let header = section_header(service);
    let mut in_section = false;
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_section = line == header;
            continue;
        }
        if !in_section {
            continue;
        }
        // key=value; the key is ignored on read
        if let Some((_, value)) = line.split_once('=') {
            let value = value.trim();
            if !value.is_empty() {
                entries.push(value.to_string());
            }
        }
    }

    entries
}

/// Write one service's section, replacing any previous copy of it and
/// keeping all other sections intact.
pub fn write_section(path: &Path, service: &str, entries: &[String]) -> io::Result<()> {
    let header = section_header(service);
    let mut out = String::new();

    if let Ok(existing) = fs::read_to_string(path) {
        let mut skipping = false;
        for line in existing.lines() {
            if line.trim().starts_with('[') {
                skipping = line.trim() == header;
            }
            if !skipping {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    out.push_str(&header);
    out.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{}={}\n", i + 1, entry));
    }

    fs::write(path, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_section_header_derivation() {
        assert_eq!(section_header("fur_affinity"), "[FUR AFFINITY]");
        assert_eq!(section_header("weasyl"), "[WEASYL]");
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("authors.txt");
        assert!(read_section(&path, "fur_affinity").is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("authors.txt");
        fs::write(
            &path,
            "[FUR AFFINITY]\n1=fox\nnot an assignment\n2=\n3=wolf\n",
        )
        .unwrap();
        assert_eq!(read_section(&path, "fur_affinity"), vec!["fox", "wolf"]);
    }

    #[test]
    fn test_only_own_section_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("authors.txt");
        fs::write(
            &path,
            "[WEASYL]\n1=otter\n[FUR AFFINITY]\n1=fox\n[IB]\n1=lynx\n",
        )
        .unwrap();
        assert_eq!(read_section(&path, "fur_affinity"), vec!["fox"]);
    }

    #[test]
    fn test_write_preserves_other_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("authors.txt");
        fs::write(&path, "[WEASYL]\n1=otter\n[FUR AFFINITY]\n1=old\n").unwrap();

        write_section(&path, "fur_affinity", &["fox".to_string(), "wolf".to_string()]).unwrap();

        assert_eq!(read_section(&path, "weasyl"), vec!["otter"]);
        assert_eq!(read_section(&path, "fur_affinity"), vec!["fox", "wolf"]);
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("authors.txt");
        let entries = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        write_section(&path, "fur_affinity", &entries).unwrap();
        assert_eq!(read_section(&path, "fur_affinity"), entries);
    }
}
