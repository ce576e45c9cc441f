//! Alpha-numeric string ordering
//!
//! Plain lexical ordering puts `"item10"` before `"item2"`, which is never
//! what a person browsing an archive listing expects. This module compares
//! strings by peeling off maximal runs that are either numeric or free of
//! digits, comparing numeric runs by value and text runs case-insensitively.
//!
//! This is the total order used for author lists, archive directory
//! listings, and every other identifier sequence in the crate.

use std::cmp::Ordering;

/// Compare two strings alpha-numerically.
///
/// The strings are scanned left to right as alternating runs. A numeric run
/// is a maximal sequence of decimal digits with at most one embedded decimal
/// point that is immediately followed by another digit; any other maximal
/// digit-free sequence is a text run. Two numeric runs are compared by
/// parsed value, everything else case-insensitively as text. The first
/// non-equal run pair decides the result; if all compared runs tie, the
/// string exhausted first sorts first.
///
/// Numeric runs are parsed as `f64`, so tokens that would overflow an
/// integer still order correctly. The domain is short identifier tokens,
/// not arbitrary-precision numbers.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use galsync::utils::alphanum::compare;
///
/// assert_eq!(compare("item2", "item10"), Ordering::Less);
/// assert_eq!(compare("Item", "item2"), Ordering::Less);
/// assert_eq!(compare("", "a"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut runs_a = Runs { rest: a };
    let mut runs_b = Runs { rest: b };

    loop {
        match (runs_a.next(), runs_b.next()) {
            (None, None) => return Ordering::Equal,
            // Exhausted prefix sorts first
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ra), Some(rb)) => {
                let ord = compare_runs(ra, rb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Compare two runs: numeric runs by parsed value, everything else as
/// case-insensitive text.
///
/// A run is numeric exactly when it starts with a digit; the splitter never
/// lets a digit into a text run. Deciding by parse success instead would
/// pull float-special words (`inf`, `nan`, `infinity`) into the numeric
/// branch and break the total order.
fn compare_runs(a: &str, b: &str) -> Ordering {
    if starts_with_digit(a) && starts_with_digit(b) {
        if let (Ok(na), Ok(nb)) = (a.parse::<f64>(), b.parse::<f64>()) {
            // Digit runs never parse to NaN
            return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
        }
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn starts_with_digit(run: &str) -> bool {
    run.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Iterator over the maximal numeric/text runs of a string.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let s = self.rest;
        if s.is_empty() {
            return None;
        }

        let bytes = s.as_bytes();
        let end = if bytes[0].is_ascii_digit() {
            let mut end = 1;
            let mut seen_point = false;
            while end < bytes.len() {
                if bytes[end].is_ascii_digit() {
                    end += 1;
                } else if bytes[end] == b'.'
                    && !seen_point
                    && end + 1 < bytes.len()
                    && bytes[end + 1].is_ascii_digit()
                {
                    seen_point = true;
                    end += 1;
                } else {
                    break;
                }
            }
            end
        } else {
            s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len())
        };

        let (run, rest) = s.split_at(end);
        self.rest = rest;
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(s: &str) -> Vec<&str> {
        Runs { rest: s }.collect()
    }

    #[test]
    fn test_numeric_run_beats_digit_count() {
        assert_eq!(compare("item2", "item10"), Ordering::Less);
        assert_eq!(compare("item10", "item2"), Ordering::Greater);
        assert_eq!(compare("item002", "item10"), Ordering::Less);
    }

    #[test]
    fn test_numeric_pairs_order_by_value() {
        for (n1, n2) in [(1u64, 2), (2, 10), (9, 11), (99, 100), (5, 50)] {
            let s1 = format!("item{n1}");
            let s2 = format!("item{n2}");
            assert_eq!(compare(&s1, &s2), Ordering::Less, "{s1} < {s2}");
        }
    }

    #[test]
    fn test_case_insensitive_text() {
        assert_eq!(compare("Item", "item2"), Ordering::Less);
        assert_eq!(compare("FOX", "fox"), Ordering::Equal);
        assert_eq!(compare("alpha", "Beta"), Ordering::Less);
    }

    #[test]
    fn test_prefix_exhausted_sorts_first() {
        assert_eq!(compare("item", "item2"), Ordering::Less);
        assert_eq!(compare("item2a", "item2"), Ordering::Greater);
    }

    #[test]
    fn test_empty_string_sorts_first() {
        assert_eq!(compare("", ""), Ordering::Equal);
        assert_eq!(compare("", "a"), Ordering::Less);
        assert_eq!(compare("0", ""), Ordering::Greater);
    }

    #[test]
    fn test_decimal_point_run() {
        assert_eq!(compare("v1.5", "v1.10"), Ordering::Greater);
        assert_eq!(compare("v1.2", "v1.5"), Ordering::Less);
    }

    #[test]
    fn test_trailing_point_is_not_numeric() {
        // "2." splits into the run "2" followed by "."
        assert_eq!(runs("2."), vec!["2", "."]);
        assert_eq!(runs("1.2.3"), vec!["1.2", ".", "3"]);
    }

    #[test]
    fn test_overflowing_numbers_compare_as_float() {
        let big = "id99999999999999999999999999";
        let bigger = "id199999999999999999999999999";
        assert_eq!(compare(big, bigger), Ordering::Less);
    }

    #[test]
    fn test_run_splitting() {
        assert_eq!(runs("abc123def"), vec!["abc", "123", "def"]);
        assert_eq!(runs("123"), vec!["123"]);
        assert_eq!(runs("abc"), vec!["abc"]);
    }

    #[test]
    fn test_float_special_words_compare_as_text() {
        // "inf"/"nan"/"infinity" parse as f64 but are text runs
        assert_ne!(compare("Nan", "Inf"), Ordering::Equal);
        assert_eq!(compare("inf", "iz"), Ordering::Less);
        assert_eq!(compare("nan", "iz"), Ordering::Greater);
        assert_eq!(compare("Infinity", "infinity"), Ordering::Equal);
    }

    #[test]
    fn test_float_special_words_sort_consistently() {
        let mut names = vec!["nan", "Infinity", "iz", "beta", "inf"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(names, vec!["beta", "inf", "Infinity", "iz", "nan"]);
    }

    #[test]
    fn test_sorting_a_listing() {
        let mut names = vec!["item10", "Item2", "apple", "item1", "Banana"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(names, vec!["apple", "Banana", "item1", "Item2", "item10"]);
    }
}
