//! Field normalization for catalog rows.
//!
//! Catalog exports are hand-edited, so fields are cleaned leniently: blank
//! text becomes absent and year fields keep only their digits ("c. 1995",
//! "1995?"). None of these functions fail.

use regex::Regex;
use std::sync::LazyLock;

/// Matches every character that is not an ASCII decimal digit.
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").unwrap_or_else(|_| unreachable!()));

/// Trims `value`, returning `None` when it is missing, empty or all whitespace.
///
/// # Examples
///
/// ```rust
/// use biblio_backup::io::normalize::clean_str;
///
/// assert_eq!(clean_str(Some("  Dune ")), Some("Dune".to_string()));
/// assert_eq!(clean_str(Some("   ")), None);
/// assert_eq!(clean_str(None), None);
/// ```
#[must_use]
pub fn clean_str(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Extracts a year from free-form text by keeping only its digits.
///
/// Returns `None` when no digits remain or the digits do not fit in a `u64`.
///
/// # Examples
///
/// ```rust
/// use biblio_backup::io::normalize::parse_year;
///
/// assert_eq!(parse_year(Some("c. 1995")), Some(1995));
/// assert_eq!(parse_year(Some("n/a")), None);
/// ```
#[must_use]
pub fn parse_year(value: Option<&str>) -> Option<u64> {
    let digits = NON_DIGIT.replace_all(value?, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Returns true when every field is empty.
///
/// Whitespace counts as content, so `" , ,"` is not blank. A record with no
/// fields at all is blank.
#[must_use]
pub fn is_blank_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> bool {
    fields.into_iter().all(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("1995"), Some(1995) ; "plain year")]
    #[test_case(Some("c.1995"), Some(1995) ; "circa prefix")]
    #[test_case(Some("c. 1995"), Some(1995) ; "circa with space")]
    #[test_case(Some("1995?"), Some(1995) ; "uncertain suffix")]
    #[test_case(Some(" 2001 "), Some(2001) ; "padded")]
    #[test_case(Some("0042"), Some(42) ; "leading zeros")]
    #[test_case(Some("n/a"), None ; "no digits")]
    #[test_case(Some(""), None ; "empty")]
    #[test_case(None, None ; "missing")]
    #[test_case(Some("1995-01-01 12:00"), Some(199_501_011_200) ; "date stamp")]
    #[test_case(Some("99999999999999999999"), None ; "overflow")]
    fn test_parse_year(input: Option<&str>, expected: Option<u64>) {
        assert_eq!(parse_year(input), expected);
    }

    #[test]
    fn test_parse_year_joins_digit_runs() {
        // Ranges collapse into one number; the importer keeps whatever digits exist.
        assert_eq!(parse_year(Some("1990-91")), Some(199_091));
    }

    #[test]
    fn test_parse_year_ignores_non_ascii_digits() {
        assert_eq!(parse_year(Some("١٩٩٥")), None);
    }

    #[test]
    fn test_clean_str() {
        assert_eq!(clean_str(Some("Dune")), Some("Dune".to_string()));
        assert_eq!(clean_str(Some("\tFrank Herbert \n")), Some("Frank Herbert".to_string()));
        assert_eq!(clean_str(Some("Le Petit Prince")), Some("Le Petit Prince".to_string()));
        assert_eq!(clean_str(Some("")), None);
        assert_eq!(clean_str(Some(" \t\r\n")), None);
        assert_eq!(clean_str(None), None);
    }

    #[test]
    fn test_clean_str_keeps_inner_whitespace() {
        assert_eq!(clean_str(Some(" J. R. R.  Tolkien ")), Some("J. R. R.  Tolkien".to_string()));
    }

    #[test]
    fn test_is_blank_row() {
        assert!(is_blank_row(["", "", ""]));
        assert!(is_blank_row(Vec::<&str>::new()));
        assert!(!is_blank_row(["", "Dune", ""]));
    }

    #[test]
    fn test_whitespace_row_is_not_blank() {
        assert!(!is_blank_row(["", "  ", "\t"]));
        assert!(!is_blank_row([" "]));
    }
}
