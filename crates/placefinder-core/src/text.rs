// crates/placefinder-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Trim surrounding whitespace
/// 2\) Transliterate Unicode → ASCII (e.g. `Bengalūru` -> `Bengaluru`)
/// 3\) Normalize to lowercase
///
/// The folded form is only ever used for matching. Display values keep the
/// original casing of the candidate.
///
/// # Examples
///
/// ```rust
/// use placefinder_core::text::fold_key;
///
/// assert_eq!(fold_key("  Bengaluru "), "bengaluru");
/// assert_eq!(fold_key("Bengalūru"), "bengaluru");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Prefix match of `candidate` against an already folded query.
#[inline]
pub fn starts_with_folded(candidate: &str, folded_query: &str) -> bool {
    fold_key(candidate).starts_with(folded_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_trims_and_lowercases() {
        assert_eq!(fold_key("\tMUMBAI  "), "mumbai");
        assert_eq!(fold_key(""), "");
        assert_eq!(fold_key("   "), "");
    }

    #[test]
    fn prefix_match_ignores_case() {
        assert!(starts_with_folded("Koramangala", "kor"));
        assert!(starts_with_folded("Electronic City", "electronic c"));
        assert!(!starts_with_folded("Indiranagar", "nagar"));
    }
}
