//! Category suggestions and matching.
//!
//! The suggestion list mirrors what the entry form offers. It is never
//! enforced: a record keeps whatever category the user typed, and lookups
//! compare normalized forms instead.
use unicode_normalization::UnicodeNormalization;

/// Categories offered by the entry form.
pub const SUGGESTED: [&str; 6] = ["Food", "Travel", "Shopping", "Bills", "Health", "Other"];

/// Category used when quick-add input carries no `#tag`.
pub const FALLBACK: &str = "Other";

/// Normalized form used for matching: NFKC, trimmed, lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().nfkc().collect::<String>().to_lowercase()
}

/// Case-insensitive category comparison.
pub fn matches(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_and_whitespace() {
        assert!(matches("Food", "food"));
        assert!(matches("FOOD", " food "));
        assert!(!matches("Food", "Travel"));
    }

    #[test]
    fn normalize_folds_compatibility_forms() {
        // Fullwidth letters normalize down to ASCII under NFKC.
        assert_eq!(normalize("Ｆｏｏｄ"), "food");
    }
}
