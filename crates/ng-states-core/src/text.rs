// crates/ng-states-core/src/text.rs

//! Name normalization and aliasing.
//!
//! Every lookup in the crate compares *normalized* strings: trimmed and
//! lowercased. Nothing beyond that is folded, so `"Jema'a"` and `"Jemaa"`
//! are different names.

/// Canonical name of the federal district record.
pub const FCT_CANONICAL: &str = "Federal Capital Territory";

/// Normalized spellings that resolve to [`FCT_CANONICAL`].
pub const FCT_ALIASES: [&str; 5] = [
    "fct",
    "f.c.t",
    "abuja",
    "f c t",
    "federal capital territory",
];

/// Trim surrounding whitespace and lowercase.
///
/// # Examples
///
/// ```rust
/// use ng_states_core::text::normalize;
///
/// assert_eq!(normalize("  Akwa Ibom "), "akwa ibom");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Replace any known FCT alias with the canonical record name.
///
/// Inputs that are not an alias come back unchanged (not normalized).
///
/// ```rust
/// use ng_states_core::text::resolve_alias;
///
/// assert_eq!(resolve_alias(" F.C.T "), "Federal Capital Territory");
/// assert_eq!(resolve_alias("Lagos"), "Lagos");
/// ```
pub fn resolve_alias(input: &str) -> &str {
    let key = normalize(input);
    if FCT_ALIASES.contains(&key.as_str()) {
        FCT_CANONICAL
    } else {
        input
    }
}

/// Equality on normalized form.
#[inline]
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// True when `haystack` contains an already-normalized `needle`.
#[inline]
pub(crate) fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

/// True when the input carries no characters besides whitespace.
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("LAGOS"), "lagos");
        assert_eq!(normalize("\tCross River\n"), "cross river");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn every_alias_resolves() {
        for alias in ["FCT", "f.c.t", "Abuja", "F C T", "federal capital territory"] {
            assert_eq!(resolve_alias(alias), FCT_CANONICAL, "alias {alias}");
        }
    }

    #[test]
    fn non_alias_is_returned_as_is() {
        assert_eq!(resolve_alias("  Kano "), "  Kano ");
        assert_eq!(resolve_alias("FCT Abuja"), "FCT Abuja");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn comparisons() {
        assert!(equals_normalized("Ikeja", " ikeja "));
        assert!(!equals_normalized("Ikeja", "Ikej"));
        assert!(contains_normalized("Abakaliki", "aba"));
        assert!(!contains_normalized("Lagos", "LAG"));
    }
}
