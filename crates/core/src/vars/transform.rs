//! Pure string transformations declared as token suffixes.
//!
//! Each transformation is total: defined on every input including the empty
//! string, and it never fails. Unexpected characters are rewritten or
//! dropped, never reported.

/// A named transformation applied to a resolved base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Rewrite into a bare identifier (`identifier`).
    Identifier,
    /// Rewrite into a single DNS-style label (`RFC1034identifier`).
    Rfc1034Identifier,
    /// Rewrite into a dotted reverse-DNS fragment (`bundleIdentifier`).
    BundleIdentifier,
}

impl Transformation {
    /// Parse a transformation suffix as written in a token.
    ///
    /// Names are matched exactly; unknown names yield `None` and the caller
    /// skips them (the value passes through unchanged).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "identifier" => Some(Self::Identifier),
            "RFC1034identifier" => Some(Self::Rfc1034Identifier),
            "bundleIdentifier" => Some(Self::BundleIdentifier),
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Identifier => identifier_safe(input),
            Self::Rfc1034Identifier => dns_label_safe(input),
            Self::BundleIdentifier => bundle_fragment_safe(input),
        }
    }
}

/// Apply a transformation chain left-to-right.
#[must_use]
pub fn apply_all(transforms: &[Transformation], value: String) -> String {
    transforms.iter().fold(value, |v, t| t.apply(&v))
}

/// Make a string safe as a bare identifier.
///
/// ASCII alphanumerics and underscores pass through untouched; every other
/// character (hyphens, spaces, punctuation, non-ASCII) becomes `_`.
#[must_use]
pub fn identifier_safe(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Make a string safe as a single DNS-style label.
///
/// ASCII alphanumerics are kept with their case; any run of other characters
/// collapses to a single `-`; leading and trailing separators are trimmed.
#[must_use]
pub fn dns_label_safe(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }

    out.trim_end_matches('-').to_string()
}

/// Make a string safe as a dotted reverse-DNS fragment.
///
/// Each dot-separated label is normalized with [`dns_label_safe`]; labels
/// that normalize to empty are dropped; the rest are rejoined with `.`.
#[must_use]
pub fn bundle_fragment_safe(s: &str) -> String {
    s.split('.')
        .map(dns_label_safe)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_keeps_alnum_and_underscores() {
        assert_eq!(identifier_safe("My_File2"), "My_File2");
    }

    #[test]
    fn identifier_rewrites_punctuation() {
        assert_eq!(identifier_safe("My File"), "My_File");
        assert_eq!(identifier_safe("my-app"), "my_app");
        assert_eq!(identifier_safe("a.b/c"), "a_b_c");
    }

    #[test]
    fn identifier_empty_stays_empty() {
        assert_eq!(identifier_safe(""), "");
    }

    #[test]
    fn dns_label_basic() {
        assert_eq!(dns_label_safe("My App"), "My-App");
        assert_eq!(dns_label_safe("foo_bar"), "foo-bar");
    }

    #[test]
    fn dns_label_collapses_and_trims() {
        assert_eq!(dns_label_safe("  My   App  "), "My-App");
        assert_eq!(dns_label_safe("--weird--"), "weird");
        assert_eq!(dns_label_safe("!!!"), "");
    }

    #[test]
    fn dns_label_preserves_case() {
        assert_eq!(dns_label_safe("MyApp"), "MyApp");
    }

    #[test]
    fn bundle_fragment_normalizes_labels() {
        assert_eq!(bundle_fragment_safe("com.example"), "com.example");
        assert_eq!(bundle_fragment_safe("com.My Company"), "com.My-Company");
    }

    #[test]
    fn bundle_fragment_drops_empty_labels() {
        assert_eq!(bundle_fragment_safe("com..example."), "com.example");
        assert_eq!(bundle_fragment_safe(""), "");
        assert_eq!(bundle_fragment_safe("..."), "");
    }

    #[test]
    fn apply_all_runs_left_to_right() {
        let chain = [Transformation::Rfc1034Identifier, Transformation::Identifier];
        assert_eq!(apply_all(&chain, "My App".to_string()), "My_App");
    }

    #[test]
    fn unknown_transformation_name() {
        assert!(Transformation::from_name("slugify").is_none());
        assert!(Transformation::from_name("Identifier").is_none());
    }
}
