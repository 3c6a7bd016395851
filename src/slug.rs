//! URL-friendly identifier derivation.
//!
//! Projects are looked up by a slug derived from their name.

/// Derives a URL-friendly slug from a display name.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters to a single hyphen, and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```rust
/// use causeway::slug::slugify;
///
/// assert_eq!(slugify("CodeMontage"), "codemontage");
/// assert_eq!(slugify("Widget Factory 2.0"), "widget-factory-2-0");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("CodeMontage", "codemontage"; "single word")]
    #[test_case("Widget Factory", "widget-factory"; "spaces")]
    #[test_case("  Hack / Night!  ", "hack-night"; "punctuation runs collapse")]
    #[test_case("Éducation", "éducation"; "unicode lowercased")]
    #[test_case("", ""; "empty")]
    #[test_case("---", ""; "only separators")]
    fn test_slugify(input: &str, expected: &str) {
        assert_eq!(slugify(input), expected);
    }
}
