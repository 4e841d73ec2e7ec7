//! Widget identifier derivation

/// Derive an identifier-safe slug from a widget name.
///
/// Lower-cases the input, collapses every run of non-alphanumeric
/// characters into a single `-`, and trims leading and trailing
/// separators. The same name always yields the same slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_single_separator() {
        assert_eq!(slugify("Stock Ticker"), "stock-ticker");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("My -- Widget!!"), "my-widget");
    }

    #[test]
    fn test_leading_and_trailing_separators_trimmed() {
        assert_eq!(slugify("  hello world  "), "hello-world");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_digits_preserved() {
        assert_eq!(slugify("Widget 2.0"), "widget-2-0");
    }

    #[test]
    fn test_no_alphanumeric_content_yields_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = slugify("Stock Ticker");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_unicode_lowercasing() {
        assert_eq!(slugify("Überwachung"), "überwachung");
    }
}
