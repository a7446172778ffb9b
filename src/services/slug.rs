//! Slug generation
//!
//! Turns an article title into a lowercase, hyphen-separated identifier
//! that is safe to use as a URL path segment.

/// Generate a URL-friendly slug from a title.
///
/// Lowercases the title, turns every character outside `[a-z0-9]` and
/// whitespace into a space, then joins the remaining words with single
/// hyphens. The result only contains `[a-z0-9-]`, never starts or ends
/// with a hyphen, and feeding it back in returns it unchanged.
pub fn to_slug(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                // Newlines, punctuation, hyphens and non-ASCII letters all split words
                ' '
            }
        })
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_slug_simple() {
        assert_eq!(to_slug("Hello World"), "hello-world");
    }

    #[test]
    fn test_to_slug_with_punctuation() {
        assert_eq!(to_slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_to_slug_collapses_separators() {
        assert_eq!(to_slug("Hello   --  World"), "hello-world");
        assert_eq!(to_slug("a_b__c"), "a-b-c");
    }

    #[test]
    fn test_to_slug_newlines() {
        assert_eq!(to_slug("Line one\nLine two\r\n"), "line-one-line-two");
    }

    #[test]
    fn test_to_slug_keeps_digits() {
        assert_eq!(to_slug("Kotlin 1.7 released"), "kotlin-1-7-released");
    }

    #[test]
    fn test_to_slug_non_ascii_letters_split_words() {
        assert_eq!(to_slug("Café au lait"), "caf-au-lait");
        assert_eq!(to_slug("技术文章"), "");
    }

    #[test]
    fn test_to_slug_empty() {
        assert_eq!(to_slug(""), "");
        assert_eq!(to_slug("  !!! "), "");
    }

    #[test]
    fn test_to_slug_uppercase() {
        assert_eq!(to_slug("RUST AND KOTLIN"), "rust-and-kotlin");
    }
}
