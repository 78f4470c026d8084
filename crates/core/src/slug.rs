//! Blog-post slug derivation.

/// Derive a URL slug from a post title.
///
/// Lowercases the title, keeps alphanumeric runs, and joins them with
/// hyphens. Everything else (punctuation, whitespace) acts as a separator.
///
/// # Examples
///
/// ```
/// use voyara_core::slug::slugify;
///
/// assert_eq!(slugify("Ten Days in Patagonia"), "ten-days-in-patagonia");
/// assert_eq!(slugify("Lisbon: A Food Lover's Guide!"), "lisbon-a-food-lover-s-guide");
/// assert_eq!(slugify("  Already   spaced  "), "already-spaced");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
