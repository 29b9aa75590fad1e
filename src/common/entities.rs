use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of a bare &)
static ENTITY_DECODER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&nbsp;"])
        .expect("Failed to build entity decoder")
});

/// Decode the named entities the field renderer emits into text nodes.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use longan::common::entities::decode_entities;
/// assert_eq!(decode_entities("R&amp;D &lt;lead&gt;"), "R&D <lead>");
/// assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
/// assert_eq!(decode_entities("&invalid;"), "&invalid;"); // unknown entity
/// ```
#[inline]
pub fn decode_entities(s: &str) -> String {
    ENTITY_DECODER.replace_all(s, &["&", "<", ">", "\"", "'", "\u{a0}"])
}

/// Resolve a bare general-entity name (the part between `&` and `;`).
///
/// Handles the five predefined XML entities, `nbsp`, and decimal or
/// hexadecimal character references. Returns `None` for anything else.
pub fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_matches_longest_entity_first() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_resolve_named_and_numeric() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("nbsp"), Some('\u{a0}'));
        assert_eq!(resolve_entity("#38"), Some('&'));
        assert_eq!(resolve_entity("#x26"), Some('&'));
        assert_eq!(resolve_entity("bogus"), None);
    }
}
