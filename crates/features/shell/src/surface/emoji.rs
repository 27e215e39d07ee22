/// Looks up the glyph for a shortcode name (without the surrounding colons),
/// using the GitHub shortcode set.
#[must_use]
pub fn shortcode_glyph(name: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(name).map(emojis::Emoji::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_shortcodes() {
        assert_eq!(shortcode_glyph("red_circle"), Some("🔴"));
        assert_eq!(shortcode_glyph("books"), Some("📚"));
        assert_eq!(shortcode_glyph("definitely_not_an_emoji"), None);
    }

    #[test]
    fn common_shortcodes_resolve() {
        for name in ["smile", "tada", "bar_chart", "thumbsup", "+1", "rocket", "robot"] {
            assert!(shortcode_glyph(name).is_some(), "{name} should resolve");
        }
        assert_eq!(shortcode_glyph("thumbsup"), shortcode_glyph("+1"));
    }
}
