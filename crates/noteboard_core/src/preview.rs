//! Plain-text preview derived from note HTML.
//!
//! # Responsibility
//! - Turn editor HTML into a short single-line summary for list rendering.
//! - Decide whether editor HTML carries any visible text.
//!
//! # Invariants
//! - Preview never contains markup or line breaks.
//! - Preview is at most `PREVIEW_MAX_CHARS` characters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters kept in a preview.
pub const PREVIEW_MAX_CHARS: usize = 100;

static HTML_BLOCK_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(br|/p|/div|/li|/h[1-6]|/blockquote|/pre)\b[^>]*>")
        .expect("valid block break regex")
});
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static HTML_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|#39|nbsp);").expect("valid entity regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HTML_MEDIA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(img|video|audio|iframe|embed|object)\b").expect("valid media regex")
});

/// Derives a plain-text preview from editor HTML.
///
/// Rules:
/// - block-level closers and `<br>` become spaces, other tags are dropped;
/// - `&amp; &lt; &gt; &quot; &#39; &nbsp;` are decoded;
/// - whitespace is collapsed and the first 100 chars retained.
///
/// Returns `None` when no visible text remains.
pub fn derive_html_preview(content: &str) -> Option<String> {
    let with_breaks = HTML_BLOCK_BREAK_RE.replace_all(content, " ");
    let without_tags = HTML_TAG_RE.replace_all(&with_breaks, "");
    let decoded = HTML_ENTITY_RE.replace_all(&without_tags, |caps: &regex::Captures<'_>| {
        match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "#39" => "'",
            _ => " ",
        }
        .to_string()
    });
    let normalized = WHITESPACE_RE.replace_all(&decoded, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
}

/// Returns whether editor HTML embeds an image, video, audio or frame.
pub fn has_embedded_media(content: &str) -> bool {
    HTML_MEDIA_RE.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::{derive_html_preview, has_embedded_media, PREVIEW_MAX_CHARS};

    #[test]
    fn preview_strips_tags_and_separates_blocks() {
        let preview = derive_html_preview("<h1>Plan</h1><p>wash <strong>car</strong></p>");
        assert_eq!(preview.as_deref(), Some("Plan wash car"));
    }

    #[test]
    fn preview_decodes_common_entities() {
        let preview = derive_html_preview("<p>salt &amp; pepper &lt;3</p>");
        assert_eq!(preview.as_deref(), Some("salt & pepper <3"));
    }

    #[test]
    fn preview_is_none_for_empty_editor() {
        assert_eq!(derive_html_preview("<p><br></p>"), None);
        assert_eq!(derive_html_preview(""), None);
    }

    #[test]
    fn media_elements_are_detected() {
        assert!(has_embedded_media(r#"<p><IMG src="a.png"></p>"#));
        assert!(has_embedded_media(r#"<iframe src="https://example.com"></iframe>"#));
        assert!(!has_embedded_media("<p>image of a cat</p>"));
        assert!(!has_embedded_media("<p><br></p>"));
    }

    #[test]
    fn preview_limits_length() {
        let body = format!("<p>{}</p>", "x".repeat(PREVIEW_MAX_CHARS * 2));
        let preview = derive_html_preview(&body).expect("preview should exist");
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
    }
}
