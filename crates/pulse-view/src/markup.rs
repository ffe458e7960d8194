//! Safe text rendering.
//!
//! Content is always escaped. The only markup honored is the dashboard's
//! rich-text subset: `**bold**` spans. Emoji and other Unicode pass through
//! untouched. An unpaired `**` is rendered literally.

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders rich text: escaped content with `**bold**` spans as `<strong>`.
pub fn rich_text(text: &str) -> String {
    let segments: Vec<&str> = text.split("**").collect();
    // Odd segment count means every marker has a partner.
    let paired = segments.len() % 2 == 1;
    let last = segments.len() - 1;

    let mut out = String::with_capacity(text.len());
    for (i, segment) in segments.iter().enumerate() {
        let bold = i % 2 == 1;
        if bold && (paired || i < last) && !segment.is_empty() {
            out.push_str("<strong>");
            out.push_str(&escape(segment));
            out.push_str("</strong>");
        } else {
            if bold {
                out.push_str("**");
            }
            out.push_str(&escape(segment));
            if bold && (paired || i < last) {
                out.push_str("**");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = "🚜 Weak monsoon forecast – agri‑input suppliers by Q3.";
        assert_eq!(rich_text(text), text);
    }

    #[test]
    fn test_bold_spans() {
        assert_eq!(
            rich_text("Deposit **outflow** risk of **₹300 Cr**"),
            "Deposit <strong>outflow</strong> risk of <strong>₹300 Cr</strong>"
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        assert_eq!(
            rich_text("<b>risk</b><script>alert(1)</script>"),
            "&lt;b&gt;risk&lt;/b&gt;&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_markup_inside_bold_is_escaped() {
        assert_eq!(rich_text("**<i>x</i>**"), "<strong>&lt;i&gt;x&lt;/i&gt;</strong>");
    }

    #[test]
    fn test_unpaired_marker_is_literal() {
        assert_eq!(rich_text("a **b"), "a **b");
        assert_eq!(rich_text("**a** b **c"), "<strong>a</strong> b **c");
    }

    #[test]
    fn test_empty_pair_is_literal() {
        assert_eq!(rich_text("a****b"), "a****b");
    }
}
