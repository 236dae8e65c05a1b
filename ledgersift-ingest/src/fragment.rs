//! Positioned text fragments.
//!
//! The document text extractor renders each page as HTML with one `<p>` per
//! visually-positioned text run, carrying its horizontal offset in the inline
//! style:
//!
//!   <p style="position:absolute;top:412.1pt;left:64.3pt">GROCERY STORE</p>
//!
//! The layout pipeline only needs the text and the left offset.

use std::sync::LazyLock;

use regex::Regex;

/// One positioned text run from a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    /// Horizontal offset in points, from the `left:<n>pt` style attribute.
    pub left: f32,
}

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<p.*</p>$").unwrap());

static LEFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)left:([0-9.]+)pt").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Extract fragments from a positioned-HTML page dump, one per `<p>` line.
/// Non-paragraph lines (page scaffolding) are skipped.
pub fn fragments_from_html(html: &str) -> Vec<Fragment> {
    html.lines()
        .map(str::trim)
        .filter(|line| PARAGRAPH_RE.is_match(line))
        .map(|line| {
            let left = LEFT_RE
                .captures(line)
                .and_then(|caps| caps[1].parse().ok())
                .unwrap_or(0.0);
            let text = TAG_RE.replace_all(line, "").trim().to_string();
            Fragment { text, left }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_and_offset() {
        let html = r#"<p style="position:absolute;top:412.1pt;left:64.3pt">GROCERY STORE</p>"#;
        let frags = fragments_from_html(html);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].text, "GROCERY STORE");
        assert_eq!(frags[0].left, 64.3);
    }

    #[test]
    fn test_skips_non_paragraph_lines() {
        let html = "<html>\n<body>\n<p style=\"left:12pt\">15 Nov</p>\n</body>";
        let frags = fragments_from_html(html);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].text, "15 Nov");
    }

    #[test]
    fn test_missing_left_defaults_to_zero() {
        let frags = fragments_from_html(r#"<p style="top:10pt">header</p>"#);
        assert_eq!(frags[0].left, 0.0);
    }

    #[test]
    fn test_nested_tags_are_stripped() {
        let frags = fragments_from_html(r#"<p style="left:64.3pt"><b>PAYROLL</b> DEPOSIT</p>"#);
        assert_eq!(frags[0].text, "PAYROLL DEPOSIT");
    }
}
