// src/swing/resources.rs
//! Extracts external resource URLs from a swing's raw `scripts` and
//! `styles` lists.

use regex::Regex;

lazy_static::lazy_static! {
    static ref SCRIPT_TAG: Regex = Regex::new(r#"(?i)<script src="(?P<url>[^"]+)"></script>"#)
        .expect("Failed to compile script tag regex - this is a bug in the code");
    static ref STYLE_TAG: Regex =
        Regex::new(r#"(?i)<link href="(?P<url>[^"]+)" rel="stylesheet" />"#)
            .expect("Failed to compile stylesheet tag regex - this is a bug in the code");
}

fn capture_urls(content: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|captures| captures.name("url"))
        .map(|url| url.as_str().to_string())
        .collect()
}

/// URLs of every `<script src="..."></script>` tag, in document order.
pub fn scan_script_urls(content: &str) -> Vec<String> {
    capture_urls(content, &SCRIPT_TAG)
}

/// URLs of every `<link href="..." rel="stylesheet" />` tag, in document order.
pub fn scan_style_urls(content: &str) -> Vec<String> {
    capture_urls(content, &STYLE_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_script_tags_in_order() {
        let content = r#"
<script src="https://unpkg.com/a.js"></script>
<!-- comment -->
<script src="https://unpkg.com/b.js"></script>
"#;
        assert_eq!(
            scan_script_urls(content),
            vec!["https://unpkg.com/a.js", "https://unpkg.com/b.js"]
        );
    }

    #[test]
    fn test_tags_on_one_line() {
        let content = r#"<script src="1.js"></script><script src="2.js"></script>"#;
        assert_eq!(scan_script_urls(content), vec!["1.js", "2.js"]);
    }

    #[test]
    fn test_case_insensitive_tags() {
        let content = r#"<SCRIPT SRC="https://x/y.js"></SCRIPT>"#;
        assert_eq!(scan_script_urls(content), vec!["https://x/y.js"]);
    }

    #[test]
    fn test_style_links() {
        let content = r#"<link href="https://cdn/bulma.css" rel="stylesheet" />
<link href="https://cdn/other.css" rel="preload" />"#;
        assert_eq!(scan_style_urls(content), vec!["https://cdn/bulma.css"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(scan_script_urls("").is_empty());
        assert!(scan_style_urls("<script src=\"a.js\"></script>").is_empty());
        assert!(scan_script_urls("<script src=\"\"></script>").is_empty());
    }
}
