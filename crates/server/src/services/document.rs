//! Open-Graph embed document synthesis. The document is only ever served to
//! link-preview crawlers; browsers are redirected before this point.

const SITE_NAME: &str = "FxFacebook";
const THEME_COLOR: &str = "#6441a5";

/// Build the crawler-facing HTML document carrying the video tags.
pub fn render_embed(description: &str, source_url: &str, video_url: &str) -> String {
    let description = escape_attribute(description);
    let source_url = escape_attribute(source_url);
    let video_url = escape_attribute(video_url);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="theme-color" content="{theme}">
<meta property="og:title" content="{description}">
<meta property="og:type" content="video">
<meta property="og:site_name" content="{site}">
<meta property="og:url" content="{source}">
<meta property="og:video" content="{video}">
<meta property="og:video:secure_url" content="{video}">
<meta property="og:video:type" content="video/mp4">
</head>
<body>
<p><a href="{source}">View on Facebook</a></p>
</body>
</html>"#,
        theme = THEME_COLOR,
        site = SITE_NAME,
        description = description,
        source = source_url,
        video = video_url,
    )
}

/// Escape a value for interpolation into an HTML attribute. Resolver-provided
/// text is attacker-influenced, so this is a correctness requirement.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_video_tags_present() {
        let html = render_embed(
            "A reel",
            "https://www.facebook.com/reel/123",
            "https://short/abc",
        );
        assert!(html.contains(r#"<meta property="og:title" content="A reel">"#));
        assert!(html.contains(r#"<meta property="og:type" content="video">"#));
        assert!(html.contains(r#"<meta property="og:video" content="https://short/abc">"#));
        assert!(html
            .contains(r#"<meta property="og:video:secure_url" content="https://short/abc">"#));
        assert!(html.contains(r#"<meta property="og:video:type" content="video/mp4">"#));
        assert!(html
            .contains(r#"<meta property="og:url" content="https://www.facebook.com/reel/123">"#));
    }

    #[test]
    fn test_branding_tags() {
        let html = render_embed("x", "https://fb/1", "https://short/1");
        assert!(html.contains(r#"<meta property="og:site_name" content="FxFacebook">"#));
        assert!(html.contains(r##"<meta name="theme-color" content="#6441a5">"##));
    }

    #[test]
    fn test_quote_cannot_break_out_of_attribute() {
        let html = render_embed(r#""><script>alert(1)</script>"#, "https://fb/1", "https://short/1");
        assert!(!html.contains("<script>"));
        assert!(html.contains(
            r#"content="&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;""#
        ));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("a&b"), "a&amp;b");
        assert_eq!(escape_attribute(r#"<"'>"#), "&lt;&quot;&#39;&gt;");
        assert_eq!(escape_attribute("plain"), "plain");
    }
}
