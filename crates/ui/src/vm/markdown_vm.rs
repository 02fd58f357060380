use std::collections::HashSet;

/// Render authored markdown into sanitized HTML for
/// `dangerous_inner_html`.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Strip anything but basic formatting markup. Authored content is
/// trusted in principle, but everything injected as raw HTML goes
/// through here anyway.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "b", "i", "del", "code", "ul", "ol", "li",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new().tags(tags).clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn renders_emphasis_and_code() {
        let html = markdown_to_html("Login data: **not sent yet**, see `https://example.com`");
        assert!(html.contains("<strong>not sent yet</strong>"));
        assert!(html.contains("<code>https://example.com</code>"));
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let html = markdown_to_html("First paragraph.\n\nSecond paragraph.");
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn sanitize_drops_scripts_and_event_handlers() {
        let html = sanitize_html("<p onclick=\"steal()\">ok</p><script>alert(1)</script>");
        assert!(html.contains("<p>ok</p>"));
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn sanitize_drops_links_and_images() {
        let html = sanitize_html("<a href=\"https://evil.example\">x</a><img src=\"y\">");
        assert!(!html.contains("<a"));
        assert!(!html.contains("<img"));
    }
}
