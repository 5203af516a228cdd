//! HTML escaping and the shared document shell.

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Wraps a page body in the site's HTML document.
///
/// `title` and `description` are escaped here; `body` must already be HTML.
pub(crate) fn document(title: &str, description: Option<&str>, body: &str) -> String {
    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\" class=\"light\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    output.push_str("<meta name=\"color-scheme\" content=\"light only\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if let Some(description) = description {
        output.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    output.push_str("</head>\n<body class=\"antialiased\">\n");
    output.push_str(body);
    output.push_str("</body>\n</html>\n");
    output
}
