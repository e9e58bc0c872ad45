use imgur_client::MediaUnit;

/// Render one media unit as an embeddable HTML fragment: the media element,
/// then the caption if there is one, each followed by a line break.
pub fn render_media(unit: &MediaUnit) -> String {
    let mut html = String::new();

    if unit.mime.starts_with("image/") {
        html.push_str(&format!(r#"<img src="{}" /><br />"#, unit.link));
    } else {
        html.push_str(&format!(
            r#"<video src="{}" controls></video><br />"#,
            unit.link
        ));
    }

    if let Some(description) = &unit.description {
        if !description.trim().is_empty() {
            html.push_str(&escape_html(description).replace('\n', "<br />"));
            html.push_str("<br />");
        }
    }

    html
}

/// Minimal HTML entity escaping for caption text. The upstream serves
/// captions as raw user text, so they cannot go into markup verbatim.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
