/// Sveltia CMS bundle served from a public CDN
pub const SVELTIA_CDN_URL: &str = "https://unpkg.com/@sveltia/cms/dist/sveltia-cms.js";

/// HTML-escape a string for text and attribute content
///
/// Escapes: & < > " '
fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Minimal admin entry page that boots the CMS from the CDN
pub fn admin_index_html(title: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <script src="{src}"></script>
  </head>
  <body></body>
</html>
"#,
        title = html_escape(title),
        src = SVELTIA_CDN_URL,
    )
}
