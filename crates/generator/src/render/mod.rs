//! Text renderers for admin UI configuration.
//!
//! Output is built with string templates rather than serializers so the
//! generated files keep a hand-written layout (comments, flow-style leaf
//! fields) that operators are expected to edit afterwards.

pub mod html;
pub mod sveltia;
pub mod tina;

pub use html::admin_index_html;
pub use sveltia::{render_snippets_config, render_sveltia_config};
pub use tina::render_tina_config;

/// Quote a string as a double-quoted scalar (YAML and JavaScript share the
/// escape sequences used here)
///
/// Escapes backslash, double quote and control characters; everything else,
/// including non-ASCII text, passes through unchanged.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a list of strings as an inline sequence: `["a", "b"]`
pub(crate) fn quote_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}
