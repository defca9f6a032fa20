use cms_seed_core::config::{AdminConfig, ContentConfig, SnippetsConfig};
use cms_seed_core::{Error, Result};

use super::{quote, quote_list};
use crate::collection::Collection;
use crate::schema::{Field, FieldKind};

fn widget(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "string",
        FieldKind::Text => "string",
        FieldKind::RichText | FieldKind::MarkdownString => "markdown",
        FieldKind::Number => "number",
        FieldKind::Boolean => "boolean",
        FieldKind::Hidden => "hidden",
        FieldKind::File => "file",
        FieldKind::Image => "image",
        FieldKind::Datetime => "datetime",
        FieldKind::Select(_) => "select",
        FieldKind::Object(_) => "object",
        FieldKind::List { .. } => "list",
    }
}

/// Append one field (and its children) as a YAML sequence item at `indent`
fn push_field(out: &mut String, field: &Field, indent: usize) {
    let pad = " ".repeat(indent);

    let Some(children) = field.children() else {
        let mut parts = vec![
            format!("label: {}", quote(&field.label)),
            format!("name: {}", quote(&field.name)),
            format!("widget: {}", quote(widget(&field.kind))),
        ];
        if let FieldKind::Select(options) = &field.kind {
            parts.push(format!("options: {}", quote_list(options)));
        }
        if field.optional {
            parts.push("required: false".to_string());
        }
        if let Some(i18n) = field.i18n {
            parts.push(format!("i18n: {}", i18n));
        }
        out.push_str(&format!("{}- {{{}}}\n", pad, parts.join(", ")));
        return;
    };

    out.push_str(&format!("{}- label: {}\n", pad, quote(&field.label)));
    out.push_str(&format!("{}  name: {}\n", pad, quote(&field.name)));
    out.push_str(&format!("{}  widget: {}\n", pad, quote(widget(&field.kind))));
    if let FieldKind::List {
        item_label: Some(item_label),
        ..
    } = &field.kind
    {
        let summary = format!("{{{{fields.{}}}}}", item_label);
        out.push_str(&format!("{}  summary: {}\n", pad, quote(&summary)));
    }
    if field.optional {
        out.push_str(&format!("{}  required: false\n", pad));
    }
    if let Some(i18n) = field.i18n {
        out.push_str(&format!("{}  i18n: {}\n", pad, i18n));
    }
    out.push_str(&format!("{}  fields:\n", pad));
    for child in children {
        push_field(out, child, indent + 4);
    }
}

fn push_backend(out: &mut String, admin: &AdminConfig, repo: &str) {
    out.push_str("backend:\n");
    out.push_str(&format!("  name: {}\n", quote(&admin.backend)));
    out.push_str(&format!(
        "  repo: {}  # TODO: set to your repository\n",
        quote(repo)
    ));
    out.push_str(&format!("  branch: {}\n", quote(&admin.branch)));
    out.push('\n');
}

fn push_media(out: &mut String, admin: &AdminConfig) {
    out.push_str(&format!("media_folder: {}\n", quote(&admin.media_folder)));
    out.push_str(&format!("public_folder: {}\n", quote(&admin.public_folder)));
    out.push('\n');
}

/// Re-parse generated YAML so a templating mistake fails here, not in the browser
fn validated(yaml: String) -> Result<String> {
    serde_yaml::from_str::<serde_yaml::Value>(&yaml).map_err(|e| {
        Error::InvalidData(format!(
            "Generated config.yml is invalid - this is a bug in the template generator: {}",
            e
        ))
    })?;
    Ok(yaml)
}

/// Render Sveltia `config.yml` for the split story collections
pub fn render_sveltia_config(
    admin: &AdminConfig,
    content: &ContentConfig,
    collections: &[Collection],
    schema: &[Field],
) -> Result<String> {
    let mut yaml = String::from("# Generated by cms-seed sveltia\n\n");

    push_backend(&mut yaml, admin, &admin.repo);

    yaml.push_str("i18n:\n");
    yaml.push_str("  structure: multiple_folders\n");
    yaml.push_str(&format!("  locales: {}\n", quote_list(&content.locales)));
    yaml.push_str(&format!(
        "  default_locale: {}\n",
        quote(&content.reference_locale)
    ));
    yaml.push('\n');

    push_media(&mut yaml, admin);

    // Quick search lags badly with thousands of entries
    yaml.push_str("search: false\n\n");

    if collections.is_empty() {
        yaml.push_str("collections: []\n");
        return validated(yaml);
    }

    yaml.push_str("collections:\n");
    for collection in collections {
        yaml.push_str(&format!("  - name: {}\n", quote(&collection.name)));
        yaml.push_str(&format!("    label: {}\n", quote(&collection.label)));
        yaml.push_str(&format!("    folder: {}\n", quote(&collection.folder)));
        yaml.push_str("    create: true\n");
        yaml.push_str("    i18n: true\n");
        yaml.push_str("    path: \"{{slug}}\"\n");
        yaml.push_str("    extension: \"json\"\n");
        yaml.push_str("    format: \"json\"\n");
        yaml.push_str("    fields:\n");
        for field in schema {
            push_field(&mut yaml, field, 6);
        }
        yaml.push('\n');
    }

    validated(yaml)
}

/// Render Sveltia `config.yml` for the dummy snippets collection
pub fn render_snippets_config(
    admin: &AdminConfig,
    snippets: &SnippetsConfig,
    folder: &str,
    schema: &[Field],
) -> Result<String> {
    let mut yaml = String::from("# Generated by cms-seed snippets\n\n");

    push_backend(&mut yaml, admin, &snippets.repo);
    push_media(&mut yaml, admin);

    yaml.push_str("collections:\n");
    yaml.push_str("  - name: \"snippets\"\n");
    yaml.push_str("    label: \"Text Snippets\"\n");
    yaml.push_str(&format!("    folder: {}\n", quote(folder)));
    yaml.push_str("    create: true\n");
    yaml.push_str("    slug: \"{{slug}}\"\n");
    yaml.push_str("    format: \"json\"\n");
    yaml.push_str("    extension: \"json\"\n");
    yaml.push_str("    fields:\n");
    for field in schema {
        push_field(&mut yaml, field, 6);
    }

    validated(yaml)
}
