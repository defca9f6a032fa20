use cms_seed_core::config::{AdminConfig, TinaConfig};

use super::{quote, quote_list};
use crate::collection::Collection;
use crate::schema::{Field, FieldKind};

/// Field names Tina reserves for document metadata
const RESERVED_NAMES: &[&str] = &["id"];

/// Append one field as a JavaScript object literal at `indent`
fn push_field(out: &mut String, field: &Field, indent: usize) {
    let pad = " ".repeat(indent);
    let name = quote(&field.name);
    let label = quote(field.tina_label.as_deref().unwrap_or(&field.label));

    let leaf = |ty: &str, extra: &str| {
        format!(
            "{}{{ type: {}, name: {}, label: {}{} }},\n",
            pad,
            quote(ty),
            name,
            label,
            extra
        )
    };

    match &field.kind {
        FieldKind::String => out.push_str(&leaf("string", "")),
        FieldKind::Text | FieldKind::MarkdownString => {
            out.push_str(&leaf("string", ", ui: { component: \"textarea\" }"))
        }
        FieldKind::RichText => out.push_str(&leaf("rich-text", "")),
        FieldKind::Number => out.push_str(&leaf("number", "")),
        FieldKind::Boolean => out.push_str(&leaf("boolean", "")),
        FieldKind::Hidden => out.push_str(&leaf("string", ", ui: { component: \"hidden\" }")),
        // Tina stores any uploaded media through its image field
        FieldKind::File | FieldKind::Image => out.push_str(&leaf("image", "")),
        FieldKind::Datetime => out.push_str(&leaf("datetime", "")),
        FieldKind::Select(options) => {
            out.push_str(&leaf("string", &format!(", options: {}", quote_list(options))))
        }
        FieldKind::Object(fields) => {
            out.push_str(&format!("{}{{\n", pad));
            out.push_str(&format!("{}  type: \"object\",\n", pad));
            out.push_str(&format!("{}  name: {},\n", pad, name));
            out.push_str(&format!("{}  label: {},\n", pad, label));
            push_fields(out, fields, indent + 2);
            out.push_str(&format!("{}}},\n", pad));
        }
        FieldKind::List { fields, item_label } => {
            out.push_str(&format!("{}{{\n", pad));
            out.push_str(&format!("{}  type: \"object\",\n", pad));
            out.push_str(&format!("{}  list: true,\n", pad));
            out.push_str(&format!("{}  name: {},\n", pad, name));
            out.push_str(&format!("{}  label: {},\n", pad, label));
            if let Some(item_label) = item_label {
                out.push_str(&format!(
                    "{}  ui: {{ itemProps: (item) => ({{ label: item?.{} }}) }},\n",
                    pad, item_label
                ));
            }
            push_fields(out, fields, indent + 2);
            out.push_str(&format!("{}}},\n", pad));
        }
    }
}

fn push_fields(out: &mut String, fields: &[Field], indent: usize) {
    let pad = " ".repeat(indent);
    out.push_str(&format!("{}fields: [\n", pad));
    for field in fields {
        push_field(out, field, indent + 2);
    }
    out.push_str(&format!("{}],\n", pad));
}

/// Render `tina/config.ts` with one collection per (locale, folder)
pub fn render_tina_config(
    admin: &AdminConfig,
    tina: &TinaConfig,
    collections: &[Collection],
    schema: &[Field],
) -> String {
    let fields: Vec<Field> = schema
        .iter()
        .filter(|f| !RESERVED_NAMES.contains(&f.name.as_str()))
        .cloned()
        .collect();

    let mut ts = String::from("// Generated by cms-seed tina\n");
    ts.push_str("import { defineConfig } from \"tinacms\";\n\n");
    ts.push_str("export default defineConfig({\n");
    ts.push_str(&format!("  branch: {},\n", quote(&admin.branch)));
    ts.push_str("  clientId: process.env.NEXT_PUBLIC_TINA_CLIENT_ID,\n");
    ts.push_str("  token: process.env.TINA_TOKEN,\n");
    ts.push_str("  build: {\n");
    ts.push_str(&format!("    outputFolder: {},\n", quote(&tina.output_folder)));
    ts.push_str(&format!("    publicFolder: {},\n", quote(&tina.public_folder)));
    ts.push_str("  },\n");
    ts.push_str("  media: {\n");
    ts.push_str("    tina: {\n");
    ts.push_str(&format!("      mediaRoot: {},\n", quote(&tina.media_root)));
    ts.push_str(&format!("      publicFolder: {},\n", quote(&tina.public_folder)));
    ts.push_str("    },\n");
    ts.push_str("  },\n");
    ts.push_str("  schema: {\n");
    ts.push_str("    collections: [\n");

    for collection in collections {
        ts.push_str("      {\n");
        ts.push_str(&format!("        name: {},\n", quote(&collection.name)));
        ts.push_str(&format!("        label: {},\n", quote(&collection.label)));
        ts.push_str(&format!("        path: {},\n", quote(&collection.folder)));
        ts.push_str("        format: \"json\",\n");
        ts.push_str("        ui: {\n");
        ts.push_str("          allowedActions: { create: true, delete: true },\n");
        ts.push_str("        },\n");
        push_fields(&mut ts, &fields, 8);
        ts.push_str("      },\n");
    }

    ts.push_str("    ],\n");
    ts.push_str("  },\n");
    ts.push_str("});\n");
    ts
}
