//! Field schemas declared for generated collections.
//!
//! The story schema is hand-authored: it lists the fields the content is
//! known to use and is not inferred from the records. Renderers translate it
//! into each admin tool's own widget vocabulary.

/// Editing widget for a field, independent of any admin tool
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text
    String,
    /// Plain text: a single-line input in Sveltia, a textarea in Tina
    Text,
    /// Markdown / rich text
    RichText,
    /// Markdown kept as a plain JSON string.
    ///
    /// Sveltia edits it with its markdown widget. Tina's rich-text type
    /// stores an AST object, so Tina gets a textarea instead.
    MarkdownString,
    Number,
    Boolean,
    /// Stored but not shown to editors
    Hidden,
    File,
    Image,
    Datetime,
    Select(Vec<String>),
    Object(Vec<Field>),
    List {
        fields: Vec<Field>,
        /// Item field used as the list entry's summary
        item_label: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Emitted as `required: false` where the tool defaults to required
    pub optional: bool,
    /// Per-field localization flag, `None` inherits the collection's setting
    pub i18n: Option<bool>,
    /// Label shown by Tina when it differs from `label`
    pub tina_label: Option<String>,
}

impl Field {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            optional: false,
            i18n: None,
            tina_label: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn i18n(mut self, localized: bool) -> Self {
        self.i18n = Some(localized);
        self
    }

    pub fn tina_label(mut self, label: &str) -> Self {
        self.tina_label = Some(label.to_string());
        self
    }

    /// Nested fields of an object or list field
    pub fn children(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Object(fields) | FieldKind::List { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

fn list(item_label: &str, fields: Vec<Field>) -> FieldKind {
    FieldKind::List {
        fields,
        item_label: Some(item_label.to_string()),
    }
}

/// Fields of a story's `content` object
fn content_fields() -> Vec<Field> {
    use FieldKind::*;

    vec![
        // Basic text
        Field::new("Text", "Text", Text).optional(),
        Field::new("Title", "Title", String).optional(),
        Field::new("SubText", "Sub Text", RichText)
            .optional()
            .tina_label("Sub Text (Markdown)"),
        Field::new("MainText", "Main Text", RichText)
            .optional()
            .tina_label("Main Text (Markdown)"),
        Field::new("BoxTitle", "Box Title", String).optional(),
        Field::new("TooltipText", "Tooltip Text", String).optional(),
        Field::new("ContentExample", "Content Example", String).optional(),
        // Attachments
        Field::new(
            "PDF",
            "PDF Attachment",
            Object(vec![
                Field::new("filename", "File", File).optional(),
                Field::new("alt", "Alt", String)
                    .optional()
                    .tina_label("Alt Text"),
            ]),
        )
        .optional(),
        Field::new(
            "Icon",
            "Icon",
            Object(vec![
                Field::new("filename", "Image", Image).optional(),
                Field::new("name", "Name", String).optional(),
            ]),
        )
        .optional(),
        // Lists
        Field::new(
            "Links",
            "Links",
            list(
                "title",
                vec![
                    Field::new("title", "Title", String),
                    Field::new("subtitle", "Subtitle", String),
                    Field::new(
                        "link",
                        "Link Target",
                        Object(vec![Field::new("url", "URL", String)]),
                    ),
                ],
            ),
        )
        .optional(),
        Field::new(
            "Releases",
            "Releases",
            list(
                "ReleaseTitle",
                vec![
                    Field::new("ReleaseTitle", "Version", String),
                    Field::new("ReleaseDate", "Date", Datetime),
                    Field::new("Content", "Notes", MarkdownString),
                ],
            ),
        )
        .optional(),
        Field::new("component", "Component", Hidden).tina_label("Component Type"),
    ]
}

/// Schema shared by every generated story collection
pub fn story_schema() -> Vec<Field> {
    vec![
        Field::new("id", "ID", FieldKind::Number)
            .optional()
            .i18n(false),
        Field::new("full_slug", "Full Slug", FieldKind::Hidden)
            .i18n(false)
            .tina_label("Slug"),
        Field::new("content", "Content", FieldKind::Object(content_fields()))
            .i18n(true)
            .tina_label("Content Data"),
    ]
}

/// Schema of the dummy load-test snippets
pub fn snippet_schema(authors: &[String]) -> Vec<Field> {
    vec![
        Field::new("title", "Title", FieldKind::String),
        Field::new("body", "Body", FieldKind::RichText),
        Field::new("author", "Author", FieldKind::Select(authors.to_vec())),
        Field::new("draft", "Draft", FieldKind::Boolean),
    ]
}
