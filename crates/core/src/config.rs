use crate::error::{Error, Result};
use crate::key::is_safe_segment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "cms-seed.toml";

/// Complete, validated project configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub content: ContentConfig,
    pub admin: AdminConfig,
    pub tina: TinaConfig,
    pub snippets: SnippetsConfig,
}

/// Source dictionaries and the split content tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    pub locales: Vec<String>,
    /// Locale whose folders drive collection discovery
    pub reference_locale: String,
    /// Directory holding `<locale>.json` files
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: String,
    /// Folder for keys too short to name one
    pub fallback_folder: String,
}

/// Sveltia admin (config.yml + index.html)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub dir: PathBuf,
    pub backend: String,
    /// Placeholder until the operator sets the real repository
    pub repo: String,
    pub branch: String,
    pub media_folder: String,
    pub public_folder: String,
}

/// TinaCMS (tina/config.ts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TinaConfig {
    pub config_path: PathBuf,
    pub output_folder: String,
    pub public_folder: String,
    pub media_root: String,
}

/// Dummy load-test content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetsConfig {
    pub count: usize,
    pub dir: PathBuf,
    pub repo: String,
    pub authors: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            locales: ["en", "de", "fr", "it"].map(String::from).to_vec(),
            reference_locale: "en".to_string(),
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("content"),
            delimiter: "/".to_string(),
            fallback_folder: "misc".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/admin"),
            backend: "github".to_string(),
            repo: "your-org/your-repo".to_string(),
            branch: "main".to_string(),
            media_folder: "public/images".to_string(),
            public_folder: "/images".to_string(),
        }
    }
}

impl Default for TinaConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("tina/config.ts"),
            output_folder: "admin".to_string(),
            public_folder: "public".to_string(),
            media_root: "images".to_string(),
        }
    }
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            count: 1500,
            dir: PathBuf::from("content/snippets"),
            repo: "YOUR_GITHUB_USERNAME/sveltia-load-test".to_string(),
            authors: ["Alice", "Bob", "Charlie"].map(String::from).to_vec(),
        }
    }
}

/// Raw TOML configuration structure
/// Every key is optional; missing keys take the defaults above
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    content: RawContent,
    #[serde(default)]
    admin: RawAdmin,
    #[serde(default)]
    tina: RawTina,
    #[serde(default)]
    snippets: RawSnippets,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContent {
    locales: Option<Vec<String>>,
    reference_locale: Option<String>,
    source_dir: Option<String>,
    output_dir: Option<String>,
    delimiter: Option<String>,
    fallback_folder: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAdmin {
    dir: Option<String>,
    backend: Option<String>,
    repo: Option<String>,
    branch: Option<String>,
    media_folder: Option<String>,
    public_folder: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTina {
    config_path: Option<String>,
    output_folder: Option<String>,
    public_folder: Option<String>,
    media_root: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSnippets {
    count: Option<usize>,
    dir: Option<String>,
    repo: Option<String>,
    authors: Option<Vec<String>>,
}

/// Parse cms-seed.toml from a file path
pub fn parse_seed_toml<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let content = fs::read_to_string(path)?;
    parse_seed_toml_str(&content)
}

/// Parse cms-seed.toml from a string (useful for testing)
pub fn parse_seed_toml_str(content: &str) -> Result<SeedConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SeedConfig::default();

    let content = ContentConfig {
        locales: raw.content.locales.unwrap_or(defaults.content.locales),
        reference_locale: raw
            .content
            .reference_locale
            .unwrap_or(defaults.content.reference_locale),
        source_dir: path_or(
            raw.content.source_dir,
            defaults.content.source_dir,
            "content.source_dir",
        )?,
        output_dir: path_or(
            raw.content.output_dir,
            defaults.content.output_dir,
            "content.output_dir",
        )?,
        delimiter: raw.content.delimiter.unwrap_or(defaults.content.delimiter),
        fallback_folder: raw
            .content
            .fallback_folder
            .unwrap_or(defaults.content.fallback_folder),
    };
    validate_content(&content)?;

    let admin = AdminConfig {
        dir: path_or(raw.admin.dir, defaults.admin.dir, "admin.dir")?,
        backend: raw.admin.backend.unwrap_or(defaults.admin.backend),
        repo: raw.admin.repo.unwrap_or(defaults.admin.repo),
        branch: raw.admin.branch.unwrap_or(defaults.admin.branch),
        media_folder: raw.admin.media_folder.unwrap_or(defaults.admin.media_folder),
        public_folder: raw.admin.public_folder.unwrap_or(defaults.admin.public_folder),
    };

    let tina = TinaConfig {
        config_path: path_or(
            raw.tina.config_path,
            defaults.tina.config_path,
            "tina.config_path",
        )?,
        output_folder: raw.tina.output_folder.unwrap_or(defaults.tina.output_folder),
        public_folder: raw.tina.public_folder.unwrap_or(defaults.tina.public_folder),
        media_root: raw.tina.media_root.unwrap_or(defaults.tina.media_root),
    };

    let snippets = SnippetsConfig {
        count: raw.snippets.count.unwrap_or(defaults.snippets.count),
        dir: path_or(raw.snippets.dir, defaults.snippets.dir, "snippets.dir")?,
        repo: raw.snippets.repo.unwrap_or(defaults.snippets.repo),
        authors: raw.snippets.authors.unwrap_or(defaults.snippets.authors),
    };
    if snippets.authors.is_empty() {
        return Err(Error::ConfigParse(
            "snippets.authors must name at least one author".to_string(),
        ));
    }

    Ok(SeedConfig {
        content,
        admin,
        tina,
        snippets,
    })
}

/// Load the project file if it exists, otherwise fall back to defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path = path.as_ref();
    if path.exists() {
        parse_seed_toml(path)
    } else {
        Ok(SeedConfig::default())
    }
}

fn path_or(value: Option<String>, default: PathBuf, field_name: &str) -> Result<PathBuf> {
    match value {
        Some(v) => validate_path(&v, field_name),
        None => Ok(default),
    }
}

fn validate_content(content: &ContentConfig) -> Result<()> {
    if content.locales.is_empty() {
        return Err(Error::ConfigParse(
            "content.locales must list at least one locale".to_string(),
        ));
    }

    for locale in &content.locales {
        if locale.trim().is_empty() || !is_safe_segment(locale) {
            return Err(Error::ConfigParse(format!(
                "Invalid locale identifier in 'content.locales': '{}'",
                locale
            )));
        }
    }

    if !content.locales.contains(&content.reference_locale) {
        return Err(Error::ConfigParse(format!(
            "content.reference_locale '{}' is not one of the configured locales [{}]",
            content.reference_locale,
            content.locales.join(", ")
        )));
    }

    if content.delimiter.is_empty() {
        return Err(Error::ConfigParse(
            "content.delimiter must not be empty".to_string(),
        ));
    }

    if content.fallback_folder.trim().is_empty()
        || content.fallback_folder.contains(&content.delimiter)
        || !is_safe_segment(&content.fallback_folder)
    {
        return Err(Error::ConfigParse(format!(
            "content.fallback_folder must be a single non-empty segment, got '{}'",
            content.fallback_folder
        )));
    }

    Ok(())
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and paths containing parent directory references
/// (`..`), so a project file can only point inside the project root.
///
/// ```text
/// validate_path("content", "content.output_dir")        → Ok(PathBuf)
/// validate_path("/etc", "content.output_dir")           → Err("Absolute paths not allowed...")
/// validate_path("../elsewhere", "content.output_dir")   → Err("Parent directory references...")
/// ```
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    // Reject absolute paths
    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}
