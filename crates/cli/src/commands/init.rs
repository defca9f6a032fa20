use anyhow::{Context, Result};
use cms_seed_core::config::{CONFIG_FILE_NAME, parse_seed_toml_str};
use std::fs;
use std::path::Path;

/// Escape a string for safe inclusion in a TOML basic string
///
/// Handles the required escape sequences for TOML basic strings:
/// - Backslash (\\) -> \\\\
/// - Quote (\") -> \\\"
/// - Backspace (\b) -> \\b
/// - Form feed (\f) -> \\f
/// - Newline (\n) -> \\n
/// - Carriage return (\r) -> \\r
/// - Tab (\t) -> \\t
///
/// The project file is a commented template, so it is assembled by hand
/// rather than serialized with the toml crate.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Validate a `owner/name` repository identifier
fn is_valid_repo(repo: &str) -> bool {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 {
        return false;
    }

    let valid_part = |p: &str| {
        !p.is_empty()
            && p != "."
            && p != ".."
            && p.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    };

    valid_part(parts[0]) && valid_part(parts[1])
}

/// Write a commented cms-seed.toml into an existing project root.
///
/// # Errors
///
/// Returns an error if:
/// - The directory doesn't exist
/// - cms-seed.toml already exists
/// - `repo` is not an `owner/name` identifier
/// - the generated file does not parse back into a valid configuration
pub fn run(root: &Path, repo: Option<String>, locales: Option<Vec<String>>) -> Result<()> {
    println!("Initializing project: {}", root.display());

    if !root.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            root.display(),
            root.display()
        );
    }

    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE_NAME,
            config_path.display()
        );
    }

    generate_seed_toml(root, repo.as_deref(), locales.as_deref())?;

    println!("\n✓ Wrote {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} (set repo, locales, output folders)", CONFIG_FILE_NAME);
    println!("  2. Put one <locale>.json per locale into the source directory");
    println!("  3. Check: cms-seed validate --root {}", root.display());
    println!("  4. Generate: cms-seed sveltia (or cms-seed tina)");

    Ok(())
}

fn generate_seed_toml(root: &Path, repo: Option<&str>, locales: Option<&[String]>) -> Result<()> {
    if let Some(r) = repo
        && !is_valid_repo(r)
    {
        anyhow::bail!("Invalid repository '{}', expected owner/name", r);
    }

    let repo_value = toml_escape_string(repo.unwrap_or("your-org/your-repo"));
    let repo_comment = if repo.is_some() {
        ""
    } else {
        "  # TODO: Set repository"
    };

    let default_locales = ["en", "de", "fr", "it"].map(String::from);
    let locales = match locales {
        Some(l) if !l.is_empty() => l,
        _ => &default_locales[..],
    };
    let locale_list = locales
        .iter()
        .map(|l| format!("\"{}\"", toml_escape_string(l.trim())))
        .collect::<Vec<_>>()
        .join(", ");
    let reference_locale = toml_escape_string(locales[0].trim());

    let toml = format!(
        "# Generated by cms-seed init\n\
# Edit this file to customize content splitting and admin config\n\
\n\
[content]\n\
locales = [{locale_list}]\n\
reference_locale = \"{reference_locale}\"  # Collections are discovered from this locale\n\
source_dir = \".\"          # Where <locale>.json files live\n\
output_dir = \"content\"\n\
delimiter = \"/\"\n\
fallback_folder = \"misc\"  # Folder for keys without one\n\
\n\
[admin]\n\
dir = \"public/admin\"\n\
backend = \"github\"\n\
repo = \"{repo_value}\"{repo_comment}\n\
branch = \"main\"\n\
media_folder = \"public/images\"\n\
public_folder = \"/images\"\n\
\n\
[tina]\n\
config_path = \"tina/config.ts\"\n\
output_folder = \"admin\"\n\
public_folder = \"public\"\n\
media_root = \"images\"\n\
\n\
[snippets]\n\
count = 1500\n\
dir = \"content/snippets\"\n\
repo = \"YOUR_GITHUB_USERNAME/sveltia-load-test\"\n\
authors = [\"Alice\", \"Bob\", \"Charlie\"]\n"
    );

    // Validate the generated file against the real config parser
    parse_seed_toml_str(&toml)
        .context("Generated cms-seed.toml is invalid - check the locales you passed")?;

    fs::write(root.join(CONFIG_FILE_NAME), toml)?;

    Ok(())
}
