use anyhow::{Context, Result};
use cms_seed_core::Granularity;
use cms_seed_generator::render::render_tina_config;
use cms_seed_generator::schema::story_schema;
use cms_seed_generator::{Splitter, tina_collections};
use std::fs;
use std::path::Path;

use super::{load_config, print_split_report};

/// Split locale dictionaries and generate TinaCMS config.
///
/// Collections are grouped by top-level folder only, one per locale, which
/// keeps the count well below what Tina handles comfortably.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(root, config_path)?;

    println!("🚀 Splitting content...");
    let report = Splitter::new(&config.content, Granularity::TopLevel)
        .strip_locale_prefix(true)
        .run(root)
        .context("Failed to split content")?;
    print_split_report(&report);

    let collections = tina_collections(&report.groupings, &config.content);
    println!(
        "✓ Found {} top-level folders ({} collections)",
        report.groupings.len(),
        collections.len()
    );

    println!("⚙️  Generating {}...", config.tina.config_path.display());
    let ts = render_tina_config(&config.admin, &config.tina, &collections, &story_schema());

    let config_file = root.join(&config.tina.config_path);
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).context("Failed to create Tina config directory")?;
    }
    fs::write(&config_file, ts)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!();
    println!("✅ Done! Run 'npx tinacms dev' to start.");

    Ok(())
}
