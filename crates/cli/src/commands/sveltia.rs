use anyhow::{Context, Result};
use cms_seed_core::Granularity;
use cms_seed_generator::render::{admin_index_html, render_sveltia_config};
use cms_seed_generator::schema::story_schema;
use cms_seed_generator::{Splitter, sveltia_collections};
use std::fs;
use std::path::Path;

use super::{load_config, print_split_report};

/// Split locale dictionaries into per-path files and generate Sveltia config.
///
/// Every distinct folder of the reference locale becomes its own collection.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(root, config_path)?;

    println!("🚀 Splitting content...");
    let report = Splitter::new(&config.content, Granularity::FullPath)
        .run(root)
        .context("Failed to split content")?;
    print_split_report(&report);
    println!("✓ Found {} unique collections", report.groupings.len());

    println!("⚙️  Generating config.yml...");
    let collections = sveltia_collections(&report.groupings, &config.content);
    let yaml = render_sveltia_config(&config.admin, &config.content, &collections, &story_schema())?;

    let admin_dir = root.join(&config.admin.dir);
    fs::create_dir_all(&admin_dir).context("Failed to create admin directory")?;
    fs::write(admin_dir.join("config.yml"), yaml).context("Failed to write config.yml")?;
    fs::write(admin_dir.join("index.html"), admin_index_html("Sveltia CMS"))
        .context("Failed to write index.html")?;
    println!("   ✓ Generated {}", admin_dir.join("config.yml").display());

    println!();
    println!("🎉 Done! Serve the project root and open /{}/", config.admin.dir.display());
    println!("   e.g. cd {} && python3 -m http.server 8000", root.display());

    Ok(())
}
