use anyhow::{Context, Result};
use cms_seed_generator::config_path_string;
use cms_seed_generator::render::{admin_index_html, render_snippets_config};
use cms_seed_generator::schema::snippet_schema;
use cms_seed_generator::snippets::generate_snippets;
use std::fs;
use std::path::Path;

use super::load_config;

/// Generate dummy snippets plus a single flat Sveltia collection
pub fn run(root: &Path, config_path: Option<&Path>, count: Option<usize>) -> Result<()> {
    let config = load_config(root, config_path)?;
    let count = count.unwrap_or(config.snippets.count);
    let snippets_dir = root.join(&config.snippets.dir);
    let admin_dir = root.join(&config.admin.dir);

    println!("🚀 Generating {} dummy files...", count);
    let written = generate_snippets(
        &snippets_dir,
        count,
        &config.snippets.authors,
        &mut rand::rng(),
    )
    .with_context(|| format!("Failed to write snippets to {}", snippets_dir.display()))?;
    println!("   ✓ Wrote {} files to {}", written.len(), snippets_dir.display());

    println!("⚙️  Generating config.yml...");
    fs::create_dir_all(&admin_dir).context("Failed to create admin directory")?;
    let yaml = render_snippets_config(
        &config.admin,
        &config.snippets,
        &config_path_string(&config.snippets.dir),
        &snippet_schema(&config.snippets.authors),
    )?;
    fs::write(admin_dir.join("config.yml"), yaml).context("Failed to write config.yml")?;
    println!("   ✓ Generated config.yml");

    fs::write(admin_dir.join("index.html"), admin_index_html("Load Test CMS"))
        .context("Failed to write index.html")?;
    println!("   ✓ Generated index.html");

    println!();
    println!("✅ Done!");
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", root.display());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_snippets_and_admin() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), None, Some(5)).unwrap();

        let files = fs::read_dir(dir.path().join("content").join("snippets"))
            .unwrap()
            .count();
        assert_eq!(files, 5);

        let admin = dir.path().join("public").join("admin");
        let yaml = fs::read_to_string(admin.join("config.yml")).unwrap();
        assert!(yaml.contains("folder: \"content/snippets\""));
        assert!(yaml.contains("name: \"snippets\""));

        let html = fs::read_to_string(admin.join("index.html")).unwrap();
        assert!(html.contains("<title>Load Test CMS</title>"));
    }

    #[test]
    fn test_run_uses_config_count() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cms-seed.toml"),
            "[snippets]\ncount = 3\ndir = \"data/dummy\"\n",
        )
        .unwrap();

        run(dir.path(), None, None).unwrap();

        let files = fs::read_dir(dir.path().join("data").join("dummy"))
            .unwrap()
            .count();
        assert_eq!(files, 3);
    }
}
