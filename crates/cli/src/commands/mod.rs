pub mod init;
pub mod snippets;
pub mod sveltia;
pub mod tina;
pub mod validate;

use anyhow::{Context, Result};
use cms_seed_core::SeedConfig;
use cms_seed_core::config::{CONFIG_FILE_NAME, load_or_default, parse_seed_toml};
use cms_seed_generator::SplitReport;
use std::path::Path;

/// Resolve the project configuration.
///
/// An explicit `--config` must exist; the default `<root>/cms-seed.toml` is
/// optional and falls back to built-in defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<SeedConfig> {
    match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading explicit config");
            parse_seed_toml(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))
        }
        None => {
            let path = root.join(CONFIG_FILE_NAME);
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
            }
            load_or_default(&path)
                .with_context(|| format!("Failed to load config file {}", path.display()))
        }
    }
}

/// Print the per-locale outcome of a split run
pub fn print_split_report(report: &SplitReport) {
    for (locale, written) in &report.processed {
        println!("   ✓ {}: {} files", locale.to_uppercase(), written);
    }
    for locale in &report.skipped {
        println!("   ⚠ {}: skipped (no usable {}.json)", locale.to_uppercase(), locale);
    }
    for (locale, key) in &report.rejected {
        println!("   ⚠ {}: skipped unsafe key '{}'", locale.to_uppercase(), key);
    }
    println!("✓ Wrote {} files", report.files_written());
}
