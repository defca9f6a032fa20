use anyhow::Result;
use cms_seed_core::Granularity;
use cms_seed_generator::{Splitter, load_locale};
use std::path::Path;

use super::load_config;

/// Dry run: load every locale and report what the generators would produce.
///
/// Nothing is written. Fails only if the reference locale cannot be loaded,
/// since collections are discovered from it.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(root, config_path)?;
    let content = &config.content;
    let source_dir = root.join(&content.source_dir);

    println!("Validating content at: {}", source_dir.display());
    println!("✓ Configuration valid");

    let mut reference = None;
    for locale in &content.locales {
        match load_locale(&source_dir, locale) {
            Some(stories) => {
                println!("   ✓ {}: {} keys", locale.to_uppercase(), stories.len());
                if *locale == content.reference_locale {
                    reference = Some(stories);
                }
            }
            None => println!("   ⚠ {}: no usable {}.json", locale.to_uppercase(), locale),
        }
    }

    let Some(stories) = reference else {
        anyhow::bail!(
            "Reference locale '{}' could not be loaded from {}",
            content.reference_locale,
            source_dir.display()
        );
    };

    let locale = &content.reference_locale;
    let full = Splitter::new(content, Granularity::FullPath).discover(locale, &stories);
    let top = Splitter::new(content, Granularity::TopLevel)
        .strip_locale_prefix(true)
        .discover(locale, &stories);

    println!();
    println!("Sveltia: {} collections", full.len());
    println!(
        "Tina:    {} collections ({} folders x {} locales)",
        top.len() * content.locales.len(),
        top.len(),
        content.locales.len()
    );

    Ok(())
}
