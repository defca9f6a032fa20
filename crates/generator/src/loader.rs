use cms_seed_core::StoryMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of a locale's source dictionary (`<dir>/<locale>.json`)
pub fn locale_source_path(source_dir: &Path, locale: &str) -> PathBuf {
    source_dir.join(format!("{}.json", locale))
}

/// Load one locale's source dictionary.
///
/// A missing, unreadable or malformed file is not fatal: it is logged and
/// `None` is returned so the remaining locales still process.
pub fn load_locale(source_dir: &Path, locale: &str) -> Option<StoryMap> {
    let source_file = locale_source_path(source_dir, locale);

    if !source_file.exists() {
        tracing::warn!(locale, path = %source_file.display(), "Missing source file, skipping locale");
        return None;
    }

    let content = match fs::read_to_string(&source_file) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                locale,
                path = %source_file.display(),
                error = %e,
                "Unreadable source file, skipping locale"
            );
            return None;
        }
    };

    match serde_json::from_str::<StoryMap>(&content) {
        Ok(stories) => {
            tracing::debug!(locale, keys = stories.len(), "Loaded source file");
            Some(stories)
        }
        Err(e) => {
            tracing::error!(
                locale,
                path = %source_file.display(),
                error = %e,
                "Malformed source file, skipping locale"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locale_source_path() {
        assert_eq!(
            locale_source_path(Path::new("data"), "de"),
            PathBuf::from("data").join("de.json")
        );
    }

    #[test]
    fn test_load_locale_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_locale(dir.path(), "en").is_none());
    }

    #[test]
    fn test_load_locale_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{"zeta/last": {}, "alpha/first": {}, "mid/middle": {}}"#,
        )
        .unwrap();

        let stories = load_locale(dir.path(), "en").unwrap();
        let keys: Vec<&str> = stories.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta/last", "alpha/first", "mid/middle"]);
    }

    #[test]
    fn test_load_locale_malformed_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fr.json"), "{ not json").unwrap();
        assert!(load_locale(dir.path(), "fr").is_none());
    }

    #[test]
    fn test_load_locale_top_level_not_object() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("it.json"), r#"["portal/a", "portal/b"]"#).unwrap();
        assert!(load_locale(dir.path(), "it").is_none());
    }

    #[test]
    fn test_load_locale_empty_object() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.json"), "{}").unwrap();
        let stories = load_locale(dir.path(), "de").unwrap();
        assert!(stories.is_empty());
    }
}
