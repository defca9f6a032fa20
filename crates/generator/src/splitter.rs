//! Split per-locale dictionaries into one JSON file per record.
//!
//! Every `(locale, key, record)` triple lands at
//! `<output>/<locale>/<folders...>/<stem>.json`. While writing, the folder
//! groupings of the reference locale are collected so a collection list can
//! be generated from them afterwards.

use cms_seed_core::config::ContentConfig;
use cms_seed_core::{Error, Granularity, Result, SplitKey, StoryMap, split_key, split_localized_key};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::load_locale;

/// Outcome of a split run
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Distinct groupings seen in the reference locale, sorted
    pub groupings: BTreeSet<String>,
    /// (locale, files written) for every locale that loaded
    pub processed: Vec<(String, usize)>,
    /// Locales whose source file was missing or unusable
    pub skipped: Vec<String>,
    /// (locale, key) pairs not written because a segment would leave the
    /// locale directory
    pub rejected: Vec<(String, String)>,
}

impl SplitReport {
    pub fn files_written(&self) -> usize {
        self.processed.iter().map(|(_, n)| n).sum()
    }
}

pub struct Splitter<'a> {
    config: &'a ContentConfig,
    granularity: Granularity,
    strip_locale_prefix: bool,
}

impl<'a> Splitter<'a> {
    pub fn new(config: &'a ContentConfig, granularity: Granularity) -> Self {
        Self {
            config,
            granularity,
            strip_locale_prefix: false,
        }
    }

    /// Drop a leading key segment equal to the locale being processed
    pub fn strip_locale_prefix(mut self, strip: bool) -> Self {
        self.strip_locale_prefix = strip;
        self
    }

    /// Resolve a key as it would be written for `locale`
    pub fn split(&self, locale: &str, key: &str) -> SplitKey {
        let delimiter = &self.config.delimiter;
        let fallback = &self.config.fallback_folder;
        if self.strip_locale_prefix {
            split_localized_key(key, delimiter, fallback, locale)
        } else {
            split_key(key, delimiter, fallback)
        }
    }

    /// Groupings a locale's dictionary would produce, without writing anything
    pub fn discover(&self, locale: &str, stories: &StoryMap) -> BTreeSet<String> {
        stories
            .keys()
            .map(|key| self.split(locale, key))
            .filter(|split| split.unsafe_segment().is_none())
            .map(|split| split.grouping(self.granularity))
            .collect()
    }

    /// Load and split every configured locale below `root`.
    ///
    /// Locales without a usable source file are skipped; any write failure
    /// aborts the run, leaving already written files in place.
    pub fn run(&self, root: &Path) -> Result<SplitReport> {
        let source_dir = root.join(&self.config.source_dir);
        let mut report = SplitReport::default();

        for locale in &self.config.locales {
            match load_locale(&source_dir, locale) {
                Some(stories) => self.split_locale(root, locale, &stories, &mut report)?,
                None => report.skipped.push(locale.clone()),
            }
        }

        Ok(report)
    }

    /// Write every record of one locale and record its groupings
    pub fn split_locale(
        &self,
        root: &Path,
        locale: &str,
        stories: &StoryMap,
        report: &mut SplitReport,
    ) -> Result<()> {
        tracing::info!(locale, records = stories.len(), "Processing locale");

        let is_reference = locale == self.config.reference_locale;
        let mut written = 0;

        for (key, story) in stories {
            let split = self.split(locale, key);
            if let Some(segment) = split.unsafe_segment() {
                tracing::warn!(locale, key = %key, segment, "Unsafe path key, skipping record");
                report.rejected.push((locale.to_string(), key.clone()));
                continue;
            }
            self.write_story(root, locale, &split, story)?;
            written += 1;

            if is_reference {
                report.groupings.insert(split.grouping(self.granularity));
            }
        }

        report.processed.push((locale.to_string(), written));
        Ok(())
    }

    /// Write one record, creating any missing directories
    pub fn write_story(
        &self,
        root: &Path,
        locale: &str,
        split: &SplitKey,
        story: &Value,
    ) -> Result<PathBuf> {
        if let Some(segment) = split.unsafe_segment() {
            return Err(Error::InvalidData(format!(
                "Path segment '{}' would leave the {} output directory",
                segment, locale
            )));
        }

        let output_file = root
            .join(&self.config.output_dir)
            .join(locale)
            .join(split.relative_path());

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output_file, serde_json::to_string_pretty(story)?)?;
        tracing::debug!(path = %output_file.display(), "Wrote story");

        Ok(output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn stories(value: Value) -> StoryMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    fn write_source(dir: &Path, locale: &str, value: &Value) {
        fs::write(
            dir.join(format!("{}.json", locale)),
            serde_json::to_string(value).unwrap(),
        )
        .unwrap();
    }

    fn json_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_write_story_path_and_content() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);

        let split = splitter.split("en", "portal/difficulty/easy");
        let story = json!({"content": {"Title": "Easy"}});
        let path = splitter
            .write_story(dir.path(), "en", &split, &story)
            .unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("content")
                .join("en")
                .join("portal")
                .join("difficulty")
                .join("easy.json")
        );

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, story);
    }

    #[test]
    fn test_write_story_fallback_folder() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);

        let split = splitter.split("en", "standalone");
        let path = splitter
            .write_story(dir.path(), "en", &split, &json!({}))
            .unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("content")
                .join("en")
                .join("misc")
                .join("standalone.json")
        );
    }

    #[test]
    fn test_write_story_pretty_and_unicode() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);

        let split = splitter.split("de", "portal/gruss");
        let story = json!({"Title": "Grüße", "Text": "日本語"});
        let path = splitter
            .write_story(dir.path(), "de", &split, &story)
            .unwrap();

        let raw = fs::read_to_string(path).unwrap();
        assert_eq!(raw, "{\n  \"Title\": \"Grüße\",\n  \"Text\": \"日本語\"\n}");
    }

    #[test]
    fn test_write_story_is_byte_identical_on_rerun() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);
        let split = splitter.split("en", "a/b/c");
        let story = json!({"z": 1, "a": [1, 2, {"k": null}]});

        let path = splitter.write_story(dir.path(), "en", &split, &story).unwrap();
        let first = fs::read(&path).unwrap();
        splitter.write_story(dir.path(), "en", &split, &story).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_split_locale_groupings_full_path() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);
        let mut report = SplitReport::default();

        let en = stories(json!({
            "portal/difficulty/easy": {},
            "portal/difficulty/hard": {},
            "portal/home": {},
            "standalone": {}
        }));
        splitter
            .split_locale(dir.path(), "en", &en, &mut report)
            .unwrap();

        let groupings: Vec<&str> = report.groupings.iter().map(String::as_str).collect();
        assert_eq!(groupings, vec!["misc", "portal", "portal/difficulty"]);
        assert_eq!(report.processed, vec![("en".to_string(), 4)]);
    }

    #[test]
    fn test_split_locale_groupings_top_level() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::TopLevel);
        let mut report = SplitReport::default();

        let en = stories(json!({
            "portal/difficulty/easy": {},
            "portal/home": {},
            "settings/profile/name": {}
        }));
        splitter
            .split_locale(dir.path(), "en", &en, &mut report)
            .unwrap();

        let groupings: Vec<&str> = report.groupings.iter().map(String::as_str).collect();
        assert_eq!(groupings, vec!["portal", "settings"]);
    }

    #[test]
    fn test_only_reference_locale_registers_groupings() {
        let dir = TempDir::new().unwrap();
        let config = ContentConfig::default();
        let splitter = Splitter::new(&config, Granularity::FullPath);
        let mut report = SplitReport::default();

        let de = stories(json!({"nur/deutsch/seite": {}}));
        splitter
            .split_locale(dir.path(), "de", &de, &mut report)
            .unwrap();

        assert!(report.groupings.is_empty());
        assert!(
            dir.path()
                .join("content/de/nur/deutsch/seite.json")
                .exists()
        );
    }

    #[test]
    fn test_run_skips_missing_locale() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "en", &json!({"portal/a": {"x": 1}}));
        write_source(dir.path(), "fr", &json!({"portal/a": {"x": 2}}));

        let config = ContentConfig::default();
        let report = Splitter::new(&config, Granularity::FullPath)
            .run(dir.path())
            .unwrap();

        assert_eq!(report.skipped, vec!["de".to_string(), "it".to_string()]);
        assert_eq!(report.files_written(), 2);
        assert!(!dir.path().join("content").join("de").exists());
        assert!(!dir.path().join("content").join("it").exists());
        assert!(dir.path().join("content/fr/portal/a.json").exists());
    }

    #[test]
    fn test_run_skips_malformed_locale() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "en", &json!({"portal/a": {}}));
        fs::write(dir.path().join("de.json"), "{ broken").unwrap();

        let config = ContentConfig::default();
        let report = Splitter::new(&config, Granularity::FullPath)
            .run(dir.path())
            .unwrap();

        assert!(report.skipped.contains(&"de".to_string()));
        assert_eq!(report.processed, vec![("en".to_string(), 1)]);
    }

    #[test]
    fn test_run_round_trip_all_files() {
        let dir = TempDir::new().unwrap();
        let en = json!({
            "portal/difficulty/easy": {"content": {"Title": "Easy", "Links": [{"title": "a"}]}},
            "portal/home": {"content": {"MainText": "# Hi"}},
            "standalone": {"id": 7}
        });
        write_source(dir.path(), "en", &en);

        let config = ContentConfig::default();
        Splitter::new(&config, Granularity::FullPath)
            .run(dir.path())
            .unwrap();

        let files = json_files(&dir.path().join("content"));
        assert_eq!(files.len(), 3);

        for (key, story) in en.as_object().unwrap() {
            let split = split_key(key, "/", "misc");
            let path = dir
                .path()
                .join("content")
                .join("en")
                .join(split.relative_path());
            let read_back: Value =
                serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(&read_back, story, "key: {}", key);
        }
    }

    #[test]
    fn test_strip_locale_prefix() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "de", &json!({"de/portal/easy": {"t": "leicht"}}));

        let config = ContentConfig::default();
        Splitter::new(&config, Granularity::TopLevel)
            .strip_locale_prefix(true)
            .run(dir.path())
            .unwrap();

        assert!(dir.path().join("content/de/portal/easy.json").exists());
        assert!(!dir.path().join("content/de/de").exists());
    }

    #[test]
    fn test_full_path_count_at_least_top_level_count() {
        let config = ContentConfig::default();
        let fixtures = [
            json!({"a/b/c": {}, "a/d/e": {}, "f/g": {}, "h": {}}),
            json!({"one/two": {}, "one/three": {}}),
            json!({"x": {}, "y": {}}),
            json!({"p/q/r/s": {}, "p/q/r/t": {}, "p/q/u": {}, "v/w/x": {}}),
        ];

        for fixture in fixtures {
            let map = stories(fixture);
            let full = Splitter::new(&config, Granularity::FullPath).discover("en", &map);
            let top = Splitter::new(&config, Granularity::TopLevel).discover("en", &map);
            assert!(full.len() >= top.len(), "{:?} vs {:?}", full, top);
        }
    }

    #[test]
    fn test_discover_matches_split_example() {
        let config = ContentConfig::default();
        let map = stories(json!({"portal/difficulty/easy": {}}));

        let full = Splitter::new(&config, Granularity::FullPath).discover("en", &map);
        let top = Splitter::new(&config, Granularity::TopLevel).discover("en", &map);

        assert_eq!(full.into_iter().collect::<Vec<_>>(), vec!["portal/difficulty"]);
        assert_eq!(top.into_iter().collect::<Vec<_>>(), vec!["portal"]);
    }

    #[test]
    fn test_run_rejects_keys_leaving_output_tree() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();
        write_source(
            &project,
            "en",
            &json!({
                "../../../outside/pwned": {"x": 1},
                "a//b": {"x": 2},
                "portal/": {"x": 3},
                "portal/ok": {"x": 4}
            }),
        );

        let config = ContentConfig::default();
        let report = Splitter::new(&config, Granularity::FullPath)
            .run(&project)
            .unwrap();

        assert_eq!(report.files_written(), 1);
        assert_eq!(report.rejected.len(), 3);
        assert_eq!(report.groupings.into_iter().collect::<Vec<_>>(), vec!["portal"]);

        assert!(!dir.path().join("outside").exists());
        assert!(!project.join("content/en/portal/.json").exists());
        assert_eq!(
            json_files(dir.path()),
            vec![
                project.join("content/en/portal/ok.json"),
                project.join("en.json"),
            ]
        );
    }

    #[test]
    fn test_write_story_rejects_absolute_stem() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("abs_target");
        let config = ContentConfig {
            delimiter: ".".to_string(),
            ..ContentConfig::default()
        };
        let splitter = Splitter::new(&config, Granularity::FullPath);

        // No '.' in the key, so the whole absolute path becomes the stem
        let key = target.to_string_lossy().replace('.', "_");
        let split = splitter.split("en", &key);
        let result = splitter.write_story(&dir.path().join("project"), "en", &split, &json!({}));

        assert!(result.is_err());
        assert!(json_files(dir.path()).is_empty());
    }

    #[test]
    fn test_discover_ignores_unsafe_keys() {
        let config = ContentConfig::default();
        let map = stories(json!({"../up/x": {}, "a//b": {}, "ok/x": {}}));

        let full = Splitter::new(&config, Granularity::FullPath).discover("en", &map);
        assert_eq!(full.into_iter().collect::<Vec<_>>(), vec!["ok"]);
    }
}
