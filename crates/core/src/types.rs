use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One locale's source dictionary: path key -> content record.
///
/// Backed by `serde_json::Map` with `preserve_order`, so records come back
/// out in the order they were read.
pub type StoryMap = serde_json::Map<String, serde_json::Value>;

/// A path key resolved into its folder segments and filename stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitKey {
    /// Always at least one segment
    pub folders: Vec<String>,
    pub stem: String,
}

impl SplitKey {
    /// Folder path as used in admin configuration (`portal/difficulty`)
    pub fn folder_path(&self) -> String {
        self.folders.join("/")
    }

    /// First folder segment (`portal`)
    pub fn root_folder(&self) -> &str {
        self.folders.first().map(String::as_str).unwrap_or_default()
    }

    /// Output filename (`easy.json`)
    pub fn file_name(&self) -> String {
        format!("{}.json", self.stem)
    }

    /// Relative filesystem path below a locale directory
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.folders.iter().collect();
        path.push(self.file_name());
        path
    }

    /// First folder segment or stem that could escape the locale directory
    pub fn unsafe_segment(&self) -> Option<&str> {
        self.folders
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.stem.as_str()))
            .find(|segment| !crate::key::is_safe_segment(segment))
    }

    /// Collection grouping this key contributes to at the given granularity
    pub fn grouping(&self, granularity: Granularity) -> String {
        match granularity {
            Granularity::FullPath => self.folder_path(),
            Granularity::TopLevel => self.root_folder().to_string(),
        }
    }
}

/// How finely discovered folders are grouped into collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One collection per distinct folder path
    FullPath,
    /// One collection per first-level folder
    TopLevel,
}
