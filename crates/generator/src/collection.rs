use cms_seed_core::config::ContentConfig;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// One editable group of records in an admin UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Machine-safe identifier (`portal_difficulty`)
    pub name: String,
    /// Sidebar label
    pub label: String,
    /// Backing folder, always `/`-separated
    pub folder: String,
}

/// Title-case a single word the way editors expect labels to look.
///
/// The first letter of every alphabetic run is upper-cased and the rest
/// lower-cased, so `faq2go` becomes `Faq2Go`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

/// Human-readable label for a folder path.
///
/// `portal/difficulty/exercise-review` → `Portal / Difficulty / Exercise Review`
pub fn humanize(path: &str) -> String {
    path.split('/')
        .map(|segment| title_case(&segment.replace(['-', '_'], " ")))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Identifier-safe name for a folder path.
///
/// `portal/difficulty/exercise-review` → `portal_difficulty_exercise_review`
pub fn safe_name(path: &str) -> String {
    path.replace(['/', '-'], "_")
}

/// Render a relative path `/`-separated for config files, whatever the host OS
pub fn config_path_string(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn config_folder(output_dir: &Path, locale: &str, path: &str) -> String {
    let base = config_path_string(output_dir);
    if base.is_empty() {
        format!("{}/{}", locale, path)
    } else {
        format!("{}/{}/{}", base, locale, path)
    }
}

/// Give collections whose names collide (`a-b`, `a_b` and `a/b` all become
/// `a_b`) a numeric suffix, so the admin tools accept the list.
///
/// The first collection keeps its name; later ones become `a_b_2`, `a_b_3`...
fn dedupe_names(collections: &mut [Collection]) {
    let natural: HashSet<String> = collections.iter().map(|c| c.name.clone()).collect();
    let mut used = HashSet::with_capacity(collections.len());

    for collection in collections.iter_mut() {
        if used.insert(collection.name.clone()) {
            continue;
        }

        let mut n = 2;
        let unique = loop {
            let candidate = format!("{}_{}", collection.name, n);
            if !natural.contains(&candidate) && !used.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::warn!(
            name = %collection.name,
            folder = %collection.folder,
            renamed = %unique,
            "Duplicate collection name"
        );
        used.insert(unique.clone());
        collection.name = unique;
    }
}

/// One collection per discovered folder path, backed by the reference locale
pub fn sveltia_collections(paths: &BTreeSet<String>, content: &ContentConfig) -> Vec<Collection> {
    let mut collections: Vec<Collection> = paths
        .iter()
        .map(|path| Collection {
            name: safe_name(path),
            label: format!("📂 {}", humanize(path)),
            folder: config_folder(&content.output_dir, &content.reference_locale, path),
        })
        .collect();
    dedupe_names(&mut collections);
    collections
}

/// One collection per top-level folder and locale
pub fn tina_collections(folders: &BTreeSet<String>, content: &ContentConfig) -> Vec<Collection> {
    let mut collections = Vec::with_capacity(folders.len() * content.locales.len());
    for folder in folders {
        let human_label = humanize(folder);
        let name = safe_name(folder);
        for locale in &content.locales {
            collections.push(Collection {
                name: format!("{}_{}", locale, name),
                label: format!("[{}] {}", locale.to_uppercase(), human_label),
                folder: config_folder(&content.output_dir, locale, folder),
            });
        }
    }
    dedupe_names(&mut collections);
    collections
}
