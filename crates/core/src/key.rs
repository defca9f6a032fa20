//! Path key splitting.
//!
//! A path key such as `portal/difficulty/easy` names a record's place in a
//! virtual folder hierarchy. The last segment becomes the filename stem and
//! everything before it the folder. Keys too short to imply a folder are
//! placed in a fallback folder.

use crate::types::SplitKey;
use std::path::{Component, Path};

/// Split `key` on `delimiter` into folder segments and a filename stem.
///
/// If the key yields fewer than two segments, `fallback` is prepended once
/// so every key resolves to at least one folder plus a filename.
///
/// # Examples
///
/// ```
/// use cms_seed_core::split_key;
///
/// let split = split_key("portal/difficulty/easy", "/", "misc");
/// assert_eq!(split.folder_path(), "portal/difficulty");
/// assert_eq!(split.stem, "easy");
///
/// let split = split_key("standalone", "/", "misc");
/// assert_eq!(split.folder_path(), "misc");
/// assert_eq!(split.stem, "standalone");
/// ```
pub fn split_key(key: &str, delimiter: &str, fallback: &str) -> SplitKey {
    let segments: Vec<&str> = key.split(delimiter).collect();
    from_segments(segments, fallback)
}

/// Like [`split_key`], but first drops a leading segment equal to `locale`.
///
/// Some exports prefix every key with its locale (`de/portal/easy` inside
/// `de.json`); the locale directory already carries that information.
pub fn split_localized_key(key: &str, delimiter: &str, fallback: &str, locale: &str) -> SplitKey {
    let mut segments: Vec<&str> = key.split(delimiter).collect();
    // A bare locale key is kept as a record name
    if segments.len() > 1 && segments.first() == Some(&locale) {
        segments.remove(0);
    }
    from_segments(segments, fallback)
}

fn from_segments<'a>(mut segments: Vec<&'a str>, fallback: &'a str) -> SplitKey {
    if segments.len() < 2 {
        segments.insert(0, fallback);
    }

    // len >= 2 here, so there is always a stem and at least one folder
    let stem = segments.pop().unwrap_or_default().to_string();
    let folders = segments.into_iter().map(str::to_string).collect();

    SplitKey { folders, stem }
}

/// Whether `segment` names exactly one ordinary directory entry.
///
/// Empty, `.` and `..` segments are rejected, as is anything the host would
/// read as more than one path component (separators, roots, drive prefixes).
pub fn is_safe_segment(segment: &str) -> bool {
    if segment.is_empty() || segment.contains(['/', '\\']) {
        return false;
    }

    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == segment
    )
}
