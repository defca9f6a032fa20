//! Dummy content for load-testing an admin UI.

use cms_seed_core::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
const LOREM_REPEAT: usize = 10;

/// One synthetic record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub body: String,
    pub author: String,
    pub draft: bool,
}

impl Snippet {
    /// Build the `index`-th snippet for the given identifier
    pub fn generate<R: Rng + ?Sized>(
        index: usize,
        id: &Uuid,
        authors: &[String],
        rng: &mut R,
    ) -> Result<Self> {
        let author = authors
            .choose(rng)
            .ok_or_else(|| Error::InvalidData("No authors to choose from".to_string()))?;
        let short_id: String = id.to_string().chars().take(8).collect();

        Ok(Self {
            title: format!("Test Story #{} - {}", index, short_id),
            body: LOREM.repeat(LOREM_REPEAT),
            author: author.clone(),
            draft: rng.random_bool(0.5),
        })
    }
}

/// Write `count` snippets into `dir` as `<uuid>.json`, creating `dir` if needed.
///
/// Returns the written paths in generation order.
pub fn generate_snippets<R: Rng + ?Sized>(
    dir: &Path,
    count: usize,
    authors: &[String],
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(count);
    for index in 0..count {
        let id = Uuid::new_v4();
        let snippet = Snippet::generate(index, &id, authors, rng)?;

        let path = dir.join(format!("{}.json", id));
        fs::write(&path, serde_json::to_string_pretty(&snippet)?)?;
        written.push(path);
    }

    tracing::info!(count, dir = %dir.display(), "Generated snippets");
    Ok(written)
}
