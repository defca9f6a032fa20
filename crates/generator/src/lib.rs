//! Content and admin-configuration generation.
//!
//! - [`loader`]: read per-locale source dictionaries
//! - [`splitter`]: write one JSON file per record and discover folder groupings
//! - [`collection`]: turn groupings into admin collections
//! - [`schema`]: the fixed field schemas
//! - [`render`]: Sveltia YAML, Tina TypeScript and the admin HTML shell
//! - [`snippets`]: dummy load-test content

pub mod collection;
pub mod loader;
pub mod render;
pub mod schema;
pub mod snippets;
pub mod splitter;

pub use collection::{Collection, config_path_string, sveltia_collections, tina_collections};
pub use loader::load_locale;
pub use splitter::{SplitReport, Splitter};
