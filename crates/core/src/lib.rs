pub mod config;
pub mod error;
pub mod key;
pub mod types;

pub use config::{SeedConfig, load_or_default, parse_seed_toml};
pub use error::{Error, Result};
pub use key::{is_safe_segment, split_key, split_localized_key};
pub use types::*;
