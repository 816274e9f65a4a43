//! # Configuration
//!
//! Store tuning is managed by [`confique`], layering environment variables
//! over an optional TOML file over compiled defaults.
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `initial_capacity` | `ATTRSTORE_INITIAL_CAPACITY` | `0` | Slots reserved up front |
//!
//! None of these settings change attribute semantics.

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of attributes to reserve room for when a store is created.
    #[config(default = 0, env = "ATTRSTORE_INITIAL_CAPACITY")]
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Load from the environment, then `path` (if given), then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = StoreConfig::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
