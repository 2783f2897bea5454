//! Configuration
//!
//! Layered configuration for the catalog: built-in defaults, the global config
//! file, and `FILECAT__*` environment overrides.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::StoreError;
use crate::logging::LoggingConfig;
use crate::store::FileRecord;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilecatConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Initial catalog contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Load the sample records at startup (default: true)
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    /// Extra records appended after the samples
    #[serde(default)]
    pub records: Vec<FileRecord>,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_samples: default_true(),
            records: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Validate configured records.
    pub fn validate(&self) -> Result<(), StoreError> {
        for record in &self.records {
            record.validate()?;
        }
        Ok(())
    }
}
