//! FileRecord: one file metadata entry.

use crate::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for `created`.
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d";

/// File metadata record. No identity beyond the stored tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    /// Grouping key, used verbatim (no case folding, no leading dot handling)
    pub extension: String,
    pub size_kb: u64,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl FileRecord {
    pub fn new(name: &str, extension: &str, size_kb: u64, path: &str) -> Self {
        Self {
            name: name.to_string(),
            extension: extension.to_string(),
            size_kb,
            path: path.to_string(),
            created: None,
        }
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Display name: `name.extension`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Trivial checks applied to records coming from config or the command line.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidRecord(
                "Record name cannot be empty".to_string(),
            ));
        }
        if let Some(ref created) = self.created {
            NaiveDate::parse_from_str(created, CREATED_DATE_FORMAT).map_err(|e| {
                StoreError::InvalidRecord(format!(
                    "Record '{}' has invalid created date '{}': {}",
                    self.name, created, e
                ))
            })?;
        }
        Ok(())
    }

    /// Parse `NAME,EXT,SIZE,PATH`. The path may itself contain commas.
    pub fn parse_spec(spec: &str) -> Result<Self, StoreError> {
        let mut parts = spec.splitn(4, ',');
        let (Some(name), Some(extension), Some(size), Some(path)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(StoreError::InvalidRecord(format!(
                "Expected NAME,EXT,SIZE,PATH but got '{}'",
                spec
            )));
        };
        let size_kb = size.trim().parse::<u64>().map_err(|e| {
            StoreError::InvalidRecord(format!("Invalid size '{}': {}", size.trim(), e))
        })?;
        let record = FileRecord::new(name.trim(), extension.trim(), size_kb, path.trim());
        record.validate()?;
        Ok(record)
    }
}
