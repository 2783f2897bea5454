//! Output DTOs for catalog commands; serialized for `--format json`.

use crate::store::FileRecord;
use crate::views::{GroupKey, SortKey, Statistics};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    pub records: Vec<FileRecord>,
    pub total: usize,
}

impl ListOutput {
    pub fn new(records: &[FileRecord]) -> Self {
        Self {
            records: records.to_vec(),
            total: records.len(),
        }
    }
}

/// Result of the sort command.
#[derive(Debug, Clone, Serialize)]
pub struct SortOutput {
    pub key: SortKey,
    pub records: Vec<FileRecord>,
}

/// One group in a group-by view.
#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry {
    pub key: String,
    pub count: usize,
    pub records: Vec<FileRecord>,
}

/// Result of the group command; groups in ascending key order.
#[derive(Debug, Clone, Serialize)]
pub struct GroupOutput {
    pub key: GroupKey,
    pub groups: Vec<GroupEntry>,
}

impl GroupOutput {
    pub fn new(key: GroupKey, groups: BTreeMap<String, Vec<FileRecord>>) -> Self {
        let groups = groups
            .into_iter()
            .map(|(group, records)| GroupEntry {
                key: group,
                count: records.len(),
                records,
            })
            .collect();
        Self { key, groups }
    }
}

/// Result of the find command.
#[derive(Debug, Clone, Serialize)]
pub struct FindOutput {
    pub query: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<FileRecord>,
}

/// Result of the stats command; `statistics` is absent for an empty catalog.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

/// Result of the delete command.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutput {
    pub name: String,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<FileRecord>,
    pub remaining: usize,
}
