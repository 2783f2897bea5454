//! Record Views
//!
//! Derived, recomputed-on-demand views over a slice of records: sorted copies,
//! group-by mappings, and aggregate statistics. The slice is never mutated.

use crate::store::FileRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sort key for sorted views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Size,
    Name,
    Path,
}

/// Grouping key for group-by views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Extension,
    Path,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "size" => Ok(SortKey::Size),
            "name" => Ok(SortKey::Name),
            "path" => Ok(SortKey::Path),
            other => Err(format!(
                "Invalid sort key: {} (must be 'size', 'name', or 'path')",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Size => "size",
            SortKey::Name => "name",
            SortKey::Path => "path",
        };
        f.write_str(s)
    }
}

impl FromStr for GroupKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extension" | "ext" | "type" => Ok(GroupKey::Extension),
            "path" => Ok(GroupKey::Path),
            other => Err(format!(
                "Invalid group key: {} (must be 'extension' or 'path')",
                other
            )),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GroupKey::Extension => "extension",
            GroupKey::Path => "path",
        };
        f.write_str(s)
    }
}

/// Ascending copy of `records` ordered by `key`.
///
/// `sort_by` is stable, so equal keys keep their input order.
pub fn sorted_by(records: &[FileRecord], key: SortKey) -> Vec<FileRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Size => sorted.sort_by(|a, b| a.size_kb.cmp(&b.size_kb)),
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Path => sorted.sort_by(|a, b| a.path.cmp(&b.path)),
    }
    sorted
}

/// Partition `records` by `key`. Keys iterate in ascending order; each group
/// keeps the input order of its members.
pub fn group_by(records: &[FileRecord], key: GroupKey) -> BTreeMap<String, Vec<FileRecord>> {
    let mut groups: BTreeMap<String, Vec<FileRecord>> = BTreeMap::new();
    for record in records {
        let group = match key {
            GroupKey::Extension => &record.extension,
            GroupKey::Path => &record.path,
        };
        groups.entry(group.clone()).or_default().push(record.clone());
    }
    groups
}

/// Aggregate statistics over a non-empty record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: usize,
    /// Widened so any number of `u64` sizes sums without overflow
    pub total_size: u128,
    /// Truncating integer average
    pub average_size: u64,
    pub largest: FileRecord,
    pub smallest: FileRecord,
}

/// Single pass over `records`. `None` when empty.
///
/// Largest and smallest only move on strict inequality, so ties resolve to the
/// first record in the input.
pub fn statistics(records: &[FileRecord]) -> Option<Statistics> {
    let (first, rest) = records.split_first()?;
    let mut total_size = u128::from(first.size_kb);
    let mut largest = first;
    let mut smallest = first;
    for record in rest {
        total_size += u128::from(record.size_kb);
        if record.size_kb > largest.size_kb {
            largest = record;
        }
        if record.size_kb < smallest.size_kb {
            smallest = record;
        }
    }
    let count = records.len();
    // the mean never exceeds the largest size, so it fits back in u64
    let average_size = u64::try_from(total_size / count as u128).unwrap_or(largest.size_kb);
    Some(Statistics {
        count,
        total_size,
        average_size,
        largest: largest.clone(),
        smallest: smallest.clone(),
    })
}
