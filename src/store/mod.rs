//! Record Store
//!
//! Owns the ordered sequence of file metadata records. Every derived view
//! (sorted copies, groupings, statistics) is computed from this sequence on
//! request; nothing is cached.

pub mod record;

use crate::error::StoreError;
use crate::views::{self, GroupKey, SortKey, Statistics};
use std::collections::BTreeMap;
use tracing::debug;

pub use record::FileRecord;

/// Receives a notice for every record appended to a store.
pub trait RecordObserver {
    fn record_added(&mut self, record: &FileRecord);
}

/// Observer that ignores every notice.
pub struct NoopObserver;

impl RecordObserver for NoopObserver {
    fn record_added(&mut self, _record: &FileRecord) {}
}

/// Sample records loaded when a catalog is seeded.
pub const SAMPLE_RECORDS: [(&str, &str, u64, &str); 8] = [
    ("Document1", "pdf", 2048, "/documents/"),
    ("Image1", "jpg", 1024, "/images/"),
    ("Video1", "mp4", 5120, "/videos/"),
    ("Music1", "mp3", 4096, "/music/"),
    ("Document2", "docx", 512, "/documents/"),
    ("Image2", "png", 2560, "/images/"),
    ("Code1", "cpp", 128, "/source/"),
    ("Code2", "py", 96, "/source/"),
];

/// In-memory catalog of file records, insertion order preserved.
pub struct RecordStore {
    records: Vec<FileRecord>,
    observer: Box<dyn RecordObserver>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store with no observer.
    pub fn new() -> Self {
        Self::with_observer(Box::new(NoopObserver))
    }

    /// Create an empty store that reports additions to `observer`.
    pub fn with_observer(observer: Box<dyn RecordObserver>) -> Self {
        Self {
            records: Vec::new(),
            observer,
        }
    }

    /// Append the sample catalog.
    pub fn seed_samples(&mut self) {
        for (name, extension, size_kb, path) in SAMPLE_RECORDS {
            self.add(name, extension, size_kb, path);
        }
    }

    /// Replace the observer, returning the previous one.
    pub fn set_observer(&mut self, observer: Box<dyn RecordObserver>) -> Box<dyn RecordObserver> {
        std::mem::replace(&mut self.observer, observer)
    }

    pub fn add(&mut self, name: &str, extension: &str, size_kb: u64, path: &str) {
        self.add_record(FileRecord::new(name, extension, size_kb, path));
    }

    /// Append a prebuilt record. Duplicates are accepted.
    pub fn add_record(&mut self, record: FileRecord) {
        debug!(name = %record.name, extension = %record.extension, size_kb = record.size_kb, "record added");
        self.observer.record_added(&record);
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record sizes in KB.
    pub fn total_size(&self) -> u128 {
        self.records.iter().map(|r| u128::from(r.size_kb)).sum()
    }

    pub fn sorted_by_size(&self) -> Vec<FileRecord> {
        views::sorted_by(&self.records, SortKey::Size)
    }

    pub fn sorted_by_name(&self) -> Vec<FileRecord> {
        views::sorted_by(&self.records, SortKey::Name)
    }

    pub fn sorted_by_path(&self) -> Vec<FileRecord> {
        views::sorted_by(&self.records, SortKey::Path)
    }

    pub fn group_by_extension(&self) -> BTreeMap<String, Vec<FileRecord>> {
        views::group_by(&self.records, GroupKey::Extension)
    }

    pub fn group_by_path(&self) -> BTreeMap<String, Vec<FileRecord>> {
        views::group_by(&self.records, GroupKey::Path)
    }

    /// First record whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Remove the first record named `name`.
    ///
    /// Later records with the same name stay reachable only after the first
    /// one is gone.
    pub fn delete(&mut self, name: &str) -> Result<FileRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let removed = self.records.remove(index);
        debug!(name = %removed.name, remaining = self.records.len(), "record deleted");
        Ok(removed)
    }

    /// Aggregate statistics, or `None` when there is nothing to analyze.
    pub fn statistics(&self) -> Option<Statistics> {
        views::statistics(&self.records)
    }
}
