//! Catalog command service: runs one store operation and packages the result.

use crate::catalog::types::{
    DeleteOutput, FindOutput, GroupOutput, ListOutput, SortOutput, StatsOutput,
};
use crate::store::RecordStore;
use crate::views::{GroupKey, SortKey};
use tracing::info;

/// Stateless service over a borrowed store; shared by the menu and the one-shot CLI.
pub struct CatalogCommandService;

impl CatalogCommandService {
    pub fn list(store: &RecordStore) -> ListOutput {
        ListOutput::new(store.list())
    }

    pub fn sort(store: &RecordStore, key: SortKey) -> SortOutput {
        let records = match key {
            SortKey::Size => store.sorted_by_size(),
            SortKey::Name => store.sorted_by_name(),
            SortKey::Path => store.sorted_by_path(),
        };
        SortOutput { key, records }
    }

    pub fn group(store: &RecordStore, key: GroupKey) -> GroupOutput {
        let groups = match key {
            GroupKey::Extension => store.group_by_extension(),
            GroupKey::Path => store.group_by_path(),
        };
        GroupOutput::new(key, groups)
    }

    pub fn find(store: &RecordStore, name: &str) -> FindOutput {
        let record = store.find(name).cloned();
        FindOutput {
            query: name.to_string(),
            found: record.is_some(),
            record,
        }
    }

    pub fn stats(store: &RecordStore) -> StatsOutput {
        let statistics = store.statistics();
        StatsOutput {
            empty: statistics.is_none(),
            statistics,
        }
    }

    /// Delete the first record named `name`. A miss is reported in the
    /// output rather than as an error.
    pub fn delete(store: &mut RecordStore, name: &str) -> DeleteOutput {
        let record = match store.delete(name) {
            Ok(record) => {
                info!(name = %name, "record deleted");
                Some(record)
            }
            Err(e) => {
                info!("delete skipped: {}", e);
                None
            }
        };
        DeleteOutput {
            name: name.to_string(),
            deleted: record.is_some(),
            record,
            remaining: store.len(),
        }
    }
}
