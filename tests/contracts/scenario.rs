use filecat::store::RecordStore;

use crate::contracts::support::{names, scenario_context};

#[test]
fn scenario_from_three_records() {
    let mut ctx = scenario_context();
    let store = ctx.store();

    assert_eq!(names(store.list()), vec!["A", "B", "C"]);
    assert_eq!(names(&store.sorted_by_size()), vec!["C", "A", "B"]);

    let groups = store.group_by_extension();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["pdf", "txt"]);
    assert_eq!(names(&groups["txt"]), vec!["A", "B"]);
    assert_eq!(names(&groups["pdf"]), vec!["C"]);

    let found = store.find("B").expect("B should be found");
    assert_eq!(found.extension, "txt");
    assert_eq!(found.size_kb, 10);

    let store = ctx.store_mut();
    assert!(store.delete("Z").is_err());
    assert_eq!(store.len(), 3);

    assert!(store.delete("B").is_ok());
    assert_eq!(names(store.list()), vec!["A", "C"]);
}

#[test]
fn statistics_over_ten_twenty_thirty() {
    let mut store = RecordStore::new();
    store.add("ten", "x", 10, "/");
    store.add("twenty", "x", 20, "/");
    store.add("thirty", "x", 30, "/");

    let stats = store.statistics().expect("non-empty store has statistics");
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_size, 60);
    assert_eq!(stats.average_size, 20);
    assert_eq!(stats.largest.name, "thirty");
    assert_eq!(stats.smallest.name, "ten");
}

#[test]
fn statistics_on_empty_store_reports_empty() {
    let store = RecordStore::new();
    assert!(store.statistics().is_none());
    assert!(store.list().is_empty());
}

#[test]
fn group_by_path_keeps_every_record() {
    let mut store = RecordStore::new();
    store.seed_samples();
    let groups = store.group_by_path();
    assert_eq!(groups.len(), 5);
    assert_eq!(names(&groups["/documents/"]), vec!["Document1", "Document2"]);
    assert_eq!(names(&groups["/source/"]), vec!["Code1", "Code2"]);
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, store.len());
}

#[test]
fn sorted_by_name_over_samples() {
    let mut store = RecordStore::new();
    store.seed_samples();
    assert_eq!(
        names(&store.sorted_by_name()),
        vec!["Code1", "Code2", "Document1", "Document2", "Image1", "Image2", "Music1", "Video1"]
    );
}
