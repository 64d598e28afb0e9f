// tests/workbook_cache.rs
//
// WorkbookCache reuses a load until a sheet changes on disk.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use placecount::cache::WorkbookCache;
use placecount::store::{self, sheet_paths};
use placecount::tables::{DetailRow, FrequencyRow, Workbook};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("placecount_cache_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn book(count: u64) -> Workbook {
    Workbook {
        frequency: vec![FrequencyRow { location: "南京".into(), count }],
        excerpts: Vec::new(),
        detail: vec![DetailRow { file_name: "a.txt".into(), location: "南京".into(), count }],
    }
}

#[test]
fn repeated_get_reuses_the_loaded_workbook() {
    let dir = tmp_dir("reuse");
    store::save_workbook(&dir, &book(2)).unwrap();

    let mut cache = WorkbookCache::new();
    let first = cache.get(&dir).unwrap().expect("loaded");
    let second = cache.get(&dir).unwrap().expect("loaded");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.loads(), 1);
    assert_eq!(*first, book(2));
}

#[test]
fn rewritten_sheet_forces_a_reload() {
    let dir = tmp_dir("rewrite");
    store::save_workbook(&dir, &book(2)).unwrap();

    let mut cache = WorkbookCache::new();
    let before = cache.get(&dir).unwrap().unwrap();

    // a longer count changes the file size, so the stamp differs
    store::save_workbook(&dir, &book(12345)).unwrap();
    let after = cache.get(&dir).unwrap().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.frequency[0].count, 12345);
    assert_eq!(cache.loads(), 2);
}

#[test]
fn missing_artifact_is_none_and_recovers() {
    let dir = tmp_dir("missing");
    let mut cache = WorkbookCache::new();
    assert!(cache.get(&dir).unwrap().is_none());

    store::save_workbook(&dir, &book(1)).unwrap();
    assert!(cache.get(&dir).unwrap().is_some());

    fs::remove_file(&sheet_paths(&dir)[0]).unwrap();
    assert!(cache.get(&dir).unwrap().is_none());
    assert_eq!(cache.loads(), 3);
}

#[test]
fn another_path_or_invalidate_reloads() {
    let a = tmp_dir("path_a");
    let b = tmp_dir("path_b");
    store::save_workbook(&a, &book(1)).unwrap();
    store::save_workbook(&b, &book(7)).unwrap();

    let mut cache = WorkbookCache::new();
    assert_eq!(cache.get(&a).unwrap().unwrap().frequency[0].count, 1);
    assert_eq!(cache.get(&b).unwrap().unwrap().frequency[0].count, 7);
    assert_eq!(cache.loads(), 2);

    cache.invalidate();
    cache.get(&b).unwrap();
    assert_eq!(cache.loads(), 3);
}

#[test]
fn malformed_count_names_sheet_and_row() {
    let dir = tmp_dir("malformed");
    store::save_workbook(&dir, &book(1)).unwrap();
    fs::write(&sheet_paths(&dir)[0], "地点,出现次数\n南京,many\n").unwrap();

    let err = WorkbookCache::new().get(&dir).unwrap_err().to_string();
    assert!(err.contains("频率统计"), "{err}");
}
