// tests/dashboard_view.rs
//
// What the dashboard derives from a workbook for a given location filter.

use std::sync::Arc;

use placecount::config::state::{SortKey, TableSort};
use placecount::data::{all_locations, totals_by_location, SelectionView};
use placecount::tables::{DetailRow, ExcerptRecord, FrequencyRow, Workbook};

fn freq(location: &str, count: u64) -> FrequencyRow {
    FrequencyRow { location: location.into(), count }
}

fn excerpt(file: &str, location: &str, alias: &str) -> ExcerptRecord {
    ExcerptRecord {
        file_name: file.into(),
        location: location.into(),
        alias: alias.into(),
        excerpt: format!("...{alias}..."),
    }
}

fn detail(file: &str, location: &str, count: u64) -> DetailRow {
    DetailRow { file_name: file.into(), location: location.into(), count }
}

fn sample() -> Arc<Workbook> {
    Arc::new(Workbook {
        frequency: vec![freq("北京", 3), freq("南京", 2), freq("绍兴", 1), freq("湖州", 0)],
        excerpts: vec![
            excerpt("a.txt", "南京", "南京"),
            excerpt("a.txt", "南京", "金陵"),
            excerpt("a.txt", "绍兴", "会稽"),
            excerpt("b.txt", "北京", "京"),
            excerpt("b.txt", "北京", "京"),
            excerpt("b.txt", "北京", "京师"),
        ],
        detail: vec![
            detail("a.txt", "北京", 0),
            detail("a.txt", "南京", 2),
            detail("a.txt", "绍兴", 1),
            detail("a.txt", "湖州", 0),
            detail("b.txt", "北京", 3),
            detail("b.txt", "南京", 0),
            detail("b.txt", "绍兴", 0),
            detail("b.txt", "湖州", 0),
        ],
    })
}

fn names(rows: &[&placecount::data::LocationTotal]) -> Vec<String> {
    rows.iter().map(|t| t.location.clone()).collect()
}

#[test]
fn filter_choices_follow_frequency_sheet() {
    assert_eq!(all_locations(&sample()), vec!["北京", "南京", "绍兴", "湖州"]);
}

#[test]
fn duplicate_frequency_rows_are_summed() {
    let totals = totals_by_location(&[freq("南京", 2), freq("北京", 1), freq("南京", 5)]);
    let got: Vec<(&str, u64)> = totals.iter().map(|t| (t.location.as_str(), t.count)).collect();
    assert_eq!(got, vec![("南京", 7), ("北京", 1)]);
}

#[test]
fn empty_selection_falls_back_to_everything() {
    let book = sample();
    let view = SelectionView::build(book.clone(), &[]);
    assert!(view.fell_back);
    assert_eq!(view.totals.len(), 4);
    assert_eq!(view.excerpts().count(), book.excerpts.len());
    assert_eq!(view.detail().count(), book.detail.len());
}

#[test]
fn selection_filters_every_derived_table() {
    let view = SelectionView::build(sample(), &["南京".to_string(), "绍兴".to_string()]);
    assert!(!view.fell_back);
    assert_eq!(view.locations().collect::<Vec<_>>(), vec!["南京", "绍兴"]);
    assert_eq!(view.excerpts().count(), 3);
    assert!(view.excerpts().all(|e| e.location == "南京" || e.location == "绍兴"));
    assert_eq!(view.detail().count(), 4);
    assert_eq!(view.count_range(), (1, 2));

    let nanjing: Vec<&str> = view.excerpts_for("南京").map(|e| e.alias.as_str()).collect();
    assert_eq!(nanjing, vec!["南京", "金陵"]);
    assert_eq!(view.excerpts_for("北京").count(), 0);
}

#[test]
fn unknown_picks_yield_an_empty_view_without_fallback() {
    let view = SelectionView::build(sample(), &["广州".to_string()]);
    assert!(!view.fell_back);
    assert!(view.totals.is_empty());
    assert_eq!(view.count_range(), (0, 0));
    assert_eq!(view.excerpts().count(), 0);
}

#[test]
fn table_defaults_to_descending_count() {
    let view = SelectionView::build(sample(), &[]);
    assert_eq!(names(&view.table_rows(TableSort::default())), vec!["北京", "南京", "绍兴", "湖州"]);

    let by_name = TableSort { key: SortKey::Location, descending: false };
    let mut expected = vec!["北京", "南京", "绍兴", "湖州"];
    expected.sort();
    assert_eq!(names(&view.table_rows(by_name)), expected);
}

#[test]
fn bars_run_ascending_by_count() {
    let view = SelectionView::build(sample(), &[]);
    let counts: Vec<u64> = view.bar_order().iter().map(|t| t.count).collect();
    assert_eq!(counts, vec![0, 1, 2, 3]);
}

#[test]
fn locations_without_coordinates_are_unmapped() {
    let view = SelectionView::build(sample(), &[]);
    assert_eq!(view.unmapped(), vec!["绍兴"]);
    let mapped = view.totals.iter().filter(|t| t.coords.is_some()).count();
    assert_eq!(mapped, 3);
}
