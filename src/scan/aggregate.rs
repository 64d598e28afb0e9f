// src/scan/aggregate.rs
use std::collections::BTreeMap;

use crate::tables::{DetailRow, FrequencyRow, Workbook};

use super::document::ScanTables;

/// Sum detail counts per location. Rows come out ordered by location name.
pub fn summarize(detail: &[DetailRow]) -> Vec<FrequencyRow> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for r in detail {
        *totals.entry(r.location.as_str()).or_default() += r.count;
    }
    totals
        .into_iter()
        .map(|(location, count)| FrequencyRow { location: s!(location), count })
        .collect()
}

pub fn into_workbook(tables: ScanTables) -> Workbook {
    Workbook {
        frequency: summarize(&tables.detail),
        excerpts: tables.excerpts,
        detail: tables.detail,
    }
}
