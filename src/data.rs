// src/data.rs
//
// Dashboard data derived from a loaded workbook.
//
// - LocationTotal: one frequency row joined with its coordinates.
// - SelectionView: what the dashboard shows for the current location
//                  filter. Holds the shared workbook plus index lists into
//                  its excerpt/detail sheets, so filtering never copies rows.
//
// Rebuilt on every filter change; cheap for the sizes this tool handles.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::state::{SortKey, TableSort};
use crate::geo::{self, LatLon};
use crate::tables::{DetailRow, ExcerptRecord, FrequencyRow, Workbook};

#[derive(Clone, Debug, PartialEq)]
pub struct LocationTotal {
    pub location: String,
    pub count: u64,
    pub coords: Option<LatLon>,
}

/// Sum frequency rows per location (first-seen order) and attach coordinates.
pub fn totals_by_location(freq: &[FrequencyRow]) -> Vec<LocationTotal> {
    let mut out: Vec<LocationTotal> = Vec::new();
    for r in freq {
        match out.iter_mut().find(|t| t.location == r.location) {
            Some(t) => t.count += r.count,
            None => out.push(LocationTotal {
                location: r.location.clone(),
                count: r.count,
                coords: geo::lookup(&r.location),
            }),
        }
    }
    out
}

/// Filter choices: every location of the frequency sheet, in sheet order.
pub fn all_locations(book: &Workbook) -> Vec<String> {
    totals_by_location(&book.frequency).into_iter().map(|t| t.location).collect()
}

#[derive(Clone, Copy)]
pub struct Selection<'a> {
    pub picked: &'a [String],
    pub all: &'a [String],
}

impl<'a> Selection<'a> {
    #[inline] pub fn is_none(&self) -> bool { self.picked.is_empty() }
    #[inline] pub fn is_all(&self) -> bool {
        self.all.iter().all(|l| self.picked.contains(l))
    }
}

#[derive(Clone, Debug)]
pub struct SelectionView {
    book: Arc<Workbook>,
    /// Frequency totals of the effective locations
    pub totals: Vec<LocationTotal>,
    /// Positions of kept rows in the excerpt sheet
    pub excerpt_ix: Vec<usize>,
    /// Positions of kept rows in the detail sheet
    pub detail_ix: Vec<usize>,
    /// True when nothing was picked and the full data is shown instead
    pub fell_back: bool,
}

impl SelectionView {
    /// An empty selection shows everything; `fell_back` tells the UI to warn.
    pub fn build(book: Arc<Workbook>, picked: &[String]) -> Self {
        let all_totals = totals_by_location(&book.frequency);

        if picked.is_empty() {
            return Self {
                totals: all_totals,
                excerpt_ix: (0..book.excerpts.len()).collect(),
                detail_ix: (0..book.detail.len()).collect(),
                fell_back: true,
                book,
            };
        }

        let keep: HashSet<&str> = picked.iter().map(|s| s.as_str()).collect();
        let totals = all_totals
            .into_iter()
            .filter(|t| keep.contains(t.location.as_str()))
            .collect();
        let excerpt_ix = book.excerpts.iter().enumerate()
            .filter(|(_, r)| keep.contains(r.location.as_str()))
            .map(|(i, _)| i)
            .collect();
        let detail_ix = book.detail.iter().enumerate()
            .filter(|(_, r)| keep.contains(r.location.as_str()))
            .map(|(i, _)| i)
            .collect();

        Self { totals, excerpt_ix, detail_ix, fell_back: false, book }
    }

    pub fn workbook(&self) -> &Workbook { &self.book }

    /// Locations on screen, in frequency-sheet order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.totals.iter().map(|t| t.location.as_str())
    }

    /// Table rows under the given sort; ties keep sheet order.
    pub fn table_rows(&self, sort: TableSort) -> Vec<&LocationTotal> {
        let mut rows: Vec<&LocationTotal> = self.totals.iter().collect();
        rows.sort_by(|a, b| {
            let ord = match sort.key {
                SortKey::Count => a.count.cmp(&b.count),
                SortKey::Location => a.location.cmp(&b.location),
            };
            if sort.descending { ord.reverse() } else { ord }
        });
        rows
    }

    /// Bar chart order: ascending by count.
    pub fn bar_order(&self) -> Vec<&LocationTotal> {
        let mut rows: Vec<&LocationTotal> = self.totals.iter().collect();
        rows.sort_by_key(|t| t.count);
        rows
    }

    /// (min, max) count over the visible locations; (0, 0) when empty.
    pub fn count_range(&self) -> (u64, u64) {
        let min = self.totals.iter().map(|t| t.count).min().unwrap_or(0);
        let max = self.totals.iter().map(|t| t.count).max().unwrap_or(0);
        (min, max)
    }

    /// Visible locations with no entry in the coordinate table.
    pub fn unmapped(&self) -> Vec<&str> {
        self.totals.iter().filter(|t| t.coords.is_none()).map(|t| t.location.as_str()).collect()
    }

    pub fn excerpts(&self) -> impl Iterator<Item = &ExcerptRecord> {
        self.excerpt_ix.iter().map(|&i| &self.book.excerpts[i])
    }

    pub fn excerpts_for<'s>(&'s self, location: &'s str) -> impl Iterator<Item = &'s ExcerptRecord> + 's {
        self.excerpts().filter(move |r| r.location == location)
    }

    pub fn detail(&self) -> impl Iterator<Item = &DetailRow> {
        self.detail_ix.iter().map(|&i| &self.book.detail[i])
    }
}
