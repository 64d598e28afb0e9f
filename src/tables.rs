// src/tables.rs
//
// Typed rows of the three result sheets, and their string-row conversions.
// Sheet I/O lives in store.rs; this file only knows about columns.

use std::error::Error;

use crate::config::consts::*;

pub const FREQUENCY_HEADERS: [&str; 2] = [COL_LOCATION, COL_COUNT];
pub const EXCERPT_HEADERS: [&str; 4] = [COL_FILE, COL_LOCATION, COL_ALIAS, COL_EXCERPT];
pub const DETAIL_HEADERS: [&str; 3] = [COL_FILE, COL_LOCATION, COL_COUNT];

/// 频率统计: one row per location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyRow {
    pub location: String,
    pub count: u64,
}

/// 原文摘录: one row per individual match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcerptRecord {
    pub file_name: String,
    pub location: String,
    pub alias: String,
    pub excerpt: String,
}

/// 详细明细: one row per document × location, zeros included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub file_name: String,
    pub location: String,
    pub count: u64,
}

/// All three sheets of one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workbook {
    pub frequency: Vec<FrequencyRow>,
    pub excerpts: Vec<ExcerptRecord>,
    pub detail: Vec<DetailRow>,
}

impl Workbook {
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty() && self.excerpts.is_empty() && self.detail.is_empty()
    }
}

/* ---------------- Row conversions ---------------- */

impl FrequencyRow {
    pub fn to_row(&self) -> Vec<String> {
        row![self.location, self.count]
    }
}

impl ExcerptRecord {
    pub fn to_row(&self) -> Vec<String> {
        row![self.file_name, self.location, self.alias, self.excerpt]
    }
}

impl DetailRow {
    pub fn to_row(&self) -> Vec<String> {
        row![self.file_name, self.location, self.count]
    }
}

/// Column positions of one sheet, resolved from its header row so column
/// order in the file does not matter.
pub struct ColumnMap<'a> {
    sheet: &'a str,
    ix: Vec<usize>,
}

impl<'a> ColumnMap<'a> {
    pub fn resolve(sheet: &'a str, header: &[String], wanted: &[&str]) -> Result<Self, Box<dyn Error>> {
        let mut ix = Vec::with_capacity(wanted.len());
        for name in wanted {
            let pos = header
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| format!("Sheet {}: missing column {}", sheet, name))?;
            ix.push(pos);
        }
        Ok(Self { sheet, ix })
    }

    /// Cell `col` (index into `wanted`) of a data row. Short rows read as "".
    pub fn cell<'r>(&self, row: &'r [String], col: usize) -> &'r str {
        row.get(self.ix[col]).map(|s| s.as_str()).unwrap_or("")
    }

    /// `line` is the 1-based data row, header and blank lines not counted.
    pub fn count(&self, row: &[String], col: usize, line: usize) -> Result<u64, Box<dyn Error>> {
        let raw = self.cell(row, col).trim();
        // spreadsheet software may have re-saved integers as "3.0"
        let raw = raw.strip_suffix(".0").unwrap_or(raw);
        raw.parse::<u64>()
            .map_err(|_| format!("Sheet {} data row {}: bad count {:?}", self.sheet, line, raw).into())
    }
}

pub fn frequency_from_rows(rows: &[Vec<String>]) -> Result<Vec<FrequencyRow>, Box<dyn Error>> {
    let Some((header, data)) = rows.split_first() else { return Ok(Vec::new()) };
    let cols = ColumnMap::resolve(SHEET_FREQUENCY, header, &FREQUENCY_HEADERS)?;
    data.iter()
        .enumerate()
        .map(|(i, r)| -> Result<FrequencyRow, Box<dyn Error>> {
            Ok(FrequencyRow {
                location: s!(cols.cell(r, 0)),
                count: cols.count(r, 1, i + 1)?,
            })
        })
        .collect()
}

pub fn excerpts_from_rows(rows: &[Vec<String>]) -> Result<Vec<ExcerptRecord>, Box<dyn Error>> {
    let Some((header, data)) = rows.split_first() else { return Ok(Vec::new()) };
    let cols = ColumnMap::resolve(SHEET_EXCERPTS, header, &EXCERPT_HEADERS)?;
    Ok(data.iter()
        .map(|r| ExcerptRecord {
            file_name: s!(cols.cell(r, 0)),
            location: s!(cols.cell(r, 1)),
            alias: s!(cols.cell(r, 2)),
            excerpt: s!(cols.cell(r, 3)),
        })
        .collect())
}

pub fn detail_from_rows(rows: &[Vec<String>]) -> Result<Vec<DetailRow>, Box<dyn Error>> {
    let Some((header, data)) = rows.split_first() else { return Ok(Vec::new()) };
    let cols = ColumnMap::resolve(SHEET_DETAIL, header, &DETAIL_HEADERS)?;
    data.iter()
        .enumerate()
        .map(|(i, r)| -> Result<DetailRow, Box<dyn Error>> {
            Ok(DetailRow {
                file_name: s!(cols.cell(r, 0)),
                location: s!(cols.cell(r, 1)),
                count: cols.count(r, 2, i + 1)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_resolve_by_name_not_position() {
        let rows = vec![
            row!["出现次数", "地点"],
            row!["5", "杭州"],
            row!["2.0", "湖州"],
        ];
        let freq = frequency_from_rows(&rows).unwrap();
        assert_eq!(freq[0], FrequencyRow { location: s!("杭州"), count: 5 });
        assert_eq!(freq[1].count, 2);
    }

    #[test]
    fn missing_column_and_bad_count_are_errors() {
        let missing = vec![row!["地点"], row!["杭州"]];
        let err = frequency_from_rows(&missing).unwrap_err().to_string();
        assert!(err.contains("出现次数"));

        let bad = vec![row!["文件名", "地点", "出现次数"], row!["a.txt", "杭州", "many"]];
        let err = detail_from_rows(&bad).unwrap_err().to_string();
        assert!(err.contains("data row 1"), "{err}");
    }

    #[test]
    fn header_only_sheet_is_empty() {
        let rows = vec![EXCERPT_HEADERS.iter().map(|h| s!(*h)).collect()];
        assert!(excerpts_from_rows(&rows).unwrap().is_empty());
    }
}
