// src/scan/document.rs
use crate::aliases::AliasTable;
use crate::tables::{DetailRow, ExcerptRecord};

use super::matcher::{find_overlapping, make_excerpt, CharIndex};

/// One text file, fully in memory for the length of its scan.
#[derive(Clone, Debug)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

/// Rows accumulated over a run, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct ScanTables {
    pub excerpts: Vec<ExcerptRecord>,
    pub detail: Vec<DetailRow>,
}

/// Scan one document against every location of `table`.
///
/// Appends one excerpt per match and exactly one detail row per location
/// (zero counts included). Returns the document's total match count.
pub fn scan_document(doc: &Document, table: &AliasTable, out: &mut ScanTables) -> u64 {
    let index = CharIndex::new(&doc.text);
    let mut doc_total = 0;

    for loc in table.locations() {
        let mut total = 0u64;
        for alias in &loc.aliases {
            for at in find_overlapping(&doc.text, alias) {
                total += 1;
                out.excerpts.push(ExcerptRecord {
                    file_name: doc.name.clone(),
                    location: loc.name.clone(),
                    alias: alias.clone(),
                    excerpt: make_excerpt(&doc.text, &index, at),
                });
            }
        }
        out.detail.push(DetailRow {
            file_name: doc.name.clone(),
            location: loc.name.clone(),
            count: total,
        });
        doc_total += total;
    }

    doc_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Location;

    fn nanjing_only() -> AliasTable {
        AliasTable::new(vec![Location {
            name: s!("南京"),
            aliases: vec![s!("南京"), s!("金陵"), s!("秦淮")],
        }])
        .unwrap()
    }

    #[test]
    fn one_excerpt_per_matched_alias() {
        let doc = Document::new("a.txt", "...南京...金陵...");
        let mut out = ScanTables::default();
        assert_eq!(scan_document(&doc, &nanjing_only(), &mut out), 2);

        assert_eq!(out.detail, vec![DetailRow { file_name: s!("a.txt"), location: s!("南京"), count: 2 }]);
        let aliases: Vec<&str> = out.excerpts.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(aliases, vec!["南京", "金陵"]);
        assert_eq!(out.excerpts[0].excerpt, "......南京...金陵......");
    }

    #[test]
    fn every_location_gets_a_detail_row() {
        let doc = Document::new("b.txt", "无地名");
        let mut out = ScanTables::default();
        let table = AliasTable::default();
        scan_document(&doc, &table, &mut out);
        assert_eq!(out.detail.len(), table.len());
        assert!(out.detail.iter().all(|r| r.count == 0));
        assert!(out.excerpts.is_empty());
    }

    #[test]
    fn excerpts_follow_alias_order_then_position() {
        // 京师 also contains 京; both are aliases of 北京 and are counted independently
        let doc = Document::new("c.txt", "京师在北，又到京城");
        let mut out = ScanTables::default();
        scan_document(&doc, &AliasTable::default(), &mut out);

        let beijing: Vec<&str> = out.excerpts.iter()
            .filter(|e| e.location == "北京")
            .map(|e| e.alias.as_str())
            .collect();
        assert_eq!(beijing, vec!["京师", "京", "京"]);
        let row = out.detail.iter().find(|r| r.location == "北京").unwrap();
        assert_eq!(row.count, 3);
    }
}
