// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::UTF8_BOM;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). std-only.
/// A leading UTF-8 byte-order mark is ignored. Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_row(&mut rows, &mut row);

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize one sheet: BOM, header row, then data rows.
pub fn sheet_to_string(headers: &[&str], rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::from(UTF8_BOM.as_bytes());

    let header_row: Vec<String> = headers.iter().map(|h| s!(*h)).collect();
    let _ = write_row(&mut buf, &header_row, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_survive_separators_and_quotes() {
        let row = row!["文件名", "a,b", "say \"hi\"", "line\nbreak"];
        let mut buf = Vec::new();
        write_row(&mut buf, &row, ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "文件名,\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\"\n");
        assert_eq!(parse_rows(&text, ','), vec![row]);
    }

    #[test]
    fn bom_and_blank_lines_are_ignored() {
        let text = "\u{feff}地点,出现次数\r\n\r\n南京,3\r\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![row!["地点", "出现次数"], row!["南京", "3"]]);
    }

    #[test]
    fn sheet_string_starts_with_bom_and_header() {
        let s = sheet_to_string(&["地点", "出现次数"], &[row!["苏州", 0]], ',');
        assert!(s.starts_with(UTF8_BOM));
        assert_eq!(&s[UTF8_BOM.len()..], "地点,出现次数\n苏州,0\n");
    }
}
