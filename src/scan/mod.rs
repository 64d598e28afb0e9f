// src/scan/mod.rs
mod matcher;
mod document;
mod aggregate;

pub use matcher::{excerpt_window, find_overlapping, make_excerpt, CharIndex, Matches};
pub use document::{scan_document, Document, ScanTables};
pub use aggregate::{summarize, into_workbook};
