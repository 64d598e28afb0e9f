// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{open, scan}.

mod open;  // src/gui/actions/open.rs
mod scan;  // src/gui/actions/scan.rs

pub use open::open;
pub use scan::scan;
