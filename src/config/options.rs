// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scan: ScanOptions,
    pub dashboard: DashboardOptions,
}

/// Scanner inputs. Defaults mirror the dataset layout: `rulinwaishi/*.txt`
/// scanned into `out/分析结果/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub input_dir: PathBuf,
    pub out_dir: PathBuf,
    /// File extension without the leading dot.
    pub ext: String,
    /// Optional CSV alias table; `None` uses the built-in one.
    pub aliases_file: Option<PathBuf>,
    /// Print the alias table and exit.
    pub list_aliases: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            out_dir: default_workbook_dir(),
            ext: s!(DEFAULT_EXT),
            aliases_file: None,
            list_aliases: false,
        }
    }
}

impl ScanOptions {
    /// Accepts `txt`, `.txt` or `*.txt`.
    pub fn set_ext(&mut self, ext: &str) {
        self.ext = s!(ext.trim().trim_start_matches('*').trim_start_matches('.'));
    }

    /// File-name suffix a document must end with.
    pub fn suffix(&self) -> String {
        format!(".{}", self.ext)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub workbook_dir: PathBuf,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { workbook_dir: default_workbook_dir() }
    }
}

pub fn default_workbook_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_WORKBOOK)
}
