// src/config/consts.rs

// Local store (log file lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Scan input
pub const DEFAULT_INPUT_DIR: &str = "rulinwaishi";
pub const DEFAULT_EXT: &str = "txt";

// Excerpt window, in characters relative to the match start
pub const EXCERPT_BEFORE: usize = 250;
pub const EXCERPT_AFTER: usize = 350;
pub const ELLIPSIS: &str = "...";

// Output artifact: one directory, one CSV file per sheet
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_WORKBOOK: &str = "分析结果";
pub const SHEET_EXT: &str = "csv";
pub const SHEET_SEP: char = ',';
pub const UTF8_BOM: &str = "\u{feff}";

pub const SHEET_FREQUENCY: &str = "频率统计";
pub const SHEET_EXCERPTS: &str = "原文摘录";
pub const SHEET_DETAIL: &str = "详细明细";

// Column names
pub const COL_LOCATION: &str = "地点";
pub const COL_COUNT: &str = "出现次数";
pub const COL_FILE: &str = "文件名";
pub const COL_ALIAS: &str = "原文关键词";
pub const COL_EXCERPT: &str = "原文摘录";

// Dashboard
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 860.0;
pub const RELOAD_CHECK_MS: u64 = 1_000;
pub const MAP_CENTER_LAT: f64 = 33.0;
pub const MAP_CENTER_LON: f64 = 118.0;
pub const MAP_ZOOM: f64 = 4.5;
pub const MAP_TILE_PX: f64 = 256.0;
pub const BUBBLE_SIZE_MAX: f32 = 40.0;
pub const MAP_HEIGHT: f32 = 500.0;
pub const CHART_HEIGHT: f32 = 350.0;
