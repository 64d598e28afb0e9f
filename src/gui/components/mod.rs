// src/gui/components/mod.rs
pub mod top_bar;
pub mod location_panel;
pub mod tabs;
pub mod overview;
pub mod freq_table;
pub mod bar_chart;
pub mod bubble_map;
pub mod excerpts;
pub mod detail_table;
