// src/config/state.rs
use super::options::AppOptions;

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewTab {
    Overview,
    Map,
    Excerpts,
    Documents,
}

impl ViewTab {
    pub const ALL: [ViewTab; 4] = [ViewTab::Overview, ViewTab::Map, ViewTab::Excerpts, ViewTab::Documents];

    pub fn title(self) -> &'static str {
        match self {
            ViewTab::Overview => "Overview",
            ViewTab::Map => "Map",
            ViewTab::Excerpts => "Excerpts",
            ViewTab::Documents => "Documents",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Location,
    Count,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSort {
    pub key: SortKey,
    pub descending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self { key: SortKey::Count, descending: true }
    }
}

impl TableSort {
    /// Header click: same key flips direction, new key starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.descending = !self.descending;
        } else {
            *self = Self { key, descending: true };
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Locations ticked in the left panel
    pub selected_locations: Vec<String>,

    /// Anchor for shift-click range selection
    pub last_clicked: Option<usize>,

    pub current_tab: ViewTab,
    pub table_sort: TableSort,

    /// Workbook path as typed in the top bar
    pub path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_locations: Vec::new(),
            last_clicked: None,
            current_tab: ViewTab::Overview,
            table_sort: TableSort::default(),
            path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_toggle_flips_then_resets() {
        let mut s = TableSort::default();
        s.toggle(SortKey::Count);
        assert!(!s.descending);
        s.toggle(SortKey::Location);
        assert_eq!(s, TableSort { key: SortKey::Location, descending: true });
    }
}
