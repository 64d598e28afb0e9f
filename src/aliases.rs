// src/aliases.rs
//
// The alias table: canonical location → ordered alias list.
// Immutable once built; the scanner borrows it for the whole run.

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::consts::SHEET_SEP;
use crate::csv::parse_rows;

/// Built-in dataset for 《儒林外史》.
pub const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    ("南京", &["南京", "金陵", "秦淮"]),
    ("苏州", &["苏州", "姑苏", "吴门"]),
    ("杭州", &["杭州", "西湖", "武林", "钱塘"]),
    ("北京", &["北京", "京师", "京", "长安", "都门", "帝京"]),
    ("扬州", &["扬州", "维扬", "广陵"]),
    ("济南", &["济南", "山东", "大明湖", "历下"]),
    ("湖州", &["湖州", "吴兴"]),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub aliases: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable {
    locations: Vec<Location>,
}

impl Default for AliasTable {
    fn default() -> Self {
        let locations = DEFAULT_ALIASES
            .iter()
            .map(|(name, aliases)| Location {
                name: s!(*name),
                aliases: aliases.iter().map(|a| s!(*a)).collect(),
            })
            .collect();
        Self { locations }
    }
}

impl AliasTable {
    /// Validates and freezes a table. Order of `locations` and of each alias
    /// list is kept; it drives the order of the excerpt sheet.
    pub fn new(locations: Vec<Location>) -> Result<Self, Box<dyn Error>> {
        if locations.is_empty() {
            return Err("Alias table has no locations".into());
        }
        let mut seen = HashSet::new();
        for loc in &locations {
            if loc.name.trim().is_empty() {
                return Err("Alias table has a location with an empty name".into());
            }
            if !seen.insert(loc.name.as_str()) {
                return Err(format!("Duplicate location in alias table: {}", loc.name).into());
            }
            if loc.aliases.is_empty() {
                return Err(format!("Location {} has no aliases", loc.name).into());
            }
            if loc.aliases.iter().any(|a| a.is_empty()) {
                return Err(format!("Location {} has an empty alias", loc.name).into());
            }
        }
        Ok(Self { locations })
    }

    /// Parse `canonical,alias,alias,...` rows. The canonical name counts as
    /// an alias; it is put first unless the row already lists it.
    pub fn from_csv_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut locations = Vec::new();
        for (n, row) in parse_rows(text, SHEET_SEP).into_iter().enumerate() {
            let mut cells = row.into_iter().map(|c| s!(c.trim()));
            let Some(name) = cells.next() else { continue };
            if name.starts_with('#') { continue; }
            if name.is_empty() {
                return Err(format!("Alias file entry {}: missing location name", n + 1).into());
            }

            let mut rest: Vec<String> = cells.collect();
            while rest.last().is_some_and(|c| c.is_empty()) { rest.pop(); } // trailing commas
            if rest.iter().any(|c| c.is_empty()) {
                return Err(format!("Alias file entry {}: empty alias for {}", n + 1, name).into());
            }
            let mut aliases: Vec<String> = Vec::new();
            for alias in rest {
                if !aliases.contains(&alias) { aliases.push(alias); }
            }
            if !aliases.contains(&name) {
                aliases.insert(0, name.clone());
            }
            locations.push(Location { name, aliases });
        }
        Self::new(locations)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read alias file {}: {}", path.display(), e))?;
        let table = Self::from_csv_str(&text)?;
        logf!("Aliases: loaded {} location(s) from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn locations(&self) -> &[Location] { &self.locations }
    pub fn len(&self) -> usize { self.locations.len() }
    pub fn is_empty(&self) -> bool { self.locations.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }
}
