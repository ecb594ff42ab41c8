use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::Path;

use super::model::{CellValue, LeadRow, LeadTable};
use super::registry::Registry;
use crate::error::LoadError;

/// Column added to every loaded row, holding the row's category name.
pub const SOURCE_COLUMN: &str = "Service";

// ---------------------------------------------------------------------------
// Loaded tables and warnings
// ---------------------------------------------------------------------------

/// A category whose file loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub category: String,
    /// Parsed rows, each tagged with [`SOURCE_COLUMN`].
    pub table: LeadTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningReason {
    MissingFile,
    ParseError,
}

/// A non-fatal, per-category load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub category: String,
    pub reason: WarningReason,
    pub detail: String,
}

impl LoadWarning {
    fn from_error(category: &str, err: &LoadError) -> Self {
        let reason = match err {
            LoadError::MissingFile { .. } => WarningReason::MissingFile,
            _ => WarningReason::ParseError,
        };
        LoadWarning {
            category: category.to_string(),
            reason,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.detail)
    }
}

// ---------------------------------------------------------------------------
// Session cache
// ---------------------------------------------------------------------------

/// Everything loaded for one session. Read-only once built; a reload
/// builds a fresh cache instead of mutating this one.
#[derive(Debug, Clone, Default)]
pub struct LeadCache {
    tables: Vec<LoadedTable>,
    warnings: Vec<LoadWarning>,
}

impl LeadCache {
    /// Load every registry entry. Shorthand for [`load_all`].
    pub fn load(registry: &Registry) -> Self {
        load_all(registry)
    }

    /// Loaded categories, in registry order.
    pub fn tables(&self) -> &[LoadedTable] {
        &self.tables
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn get(&self, category: &str) -> Option<&LoadedTable> {
        self.tables.iter().find(|t| t.category == category)
    }

    /// Total rows across all loaded categories.
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.table.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every registered category.
///
/// A failing file only produces a [`LoadWarning`]; the remaining
/// categories are still loaded.
pub fn load_all(registry: &Registry) -> LeadCache {
    let mut cache = LeadCache::default();

    for entry in registry.entries() {
        let path = registry.path_of(entry);
        match load_category(&path, &entry.category) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with {} columns for '{}'",
                    table.len(),
                    table.columns.len(),
                    entry.category
                );
                cache.tables.push(LoadedTable {
                    category: entry.category.clone(),
                    table,
                });
            }
            Err(e) => {
                log::warn!("Skipping '{}': {e}", entry.category);
                cache.warnings.push(LoadWarning::from_error(&entry.category, &e));
            }
        }
    }

    cache
}

/// Load one CSV file and tag each row with `category`.
pub fn load_category(path: &Path, category: &str) -> Result<LeadTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut table = load_csv(path)?;

    if !table.has_column(SOURCE_COLUMN) {
        table.columns.push(SOURCE_COLUMN.to_string());
    }
    for row in &mut table.rows {
        row.set(SOURCE_COLUMN, CellValue::Text(category.to_string()));
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: one header row, any columns.
///
/// Blank lines are skipped and short records are padded with missing
/// values. A record with more fields than the header is an error.
pub fn load_csv(path: &Path) -> Result<LeadTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, path)
}

/// Parse CSV from any reader. `path` is only used for error context.
pub fn read_csv<R: std::io::Read>(input: R, path: &Path) -> Result<LeadTable, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let raw_headers = reader.headers().map_err(csv_err)?.clone();
    if raw_headers.is_empty() {
        return Err(LoadError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    let headers = dedupe_headers(raw_headers.iter());

    let mut table = LeadTable::new(headers);

    for result in reader.records() {
        let record = result.map_err(csv_err)?;

        if record.len() > table.columns.len() {
            return Err(LoadError::TooManyFields {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: table.columns.len(),
                found: record.len(),
            });
        }

        let mut row = LeadRow::default();
        for (idx, col) in table.columns.iter().enumerate() {
            let value = record
                .get(idx)
                .map(CellValue::from_field)
                .unwrap_or(CellValue::Missing);
            row.set(col.clone(), value);
        }
        table.rows.push(row);
    }

    Ok(table)
}

/// Name blank headers `Unnamed: <idx>` and suffix repeated ones with
/// `.1`, `.2`, … so every column name is unique.
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<String> = raw
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut used: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());
    for name in raw {
        let mut candidate = name.clone();
        let mut n = 1;
        while used.contains(&candidate) {
            candidate = format!("{name}.{n}");
            n += 1;
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
