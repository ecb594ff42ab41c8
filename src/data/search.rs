use std::collections::HashSet;

use super::loader::LoadedTable;
use super::model::{CellValue, LeadRow, LeadTable};

// ---------------------------------------------------------------------------
// Search query
// ---------------------------------------------------------------------------

/// A non-empty free-text query.
///
/// The empty string cannot be represented, so callers have to decide what
/// to show for an empty input before any search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    /// `None` for the empty string. Whitespace is kept as typed.
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(SearchQuery {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The query exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive literal containment. Missing cells never match.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match cell {
            CellValue::Text(s) => s.to_lowercase().contains(&self.needle),
            CellValue::Missing => false,
        }
    }

    pub fn matches_row(&self, row: &LeadRow) -> bool {
        row.values().any(|c| self.matches(c))
    }
}

// ---------------------------------------------------------------------------
// Global search
// ---------------------------------------------------------------------------

/// Rows from every table with at least one cell containing `query`.
///
/// Rows keep table order, then file order. The result's columns are the
/// union of all input columns in first-seen order; a row whose table lacks
/// a column reads it as missing.
pub fn search(tables: &[LoadedTable], query: &SearchQuery) -> LeadTable {
    let mut result = LeadTable::new(union_columns(tables));

    for loaded in tables {
        result.rows.extend(
            loaded
                .table
                .rows
                .iter()
                .filter(|row| query.matches_row(row))
                .cloned(),
        );
    }

    log::debug!(
        "Search '{}' matched {} rows across {} tables",
        query.as_str(),
        result.len(),
        tables.len()
    );
    result
}

fn union_columns(tables: &[LoadedTable]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for col in tables.iter().flat_map(|t| t.table.columns.iter()) {
        if seen.insert(col.as_str()) {
            columns.push(col.clone());
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::SOURCE_COLUMN;

    fn loaded(category: &str, columns: &[&str], rows: &[&[&str]]) -> LoadedTable {
        let mut cols: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        cols.push(SOURCE_COLUMN.to_string());
        let mut table = LeadTable::new(cols);
        for values in rows {
            let mut row: LeadRow = columns.iter().copied().zip(values.iter().copied()).collect();
            row.set(SOURCE_COLUMN, CellValue::Text(category.to_string()));
            table.rows.push(row);
        }
        LoadedTable {
            category: category.to_string(),
            table,
        }
    }

    fn fixture() -> Vec<LoadedTable> {
        vec![
            loaded(
                "Branding Strategy",
                &["Name", "Email"],
                &[&["Acme", "a@x.com"], &["Beta", "b@y.com"]],
            ),
            loaded(
                "CRM Services",
                &["Name", "Company"],
                &[&["Gamma", "ACME Corp"], &["Delta", ""]],
            ),
        ]
    }

    fn names(table: &LeadTable) -> Vec<String> {
        table.rows.iter().map(|r| r.get("Name").to_string()).collect()
    }

    #[test]
    fn empty_query_is_not_representable() {
        assert!(SearchQuery::new("").is_none());
        assert_eq!(SearchQuery::new(" ").map(|q| q.as_str().to_string()), Some(" ".into()));
    }

    #[test]
    fn match_is_case_insensitive_and_keeps_category_order() {
        let q = SearchQuery::new("acme").unwrap();
        let result = search(&fixture(), &q);
        assert_eq!(names(&result), vec!["Acme", "Gamma"]);
        assert_eq!(result.rows[1].get(SOURCE_COLUMN).to_string(), "CRM Services");
    }

    #[test]
    fn columns_are_the_union_in_first_seen_order() {
        let q = SearchQuery::new("a").unwrap();
        let result = search(&fixture(), &q);
        assert_eq!(result.columns, vec!["Name", "Email", SOURCE_COLUMN, "Company"]);
        // Gamma comes from a table without an Email column.
        let gamma = result.rows.iter().find(|r| r.get("Name").to_string() == "Gamma").unwrap();
        assert!(gamma.get("Email").is_missing());
    }

    #[test]
    fn source_column_is_searchable() {
        let q = SearchQuery::new("crm serv").unwrap();
        assert_eq!(names(&search(&fixture(), &q)), vec!["Gamma", "Delta"]);
    }

    #[test]
    fn missing_cells_never_match() {
        let q = SearchQuery::new("nan").unwrap();
        assert!(search(&fixture(), &q).is_empty());
    }

    #[test]
    fn no_match_is_an_empty_table_not_an_error() {
        let q = SearchQuery::new("zzz").unwrap();
        let result = search(&fixture(), &q);
        assert!(result.is_empty());
        assert!(!result.columns.is_empty());
    }

    #[test]
    fn every_returned_row_contains_the_query_and_no_other_does() {
        let tables = fixture();
        for text in ["a", "B", "@", "corp", ".com", "x"] {
            let q = SearchQuery::new(text).unwrap();
            let result = search(&tables, &q);
            let expected: Vec<&LeadRow> = tables
                .iter()
                .flat_map(|t| t.table.rows.iter())
                .filter(|r| {
                    r.values()
                        .any(|c| c.to_string().to_lowercase().contains(&text.to_lowercase()))
                })
                .collect();
            assert_eq!(result.rows.iter().collect::<Vec<_>>(), expected, "query {text:?}");
            assert_eq!(search(&tables, &q), result);
        }
    }
}
