use thiserror::Error;

use super::loader::{LeadCache, LoadedTable};
use super::model::LeadTable;

/// A single category's table as loaded.
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'a> {
    pub category: &'a str,
    pub table: &'a LeadTable,
}

impl CategoryView<'_> {
    /// Number of leads in the category.
    pub fn row_count(&self) -> usize {
        self.table.len()
    }
}

/// The category is unknown, or its file failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no data loaded for category '{0}'")]
pub struct NotFound(pub String);

/// Look up one category in the session cache.
pub fn view<'a>(cache: &'a LeadCache, category: &str) -> Result<CategoryView<'a>, NotFound> {
    cache
        .get(category)
        .map(|LoadedTable { category, table }| CategoryView {
            category: category.as_str(),
            table,
        })
        .ok_or_else(|| NotFound(category.to_string()))
}
