use std::path::Path;

use crate::color::CategoryColors;
use crate::data::export::{category_export_file_name, export_csv, search_export_file_name};
use crate::data::loader::{LeadCache, LoadWarning};
use crate::data::model::LeadTable;
use crate::data::registry::Registry;
use crate::data::search::{search, SearchQuery};
use crate::data::view::{view, CategoryView, NotFound};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    GlobalSearch,
    Category,
}

/// Result of the current global search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub table: LeadTable,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub registry: Registry,

    /// Session cache, rebuilt only by [`AppState::reload`].
    cache: LeadCache,

    pub mode: Mode,

    /// Search box contents, as typed.
    pub query_text: String,

    /// Cached result for `query_text` (None while the box is empty).
    search: Option<SearchOutcome>,

    /// Category shown in individual view.
    pub selected_category: String,

    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start a session: load every registered file once.
    pub fn new(registry: Registry) -> Self {
        let cache = LeadCache::load(&registry);
        let colors = CategoryColors::new(registry.entries().iter().map(|e| e.category.as_str()));
        let selected_category = registry
            .entries()
            .first()
            .map(|e| e.category.clone())
            .unwrap_or_default();

        Self {
            registry,
            cache,
            mode: Mode::GlobalSearch,
            query_text: String::new(),
            search: None,
            selected_category,
            colors,
            status_message: None,
        }
    }

    pub fn cache(&self) -> &LeadCache {
        &self.cache
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        self.cache.warnings()
    }

    /// Discard the session cache and read every file again.
    pub fn reload(&mut self) {
        log::info!("Reloading lead files from {}", self.registry.data_dir().display());
        self.cache = LeadCache::load(&self.registry);
        self.refresh_search();
        self.status_message = None;
    }

    /// Update the search box; an empty box clears the result.
    pub fn set_query(&mut self, text: &str) {
        self.query_text = text.to_string();
        self.refresh_search();
    }

    /// Recompute the cached result for `query_text`.
    pub fn refresh_search(&mut self) {
        self.search = SearchQuery::new(&self.query_text).map(|query| {
            let table = search(self.cache.tables(), &query);
            SearchOutcome { query, table }
        });
    }

    pub fn search_outcome(&self) -> Option<&SearchOutcome> {
        self.search.as_ref()
    }

    pub fn current_view(&self) -> Result<CategoryView<'_>, NotFound> {
        view(&self.cache, &self.selected_category)
    }

    /// Download name and a snapshot of the current search result.
    pub fn search_download(&self) -> Option<(String, LeadTable)> {
        self.search
            .as_ref()
            .map(|s| (search_export_file_name(&s.query), s.table.clone()))
    }

    /// Download name for the selected category.
    pub fn category_download_name(&self) -> Option<String> {
        self.registry
            .get(&self.selected_category)
            .map(category_export_file_name)
    }

    /// Write `table` as CSV to `dest` and record the outcome in the status line.
    pub fn save_table(&mut self, table: &LeadTable, dest: &Path) {
        let result = export_csv(table)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| std::fs::write(dest, bytes).map_err(anyhow::Error::from));
        match result {
            Ok(()) => {
                log::info!("Exported {} rows to {}", table.len(), dest.display());
                self.status_message = Some(format!(
                    "Exported {} rows to {}",
                    table.len(),
                    dest.display()
                ));
            }
            Err(e) => {
                log::error!("Export to {} failed: {e:#}", dest.display());
                self.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn state_in(dir: &Path) -> AppState {
        fs::write(dir.join("a.csv"), "Name,Email\nAcme,a@x.com\nBeta,b@y.com\n").unwrap();
        let reg = Registry::new(dir, [("Alpha", "a.csv"), ("Later", "later.csv")]).unwrap();
        AppState::new(reg)
    }

    #[test]
    fn empty_query_shows_no_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.set_query("ACME");
        assert_eq!(state.search_outcome().map(|s| s.table.len()), Some(1));

        state.set_query("");
        assert!(state.search_outcome().is_none());
        assert!(state.search_download().is_none());
    }

    #[test]
    fn missing_category_is_warned_and_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(state.selected_category, "Alpha");
        assert_eq!(state.current_view().unwrap().row_count(), 2);

        state.selected_category = "Later".into();
        assert!(state.current_view().is_err());
        assert_eq!(state.category_download_name().as_deref(), Some("later.csv"));
    }

    #[test]
    fn reload_picks_up_new_files_and_refreshes_search() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.set_query("gamma");
        assert_eq!(state.search_outcome().map(|s| s.table.len()), Some(0));

        fs::write(dir.path().join("later.csv"), "Name\nGamma\n").unwrap();
        state.reload();
        assert!(state.warnings().is_empty());
        assert_eq!(state.search_outcome().map(|s| s.table.len()), Some(1));
    }

    #[test]
    fn save_table_writes_csv_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.set_query("acme");
        let (name, table) = state.search_download().unwrap();
        assert_eq!(name, "search_results_acme.csv");

        let dest = dir.path().join(&name);
        state.save_table(&table, &dest);
        let written = fs::read_to_string(&dest).unwrap();
        assert_eq!(written, "Name,Email,Service\nAcme,a@x.com,Alpha\n");
        assert!(state.status_message.as_deref().unwrap().starts_with("Exported 1 rows"));
    }
}
