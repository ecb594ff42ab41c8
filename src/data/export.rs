use super::model::LeadTable;
use super::registry::RegistryEntry;
use super::search::SearchQuery;
use crate::error::ExportError;

const SEARCH_EXPORT_PREFIX: &str = "search_results_";

/// Serialise `table` to UTF-8 CSV: header row, then one record per row,
/// both in the table's order. Missing values become empty fields.
pub fn export_csv(table: &LeadTable) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for idx in 0..table.len() {
        writer.write_record(table.row_cells(idx).map(|c| c.as_field()))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Download name for a search result, e.g. `search_results_acme.csv`.
/// Path separators in the query are replaced so the name stays a single
/// file component.
pub fn search_export_file_name(query: &SearchQuery) -> String {
    let safe: String = query
        .as_str()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{SEARCH_EXPORT_PREFIX}{safe}.csv")
}

/// Download name for a full category: its configured file name.
pub fn category_export_file_name(entry: &RegistryEntry) -> String {
    entry.file.clone()
}
