// End-to-end tests: real CSV files on disk through registry, loader,
// search, category view and export.

use std::fs;
use std::path::Path;

use leads_dashboard::data::export::{export_csv, search_export_file_name};
use leads_dashboard::data::loader::{load_all, read_csv, WarningReason, SOURCE_COLUMN};
use leads_dashboard::data::model::{CellValue, LeadRow};
use leads_dashboard::data::registry::Registry;
use leads_dashboard::data::search::{search, SearchQuery};
use leads_dashboard::data::view::{view, NotFound};

// =============================================================================
// Helpers
// =============================================================================

fn branding_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("branding.csv"),
        "Name,Email\nAcme,a@x.com\nBeta,b@y.com\n",
    )
    .unwrap();
    dir
}

fn branding_registry(dir: &Path) -> Registry {
    Registry::new(dir, [("Branding Strategy", "branding.csv")]).unwrap()
}

fn row(pairs: &[(&str, &str)]) -> LeadRow {
    pairs.iter().copied().collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn e2e_single_category_loads_and_tags_every_row() {
    let dir = branding_dir();
    let cache = load_all(&branding_registry(dir.path()));

    assert!(cache.warnings().is_empty(), "{:?}", cache.warnings());
    assert_eq!(cache.tables().len(), 1);

    let table = &cache.tables()[0].table;
    assert_eq!(table.len(), 2);
    assert_eq!(table.columns, vec!["Name", "Email", SOURCE_COLUMN]);
    for r in &table.rows {
        assert_eq!(
            r.get(SOURCE_COLUMN),
            &CellValue::Text("Branding Strategy".into())
        );
    }
}

#[test]
fn e2e_search_is_case_insensitive() {
    let dir = branding_dir();
    let cache = load_all(&branding_registry(dir.path()));

    let q = SearchQuery::new("acme").unwrap();
    let result = search(cache.tables(), &q);

    assert_eq!(result.len(), 1);
    assert_eq!(
        result.rows[0],
        row(&[
            ("Name", "Acme"),
            ("Email", "a@x.com"),
            ("Service", "Branding Strategy"),
        ])
    );
}

#[test]
fn e2e_missing_file_warns_and_view_is_not_found() {
    let dir = branding_dir();
    let reg = Registry::new(
        dir.path(),
        [
            ("Branding Strategy", "branding.csv"),
            ("CRM Services", "crm_services_leads.csv"),
        ],
    )
    .unwrap();
    let cache = load_all(&reg);

    assert!(cache.get("CRM Services").is_none());
    assert_eq!(cache.warnings().len(), 1);
    assert_eq!(cache.warnings()[0].reason, WarningReason::MissingFile);
    assert_eq!(
        view(&cache, "CRM Services").unwrap_err(),
        NotFound("CRM Services".into())
    );
    assert_eq!(view(&cache, "Branding Strategy").unwrap().row_count(), 2);
}

#[test]
fn e2e_empty_query_never_reaches_search() {
    assert!(SearchQuery::new("").is_none());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn e2e_export_round_trips_search_and_view_results() {
    let dir = branding_dir();
    fs::write(
        dir.path().join("crm.csv"),
        "Name,Company,Phone\nGamma,\"Acme, Inc\",007\nDelta,,\n",
    )
    .unwrap();
    let reg = Registry::new(
        dir.path(),
        [("Branding Strategy", "branding.csv"), ("CRM", "crm.csv")],
    )
    .unwrap();
    let cache = load_all(&reg);

    let q = SearchQuery::new("ACME").unwrap();
    let result = search(cache.tables(), &q);
    assert_eq!(result.len(), 2);
    assert_eq!(search_export_file_name(&q), "search_results_ACME.csv");

    let bytes = export_csv(&result).unwrap();
    let back = read_csv(bytes.as_slice(), Path::new("search.csv")).unwrap();
    assert_eq!(back, result);

    let crm = view(&cache, "CRM").unwrap();
    let bytes = export_csv(crm.table).unwrap();
    let back = read_csv(bytes.as_slice(), Path::new("crm.csv")).unwrap();
    assert_eq!(&back, crm.table);
    assert_eq!(back.rows[0].get("Phone").to_string(), "007");
}

#[test]
fn e2e_reloading_rereads_files() {
    let dir = branding_dir();
    let reg = branding_registry(dir.path());
    let first = load_all(&reg);

    fs::write(dir.path().join("branding.csv"), "Name\nOnly\n").unwrap();
    let second = load_all(&reg);

    assert_eq!(first.total_rows(), 2);
    assert_eq!(second.total_rows(), 1);
}
