//! Leads dashboard: browse, search and export lead CSV files grouped by
//! service category.
//!
//! The non-GUI modules (`data`, `config`, `state`) are exposed for the
//! integration tests under `tests/`.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
