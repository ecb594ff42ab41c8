//! Data layer: registry, loading, search, per-category view and export.
//!
//! Architecture:
//! ```text
//!   Registry  (category → file)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse each CSV, tag rows → LeadCache
//!   └──────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌──────────┐
//!   │  search   │   │   view    │  global match / one category
//!   └──────────┘   └──────────┘
//!        │              │
//!        └──────┬───────┘
//!               ▼
//!         ┌──────────┐
//!         │  export   │  LeadTable → CSV bytes
//!         └──────────┘
//! ```

pub mod export;
pub mod loader;
pub mod model;
pub mod registry;
pub mod search;
pub mod view;
