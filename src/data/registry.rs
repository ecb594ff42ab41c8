use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Dataset registry: category name → CSV file
// ---------------------------------------------------------------------------

/// Categories shipped with the dashboard, in display order.
const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("Branding Strategy", "branding_strategy_leads.csv"),
    ("CRM Services", "crm_services_leads.csv"),
    ("Creative Copywriting", "creative_copywriting_leads.csv"),
    (
        "Tailored Software Development",
        "tailored_software_development_leads.csv",
    ),
    ("Social Media Management", "social_media_management_leads.csv"),
    ("ERP Services", "erp_services_leads.csv"),
    ("Email Marketing", "email_marketing_leads.csv"),
    ("Ecommerce Solutions", "ecommerce_solutions_leads.csv"),
    ("UI/UX Design", "ui_ux_design_leads.csv"),
    ("Performance Audits", "performance_audits_leads.csv"),
];

/// One registered category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryEntry {
    #[serde(rename = "name")]
    pub category: String,
    /// File name, relative to the registry's data directory.
    pub file: String,
}

/// Ordered, immutable mapping of category name to file.
///
/// Order is significant: it drives the category selector and the
/// category precedence of search results.
#[derive(Debug, Clone)]
pub struct Registry {
    data_dir: PathBuf,
    entries: Vec<RegistryEntry>,
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(rename = "category", default)]
    categories: Vec<RegistryEntry>,
}

impl Registry {
    /// Build a registry from `(category, file)` pairs.
    pub fn new<I, C, F>(data_dir: impl Into<PathBuf>, entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (C, F)>,
        C: Into<String>,
        F: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(c, f)| RegistryEntry {
                category: c.into(),
                file: f.into(),
            })
            .collect();
        Self::from_entries(data_dir.into(), entries)
    }

    /// The ten built-in lead categories, resolved under `data_dir`.
    pub fn builtin(data_dir: impl Into<PathBuf>) -> Self {
        Registry {
            data_dir: data_dir.into(),
            entries: BUILTIN_CATEGORIES
                .iter()
                .map(|(c, f)| RegistryEntry {
                    category: c.to_string(),
                    file: f.to_string(),
                })
                .collect(),
        }
    }

    /// Parse a TOML registry:
    ///
    /// ```toml
    /// [[category]]
    /// name = "Branding Strategy"
    /// file = "branding.csv"
    /// ```
    pub fn from_toml_str(data_dir: impl Into<PathBuf>, text: &str) -> Result<Self, RegistryError> {
        let raw: RegistryFile = toml::from_str(text)?;
        Self::from_entries(data_dir.into(), raw.categories)
    }

    /// Read a TOML registry from disk.
    pub fn from_file(data_dir: impl Into<PathBuf>, path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(data_dir, &text)
    }

    fn from_entries(data_dir: PathBuf, entries: Vec<RegistryEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for e in &entries {
            if !seen.insert(e.category.as_str()) {
                return Err(RegistryError::DuplicateCategory(e.category.clone()));
            }
        }
        Ok(Registry { data_dir, entries })
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn get(&self, category: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Full path of an entry's file.
    pub fn path_of(&self, entry: &RegistryEntry) -> PathBuf {
        self.data_dir.join(&entry.file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
