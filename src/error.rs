use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single category's file could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("could not parse {}: no columns to parse from file", path.display())]
    NoColumns { path: PathBuf },

    #[error(
        "could not parse {}: expected {expected} fields in line {line}, saw {found}",
        path.display()
    )]
    TooManyFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Registry configuration problems, reported at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("reading registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing registry: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("registry has no categories")]
    Empty,

    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),
}

/// Serialising a table back to CSV failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("flushing CSV: {0}")]
    Io(#[from] io::Error),
}
