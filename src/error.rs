//! Error types for Firmata Builder.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading inputs or generating a sketch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// A selected feature has no entry in the catalog.
    #[error("unknown feature <{0}>: it is not in the feature catalog")]
    UnknownFeature(String),

    /// A feature was selected more than once.
    #[error("feature <{0}> was selected more than once")]
    DuplicateFeature(String),

    /// The catalog directory or one of its files couldn't be read.
    #[error("couldn't read feature catalog at {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A catalog file isn't a valid feature description.
    #[error("feature description {path} is misformatted: {source}")]
    CatalogParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Two catalog files describe a feature with the same name.
    #[error("feature <{name}> is described twice (second time in {path})")]
    DuplicateCatalogEntry {
        name: String,
        path: PathBuf,
    },

    /// The selection file couldn't be read.
    #[error("couldn't read selection file {path}: {source}")]
    SelectionIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The selection file is misformatted.
    #[error("selection file {path} is misformatted: {source}")]
    SelectionParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Writing the generated sketch failed.
    #[error("couldn't write sketch to {path}: {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuilderError>;
