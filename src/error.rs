//! Error taxonomy for the calibration merge pipeline.
//!
//! Three stages, three failure modes: sources that cannot be loaded
//! (`LoadError`), a configuration document without the expected region
//! collection (`SchemaError`), and an output target that cannot be written
//! (`WriteError`). Every failure is fatal to the run — the tool either
//! produces a fully merged output or none. Missing fields and regions are
//! policy no-ops handled inside the merger, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// A calibration CSV or configuration JSON source could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON configuration {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("calibration file {} contains no header row", .path.display())]
    MissingHeader { path: PathBuf },
}

/// The configuration document lacks the expected region collection.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("configuration has no '{key}' section")]
    MissingRegions { key: String },

    #[error("configuration section '{key}' is not an object of region entries")]
    RegionsNotAnObject { key: String },
}

/// The merged configuration could not be written to the output target.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
