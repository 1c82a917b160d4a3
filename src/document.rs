//! Configuration document I/O.
//!
//! The machine configuration is held as a raw [`serde_json::Value`] tree so
//! that everything outside the targeted calibration fields passes through
//! the run structurally unchanged. The document is loaded whole, mutated in
//! place by the merger, and serialized at the end — serialization happens
//! into a string before anything touches the filesystem, so a failed run
//! never leaves a partially written output file.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LoadError, SchemaError, WriteError};

/// An in-memory machine configuration document.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Load and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let root: Value = serde_json::from_str(&text).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "Loaded configuration document");
        Ok(Self { root })
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The region collection: an object mapping region identifiers to region
    /// entries, located at `key` in the document root.
    pub fn regions_mut(&mut self, key: &str) -> Result<&mut Map<String, Value>, SchemaError> {
        let section = self
            .root
            .get_mut(key)
            .ok_or_else(|| SchemaError::MissingRegions {
                key: key.to_string(),
            })?;
        section
            .as_object_mut()
            .ok_or_else(|| SchemaError::RegionsNotAnObject {
                key: key.to_string(),
            })
    }

    /// Serialize the document, compact or 2-space indented.
    pub fn to_json(&self, pretty: bool) -> Result<String, WriteError> {
        let text = if pretty {
            serde_json::to_string_pretty(&self.root)?
        } else {
            serde_json::to_string(&self.root)?
        };
        Ok(text)
    }

    /// Write the document to `path`.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), WriteError> {
        let path = path.as_ref();
        let text = self.to_json(pretty)?;
        fs::write(path, text).map_err(|e| WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), pretty, "Configuration written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regions_mut_missing_section() {
        let mut doc = ConfigDocument::from_value(json!({"components": []}));
        let err = doc.regions_mut("regions").unwrap_err();
        assert!(matches!(err, SchemaError::MissingRegions { .. }));
    }

    #[test]
    fn test_regions_mut_wrong_shape() {
        let mut doc = ConfigDocument::from_value(json!({"regions": [1, 2]}));
        let err = doc.regions_mut("regions").unwrap_err();
        assert!(matches!(err, SchemaError::RegionsNotAnObject { .. }));
    }

    #[test]
    fn test_to_json_modes() {
        let doc = ConfigDocument::from_value(json!({"regions": {"A-1": {"x": 1}}}));
        let compact = doc.to_json(false).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = doc.to_json(true).unwrap();
        assert!(pretty.contains("\n  "));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = ConfigDocument::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }
}
