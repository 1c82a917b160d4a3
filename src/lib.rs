//! calmerge: region calibration merge for machine JSON configurations
//!
//! Replaces the manual copy-paste editing of per-region calibration
//! constants. A calibration CSV (rows = parameter names, columns = region
//! identifiers) is merged into the `regions` collection of a machine
//! configuration JSON document; only the targeted numeric fields change,
//! everything else passes through structurally untouched.
//!
//! ## Pipeline
//!
//! - **[`calibration`]**: parses the CSV into a [`CalibrationTable`]
//! - **[`merge`]**: walks the document's region entries and overwrites the
//!   selected fields, producing [`ChangeRecord`]s
//! - **[`document`]**: JSON load/serialize, compact or pretty
//! - **[`report`]**: renders the change list for the terminal

pub mod calibration;
pub mod document;
pub mod error;
pub mod merge;
pub mod report;

// Re-export the pipeline surface
pub use calibration::{validate_field_selection, CalibrationTable, ValidationWarning};
pub use document::ConfigDocument;
pub use error::{LoadError, SchemaError, WriteError};
pub use merge::{apply_calibration, ChangeRecord, MergeOptions};
pub use report::render_changes;
