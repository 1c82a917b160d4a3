//! Config Merger
//!
//! Walks the configuration's region entries and overwrites the selected
//! calibration fields with values from the [`CalibrationTable`], emitting a
//! [`ChangeRecord`] for every value that actually changed.
//!
//! The merge is deliberately permissive about coverage — it varies by
//! region and config version:
//! - a config region with no matching CSV column is left entirely alone
//! - a CSV column with no matching config region is ignored
//! - a selected field absent from a region entry is skipped for that entry
//! - a (field, region) pair with no CSV cell leaves the config value alone
//!
//! None of those are errors. The only failure is a document without the
//! region collection at all.

use serde_json::{Number, Value};
use tracing::debug;

use crate::calibration::CalibrationTable;
use crate::document::ConfigDocument;
use crate::error::SchemaError;

// ============================================================================
// Options & Records
// ============================================================================

/// Merge parameters, supplied in full by the caller. The library embeds no
/// default field list or collection key — those belong to the CLI layer.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Calibration field names to update, in order.
    pub fields: Vec<String>,
    /// Key of the region collection in the document root.
    pub regions_key: String,
}

/// One successfully applied update, kept only for the run report.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    pub region: String,
    pub field: String,
    pub old: Value,
    pub new: Number,
}

// ============================================================================
// Merge
// ============================================================================

/// Apply calibration values to the document in place.
///
/// Returns the list of changes in region-entry order. A value is only
/// overwritten when it differs numerically from the table value, so merging
/// the same table twice produces an empty change list the second time.
pub fn apply_calibration(
    doc: &mut ConfigDocument,
    table: &CalibrationTable,
    opts: &MergeOptions,
) -> Result<Vec<ChangeRecord>, SchemaError> {
    let regions = doc.regions_mut(&opts.regions_key)?;
    let mut changes = Vec::new();

    for (region_name, entry) in regions.iter_mut() {
        if !table.has_region(region_name) {
            debug!(region = %region_name, "No calibration column for region, leaving untouched");
            continue;
        }
        let Some(entry_fields) = entry.as_object_mut() else {
            debug!(region = %region_name, "Region entry is not an object, leaving untouched");
            continue;
        };

        for field in &opts.fields {
            if !table.has_param(field) {
                continue;
            }
            let Some(slot) = entry_fields.get_mut(field) else {
                debug!(region = %region_name, field = %field, "Field not present in region entry");
                continue;
            };
            // Region column exists but this row has no cell for it
            let Some(new) = table.value(field, region_name) else {
                continue;
            };
            if value_equals_number(slot, new) {
                continue;
            }
            let old = std::mem::replace(slot, Value::Number(new.clone()));
            changes.push(ChangeRecord {
                region: region_name.clone(),
                field: field.clone(),
                old,
                new: new.clone(),
            });
        }
    }

    Ok(changes)
}

/// Numeric equality between the current config value and a table value.
///
/// `50` and `50.0` compare equal, so an already-correct value keeps its
/// existing representation and produces no change record. A non-numeric
/// config value never compares equal and gets overwritten.
fn value_equals_number(current: &Value, new: &Number) -> bool {
    match (current.as_f64(), new.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
