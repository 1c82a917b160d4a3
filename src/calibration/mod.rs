//! Calibration Table Module
//!
//! Loads the per-region calibration CSV into an in-memory
//! [`CalibrationTable`] (parameter name → region identifier → value) and
//! validates the user's requested field selection against it.
//!
//! ## Usage
//!
//! ```ignore
//! let table = CalibrationTable::load("calibration.csv")?;
//! for w in validate_field_selection(&table, &fields) {
//!     tracing::warn!("{w}");
//! }
//! ```

mod table;
pub mod validation;

pub use table::CalibrationTable;
pub use validation::{validate_field_selection, ValidationWarning};
