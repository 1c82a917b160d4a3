//! Calibration table loading.
//!
//! The calibration CSV has one header row and one row per parameter:
//!
//! ```text
//! ,A-1,A-2,A-3
//! full_fill_percent,55,60,52
//! empty_fill_percent,5,8,
//! brightness_threshold,120.5,118,122
//! ```
//!
//! The first header cell is blank (or a row-label caption) and is ignored;
//! the remaining header cells are region identifiers. Each body row starts
//! with a parameter name followed by cells aligned positionally with the
//! header regions. Cells that are empty or non-numeric produce no entry for
//! that (parameter, region) pair — coverage is allowed to be sparse.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Number;
use tracing::debug;

use crate::error::LoadError;

// ============================================================================
// CSV Quote-Aware Splitting
// ============================================================================

/// Split a CSV line respecting quoted fields (commas inside quotes, `""`
/// escapes). Returns owned strings because quoted fields need unquoting.
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

// ============================================================================
// Cell Parsing
// ============================================================================

/// Parse a CSV cell as a JSON number, preserving the integral/fractional
/// distinction: `55` stays an integer, `55.5` becomes a float.
///
/// Empty, non-numeric, and non-finite cells yield `None` — JSON numbers
/// cannot represent NaN or infinity.
fn parse_cell(cell: &str) -> Option<Number> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Number::from_f64(f),
        _ => None,
    }
}

// ============================================================================
// Calibration Table
// ============================================================================

/// Parsed calibration data: parameter name → region identifier → value.
///
/// Built once from CSV and immutable afterwards. Duplicate region columns
/// and duplicate parameter rows resolve last-occurrence-wins, matching the
/// overwrite semantics of the map inserts that build the table.
#[derive(Debug, Clone)]
pub struct CalibrationTable {
    /// Region identifiers in header order, deduplicated.
    regions: Vec<String>,
    /// parameter → region → value
    values: HashMap<String, HashMap<String, Number>>,
}

impl CalibrationTable {
    /// Load a calibration table from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text, path)
    }

    /// Parse calibration CSV text. `source` names the origin in errors and
    /// diagnostics.
    pub fn parse(text: &str, source: &Path) -> Result<Self, LoadError> {
        let mut lines = text.lines();

        let header_line = lines.next().ok_or_else(|| LoadError::MissingHeader {
            path: source.to_path_buf(),
        })?;
        let header = csv_split(header_line);

        // Header cells from the second column onward are region identifiers.
        // Empty header cells (trailing commas) carry no region.
        let mut regions: Vec<String> = Vec::new();
        for cell in header.iter().skip(1) {
            let name = cell.trim();
            if !name.is_empty() && !regions.iter().any(|r| r == name) {
                regions.push(name.to_string());
            }
        }

        let mut values: HashMap<String, HashMap<String, Number>> = HashMap::new();
        for (line_num, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let cells = csv_split(line);
            let param = cells[0].trim();
            if param.is_empty() {
                debug!(
                    file = %source.display(),
                    line = line_num + 2,
                    "Skipping row with no parameter name"
                );
                continue;
            }

            let mut region_values: HashMap<String, Number> = HashMap::new();
            for (idx, cell) in cells.iter().enumerate().skip(1) {
                let Some(region) = header.get(idx).map(|h| h.trim()) else {
                    debug!(
                        file = %source.display(),
                        line = line_num + 2,
                        column = idx + 1,
                        "Skipping cell beyond header width"
                    );
                    continue;
                };
                if region.is_empty() {
                    continue;
                }
                if let Some(value) = parse_cell(cell) {
                    region_values.insert(region.to_string(), value);
                }
            }

            values.insert(param.to_string(), region_values);
        }

        debug!(
            file = %source.display(),
            regions = regions.len(),
            parameters = values.len(),
            "Parsed calibration table"
        );

        Ok(Self { regions, values })
    }

    /// Look up the calibration value for a (parameter, region) pair.
    pub fn value(&self, param: &str, region: &str) -> Option<&Number> {
        self.values.get(param)?.get(region)
    }

    /// Whether the region identifier appeared as a header column.
    pub fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    /// Whether the parameter appeared as a row.
    pub fn has_param(&self, param: &str) -> bool {
        self.values.contains_key(param)
    }

    /// Region identifiers in header order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Parameter names, in arbitrary order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
