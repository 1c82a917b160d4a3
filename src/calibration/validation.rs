//! Field-selection validation with "did you mean?" suggestions.
//!
//! A selected calibration field that is not a parameter row in the loaded
//! table is almost always a typo on the command line. That is never fatal —
//! the merger simply finds nothing to update — but a warning with the
//! closest matching row name saves a silent no-op run.

use crate::calibration::CalibrationTable;

/// A non-fatal warning about the requested field selection.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

/// Warn for every selected field that is not a parameter row in the table.
pub fn validate_field_selection(
    table: &CalibrationTable,
    fields: &[String],
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    for field in fields {
        if !table.has_param(field) {
            let suggestion = suggest_correction(field, table.params());
            warnings.push(ValidationWarning {
                field: field.clone(),
                message: format!("Calibration field '{field}' is not a row in the table"),
                suggestion,
            });
        }
    }
    warnings
}

/// Suggest the closest parameter row for an unknown field, if within edit
/// distance 3.
pub fn suggest_correction<'a>(
    unknown: &str,
    known: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for k in known {
        let dist = levenshtein(unknown, k);
        if dist <= 3 {
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((k, dist)),
            }
        }
    }
    best.map(|(k, _)| k.to_string())
}

/// Iterative two-row Levenshtein distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn table() -> CalibrationTable {
        CalibrationTable::parse(
            ",A-1\nfull_fill_percent,55\nempty_fill_percent,5\nbrightness_threshold,120\n",
            Path::new("test.csv"),
        )
        .unwrap()
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("full_fil_percent", "full_fill_percent"), 1);
    }

    #[test]
    fn test_typo_gets_suggestion() {
        let warnings =
            validate_field_selection(&table(), &["full_fil_percent".to_string()]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("full_fill_percent")
        );
    }

    #[test]
    fn test_garbage_gets_no_suggestion() {
        let warnings = validate_field_selection(&table(), &["zzzzzzzz".to_string()]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].suggestion.is_none());
    }

    #[test]
    fn test_known_fields_produce_no_warnings() {
        let fields = vec![
            "full_fill_percent".to_string(),
            "brightness_threshold".to_string(),
        ];
        assert!(validate_field_selection(&table(), &fields).is_empty());
    }
}
