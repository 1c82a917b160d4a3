//! Human-readable run report.

use std::fmt::Write as _;

use crate::merge::ChangeRecord;

/// Render the change list as terminal output, one line per updated value
/// plus a trailing summary line.
pub fn render_changes(changes: &[ChangeRecord]) -> String {
    let mut out = String::new();
    for c in changes {
        let _ = writeln!(
            out,
            "Updated {}.{}: {} -> {}",
            c.region, c.field, c.old, c.new
        );
    }
    if changes.is_empty() {
        out.push_str("No calibration values changed\n");
    } else {
        let _ = writeln!(out, "{} value(s) updated", changes.len());
    }
    out
}
