//! calmerge - Region Calibration Updater
//!
//! Applies per-region calibration values from a CSV table to a machine
//! JSON configuration, producing an updated configuration file.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: config.json + calibration.csv -> output.json
//! calmerge
//!
//! # Explicit paths, pretty-printed output
//! calmerge --config machine.json --calibration lab.csv --output machine.out.json --pretty
//!
//! # Restrict the update to one field
//! calmerge --calibration-fields full_fill_percent
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use calmerge::{
    apply_calibration, render_changes, validate_field_selection, CalibrationTable,
    ConfigDocument, MergeOptions,
};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Key of the region collection in the configuration document root.
const REGIONS_KEY: &str = "regions";

#[derive(Parser, Debug)]
#[command(name = "calmerge")]
#[command(about = "Update a machine configuration with new calibration values")]
#[command(version)]
struct CliArgs {
    /// Path to the existing configuration JSON file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Path to the calibration CSV file
    #[arg(long, default_value = "calibration.csv")]
    calibration: PathBuf,

    /// Path for the updated configuration file
    #[arg(long, short, default_value = "output.json")]
    output: PathBuf,

    /// Calibration fields to update
    #[arg(
        long,
        num_args = 1..,
        default_values_t = [
            "full_fill_percent".to_string(),
            "empty_fill_percent".to_string(),
            "brightness_threshold".to_string(),
        ]
    )]
    calibration_fields: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let table = CalibrationTable::load(&args.calibration)
        .context("loading calibration table")?;
    info!(
        path = %args.calibration.display(),
        regions = table.regions().len(),
        "Calibration table loaded"
    );

    for warning in validate_field_selection(&table, &args.calibration_fields) {
        warn!("{warning}");
    }

    let mut doc = ConfigDocument::load(&args.config).context("loading configuration")?;

    let opts = MergeOptions {
        fields: args.calibration_fields.clone(),
        regions_key: REGIONS_KEY.to_string(),
    };
    let changes =
        apply_calibration(&mut doc, &table, &opts).context("merging calibration values")?;

    print!("{}", render_changes(&changes));

    doc.save(&args.output, args.pretty)
        .context("writing updated configuration")?;
    info!(path = %args.output.display(), changes = changes.len(), "Updated configuration written");

    Ok(())
}
