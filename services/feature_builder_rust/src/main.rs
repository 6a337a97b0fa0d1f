//! Feature Builder Rust Service
//!
//! Batch derivation of model-ready spread-cover features from season
//! play-by-play tables.
//!
//! This service:
//! - Loads one or more season play-by-play CSV files
//! - Derives the cover-probability feature set for every play
//! - Drops incomplete rows and reports the drop count per file
//! - Writes the combined feature table and a JSON run report

mod config;
mod report;

use anyhow::{bail, Context, Result};
use config::BuilderConfig;
use coverline_core::{derive_season_tables, table, DeriverConfig, TrainingRow};
use dotenv::dotenv;
use log::info;
use report::{FileReport, RunReport};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting Feature Builder Rust Service...");

    let config = BuilderConfig::from_env();
    if config.input_paths.is_empty() {
        bail!("PBP_PATHS is empty; set it to a comma-separated list of play-by-play CSV files");
    }
    info!(
        "{} input file(s), variant={}, season filter={:?}",
        config.input_paths.len(),
        config.variant.as_str(),
        config.season
    );

    let mut tables = Vec::with_capacity(config.input_paths.len());
    for path in &config.input_paths {
        let plays = table::load_plays(path)?;
        info!("{}: {} plays loaded", path.display(), plays.len());
        tables.push(plays);
    }

    let deriver_config = DeriverConfig {
        variant: config.variant,
        season: config.season,
    };
    let outputs = derive_season_tables(&tables, &deriver_config);

    let mut file_reports = Vec::with_capacity(outputs.len());
    let mut all_rows: Vec<TrainingRow> = Vec::new();
    for ((path, plays), output) in config.input_paths.iter().zip(&tables).zip(outputs) {
        info!(
            "{}: {} rows kept, {} dropped for missing data",
            path.display(),
            output.rows.len(),
            output.dropped
        );
        file_reports.push(FileReport {
            path: path.display().to_string(),
            plays: plays.len(),
            rows_kept: output.rows.len(),
            rows_dropped: output.dropped,
        });
        all_rows.extend(output.rows);
    }

    let run_report = RunReport::new(config.variant.as_str(), config.season, file_reports);
    info!(
        "feature table ready: {} rows total, {} dropped",
        run_report.rows_kept, run_report.rows_dropped
    );

    if config.dry_run {
        info!("DRY_RUN set; skipping output write.");
        return Ok(());
    }

    table::save_training_rows(&config.output_path, &all_rows, config.variant)?;
    info!("feature table written to {}", config.output_path.display());

    if let Some(report_path) = &config.report_path {
        let json = serde_json::to_string_pretty(&run_report)?;
        std::fs::write(report_path, json)
            .with_context(|| format!("failed to write run report to {}", report_path.display()))?;
        info!("run report written to {}", report_path.display());
    }

    Ok(())
}
