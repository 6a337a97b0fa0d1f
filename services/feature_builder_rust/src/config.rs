//! Configuration and environment loading for the feature builder.
//!
//! This module manages all runtime configuration:
//! - Input play-by-play tables and the output feature table
//! - Season filtering and classifier variant selection
//! - Dry-run behavior

use std::env;
use std::path::PathBuf;

use coverline_core::FeatureVariant;
use log::warn;

/// Default output path for the combined feature table
pub const DEFAULT_OUTPUT_PATH: &str = "data/features.csv";

/// Default classifier variant when FEATURE_VARIANT is unset
pub const DEFAULT_VARIANT: FeatureVariant = FeatureVariant::Binary;

/// Configuration for one feature-building run
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// One play-by-play CSV per season, in processing order
    pub input_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
    /// Optional destination for the JSON run report
    pub report_path: Option<PathBuf>,
    pub season: Option<u16>,
    pub variant: FeatureVariant,
    pub dry_run: bool,
}

impl BuilderConfig {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        let input_paths = env::var("PBP_PATHS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();

        let output_path = env::var("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let report_path = env::var("REPORT_PATH").ok().map(PathBuf::from);

        let season = env::var("SEASON").ok().and_then(|v| v.parse::<u16>().ok());

        let variant = match env::var("FEATURE_VARIANT") {
            Ok(code) => FeatureVariant::from_code(code.trim()).unwrap_or_else(|| {
                warn!(
                    "unknown FEATURE_VARIANT '{}', using {}",
                    code,
                    DEFAULT_VARIANT.as_str()
                );
                DEFAULT_VARIANT
            }),
            Err(_) => DEFAULT_VARIANT,
        };

        let dry_run = env::var("DRY_RUN")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        Self {
            input_paths,
            output_path,
            report_path,
            season,
            variant,
            dry_run,
        }
    }
}
