//! Coverline Core - NFL spread-cover feature derivation.
//!
//! This crate provides:
//! - Point-in-time game-state features for a cover-probability
//!   classifier (time-decayed spread, score/time ratio, spread-line
//!   differential, kickoff-receipt bookkeeping)
//! - A batch deriver over historical play-by-play tables with a strict
//!   missing-data filter and drop-count reporting
//! - A single-play inference mode for hand-entered live game states
//! - Columnar (CSV) table input and model-ready output with a fixed,
//!   stable column order
//!
//! The crate computes features only; training and applying the
//! classifier happens downstream.

pub mod deriver;
pub mod error;
pub mod features;
pub mod models;
pub mod single;
pub mod table;

pub use deriver::{derive_features, derive_season_tables, DeriveOutput, DeriverConfig};
pub use error::FeatureError;
pub use models::{
    CoverResult, FeatureRow, FeatureVariant, GameHalf, PlayRecord, PlayType, TeamSide,
    TrainingRow, MODEL_COLUMNS, MODEL_COLUMNS_MULTICLASS,
};
pub use single::{derive_single, PlaySnapshot};
