//! Batch feature derivation over historical play-by-play tables.
//!
//! Two passes per table: a per-game scan recording which side received
//! the opening kickoff, then a single row pass computing every derived
//! feature. Rows still missing a required value after derivation are
//! dropped, never imputed, and the drop count is returned to the caller.

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::features;
use crate::models::{
    FeatureRow, FeatureVariant, GameHalf, PlayRecord, PlayType, TeamSide, TrainingRow,
};

/// Parameters for a batch derivation run.
#[derive(Debug, Clone)]
pub struct DeriverConfig {
    /// Which classifier's column set downstream consumers will write.
    pub variant: FeatureVariant,
    /// Restrict the input to a single season before deriving.
    pub season: Option<u16>,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            variant: FeatureVariant::Binary,
            season: None,
        }
    }
}

/// Result of a batch derivation: the surviving rows plus the count of
/// rows dropped for missing data.
#[derive(Debug, Clone, Default)]
pub struct DeriveOutput {
    pub rows: Vec<TrainingRow>,
    pub dropped: usize,
}

/// Possession side at the first kickoff of each game.
///
/// The table is expected in play order within each game (as the source
/// exports it); the first kickoff row encountered per game wins. A
/// kickoff row with no recorded possession side still claims the slot,
/// so the receiver stays unknown for that game.
fn first_kickoff_receivers(plays: &[PlayRecord]) -> FxHashMap<&str, Option<TeamSide>> {
    let mut receivers: FxHashMap<&str, Option<TeamSide>> = FxHashMap::default();
    for play in plays {
        if play.play_type == Some(PlayType::Kickoff) {
            receivers
                .entry(play.game_id.as_str())
                .or_insert(play.posteam_type);
        }
    }
    receivers
}

/// Derive the model feature table from a play-by-play table.
///
/// Returns surviving rows in input order plus the number dropped for
/// missing data. Rows excluded by the season filter are neither kept
/// nor counted as dropped. An empty input yields an empty output.
pub fn derive_features(plays: &[PlayRecord], config: &DeriverConfig) -> DeriveOutput {
    let receivers = first_kickoff_receivers(plays);

    let mut out = DeriveOutput::default();
    for play in plays {
        if let Some(season) = config.season {
            if play.season != season {
                continue;
            }
        }
        match derive_row(play, &receivers) {
            Some(row) => out.rows.push(row),
            None => out.dropped += 1,
        }
    }

    debug!(
        "derived {} feature rows ({} dropped for missing data)",
        out.rows.len(),
        out.dropped
    );
    out
}

/// Derive several independent season tables in parallel.
pub fn derive_season_tables(
    tables: &[Vec<PlayRecord>],
    config: &DeriverConfig,
) -> Vec<DeriveOutput> {
    tables
        .par_iter()
        .map(|plays| derive_features(plays, config))
        .collect()
}

fn derive_row(
    play: &PlayRecord,
    receivers: &FxHashMap<&str, Option<TeamSide>>,
) -> Option<TrainingRow> {
    let side = play.posteam_type?;
    let spread_line = play.spread_line?;
    let score_differential = play.score_differential?;
    let game_seconds_remaining = play.game_seconds_remaining?;
    let result = play.result?;

    let elapsed_share = features::elapsed_share(game_seconds_remaining);

    // Receiving the second-half kickoff: in the first half, the side
    // that did NOT take the opening kickoff.
    let received_first_ko = receivers.get(play.game_id.as_str()).copied().flatten();
    let receive_2h_ko =
        play.game_half == Some(GameHalf::Half1) && Some(side) != received_first_ko;

    let cover_result = features::cover_result(side, spread_line, result);

    let feature_row = FeatureRow {
        spread_time: features::spread_time(side, spread_line, elapsed_share),
        score_differential,
        diff_time_ratio: features::diff_time_ratio(score_differential, elapsed_share),
        posteam_is_home: side.is_home_flag(),
        half_seconds_remaining: play.half_seconds_remaining?,
        game_seconds_remaining,
        down: f64::from(play.down?),
        ydstogo: play.ydstogo?,
        yardline_100: play.yardline_100?,
        posteam_timeouts_remaining: play.posteam_timeouts_remaining?,
        defteam_timeouts_remaining: play.defteam_timeouts_remaining?,
        receive_2h_ko: if receive_2h_ko { 1.0 } else { 0.0 },
        is_pat: if play.play_type == Some(PlayType::ExtraPoint) {
            1.0
        } else {
            0.0
        },
        spread_line_differential: features::spread_line_differential(
            side,
            spread_line,
            score_differential,
        ),
        is_half_point_spread: if features::is_half_point_spread(spread_line) {
            1.0
        } else {
            0.0
        },
    };

    Some(TrainingRow {
        play_id: play.play_id,
        game_id: play.game_id.clone(),
        season: play.season,
        cover_result,
        features: feature_row,
    })
}
