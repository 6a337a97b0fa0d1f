//! Single-play inference mode.
//!
//! Derives one feature vector from a hand-entered live game state, the
//! way a bettor would describe it: team codes, scores, quarter and a
//! `mm:ss` clock. Kickoff-receipt bookkeeping cannot be recomputed from
//! a single play, so the caller supplies it directly. Any missing or
//! malformed input fails the whole derivation; a partial feature set is
//! never returned.

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;
use crate::features;
use crate::models::{FeatureRow, TeamSide};

/// Live game state for one play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySnapshot {
    pub away_team: String,
    pub home_team: String,
    pub away_score: u16,
    pub home_score: u16,
    pub away_timeouts_remaining: u8,
    pub home_timeouts_remaining: u8,
    /// Spread line, quoted relative to the away team.
    pub away_spread: f64,
    /// Team code of the side currently on offense.
    pub posteam: String,
    /// 1-4, 5 and up for overtime.
    pub qtr: u8,
    /// Time remaining in the current quarter, `mm:ss`.
    pub clock: String,
    pub down: u8,
    pub ydstogo: u16,
    pub yardline_100: u8,
    /// Whether the possession team receives the second-half kickoff.
    pub receive_2h_ko: bool,
    pub is_pat: bool,
}

/// Parse a `mm:ss` clock into seconds remaining in the quarter.
pub fn clock_to_seconds(clock: &str) -> Result<u32, FeatureError> {
    let parts = clock.split_once(':').and_then(|(minutes, seconds)| {
        Some((
            minutes.trim().parse::<u32>().ok()?,
            seconds.trim().parse::<u32>().ok()?,
        ))
    });
    match parts {
        Some((minutes, seconds)) if seconds < 60 => Ok(minutes * 60 + seconds),
        _ => Err(FeatureError::MalformedClock(clock.to_string())),
    }
}

/// Seconds left in regulation from the quarter number and clock.
///
/// Overtime quarters extrapolate below zero, mirroring the unclamped
/// elapsed-share behavior of the batch deriver.
pub fn game_seconds_remaining(qtr: u8, clock: &str) -> Result<f64, FeatureError> {
    let quarter_seconds = f64::from(clock_to_seconds(clock)?);
    Ok((4.0 - f64::from(qtr)) * 900.0 + quarter_seconds)
}

/// Derive the feature vector for a single live play.
///
/// No cover label is produced: the game is still in progress.
pub fn derive_single(snapshot: &PlaySnapshot) -> Result<FeatureRow, FeatureError> {
    let side = if snapshot.posteam == snapshot.home_team {
        TeamSide::Home
    } else if snapshot.posteam == snapshot.away_team {
        TeamSide::Away
    } else {
        return Err(FeatureError::UnknownPossessionTeam {
            posteam: snapshot.posteam.clone(),
            home: snapshot.home_team.clone(),
            away: snapshot.away_team.clone(),
        });
    };

    let (posteam_timeouts, defteam_timeouts) = match side {
        TeamSide::Home => (
            snapshot.home_timeouts_remaining,
            snapshot.away_timeouts_remaining,
        ),
        TeamSide::Away => (
            snapshot.away_timeouts_remaining,
            snapshot.home_timeouts_remaining,
        ),
    };

    let score_differential = match side {
        TeamSide::Home => f64::from(snapshot.home_score) - f64::from(snapshot.away_score),
        TeamSide::Away => f64::from(snapshot.away_score) - f64::from(snapshot.home_score),
    };

    let game_seconds_remaining = game_seconds_remaining(snapshot.qtr, &snapshot.clock)?;
    let half_seconds_remaining = if snapshot.qtr < 3 {
        game_seconds_remaining - 1800.0
    } else {
        game_seconds_remaining
    };

    let elapsed_share = features::elapsed_share(game_seconds_remaining);

    Ok(FeatureRow {
        spread_time: features::spread_time(side, snapshot.away_spread, elapsed_share),
        score_differential,
        diff_time_ratio: features::diff_time_ratio(score_differential, elapsed_share),
        posteam_is_home: side.is_home_flag(),
        half_seconds_remaining,
        game_seconds_remaining,
        down: f64::from(snapshot.down),
        ydstogo: f64::from(snapshot.ydstogo),
        yardline_100: f64::from(snapshot.yardline_100),
        posteam_timeouts_remaining: f64::from(posteam_timeouts),
        defteam_timeouts_remaining: f64::from(defteam_timeouts),
        receive_2h_ko: if snapshot.receive_2h_ko { 1.0 } else { 0.0 },
        is_pat: if snapshot.is_pat { 1.0 } else { 0.0 },
        spread_line_differential: features::spread_line_differential(
            side,
            snapshot.away_spread,
            score_differential,
        ),
        is_half_point_spread: if features::is_half_point_spread(snapshot.away_spread) {
            1.0
        } else {
            0.0
        },
    })
}
