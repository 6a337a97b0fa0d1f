//! Spread-cover feature formulas for live NFL game states.
//!
//! This module provides the point-in-time signals fed to the cover
//! probability classifier. The calculations are based on:
//! - Spread line re-signed to the possession team
//! - Time remaining (exponential decay of the spread signal)
//! - Score differential relative to the possession team
//! - Final margin against the spread (historical training label)

use crate::models::{CoverResult, TeamSide};

/// Regulation game length in seconds (4 x 15 minute quarters).
pub const REGULATION_SECONDS: f64 = 3600.0;

/// Decay constant for the time-weighted spread and score signals.
///
/// Fixed hyperparameter carried over from the nflfastR win-probability
/// model, not fitted to data.
pub const SPREAD_TIME_DECAY: f64 = 4.0;

/// Fraction of regulation elapsed: 0 at kickoff, 1 at the final whistle.
///
/// Not clamped. Overtime states extrapolate above 1, which flips the
/// sign behavior of the decay features downstream.
#[inline]
pub fn elapsed_share(game_seconds_remaining: f64) -> f64 {
    (REGULATION_SECONDS - game_seconds_remaining) / REGULATION_SECONDS
}

/// e^(-4x) decay applied to the spread and score signals.
#[inline]
pub fn time_decay(elapsed_share: f64) -> f64 {
    (-SPREAD_TIME_DECAY * elapsed_share).exp()
}

/// Re-sign the away-quoted spread line relative to the possession team.
#[inline]
pub fn posteam_spread(side: TeamSide, spread_line: f64) -> f64 {
    match side {
        TeamSide::Home => spread_line,
        TeamSide::Away => -spread_line,
    }
}

/// Time-decayed spread signal: full pregame weight at kickoff, near
/// zero at the end of regulation.
#[inline]
pub fn spread_time(side: TeamSide, spread_line: f64, elapsed_share: f64) -> f64 {
    posteam_spread(side, spread_line) * time_decay(elapsed_share)
}

/// Score differential scaled by the inverse decay, so late-game leads
/// weigh more than identical early-game leads.
#[inline]
pub fn diff_time_ratio(score_differential: f64, elapsed_share: f64) -> f64 {
    score_differential / time_decay(elapsed_share)
}

/// How close the possession team currently is to covering the spread.
#[inline]
pub fn spread_line_differential(
    side: TeamSide,
    spread_line: f64,
    score_differential: f64,
) -> f64 {
    match side {
        TeamSide::Home => -spread_line + score_differential,
        TeamSide::Away => spread_line + score_differential,
    }
}

/// Possession-relative final margin against the spread.
#[inline]
pub fn cover_margin(side: TeamSide, spread_line: f64, result: f64) -> f64 {
    match side {
        TeamSide::Home => -spread_line + result,
        TeamSide::Away => spread_line - result,
    }
}

/// Three-way cover outcome for a finished game.
///
/// The push class fires on an exact zero margin only; half-point
/// spreads never produce it.
pub fn cover_result(side: TeamSide, spread_line: f64, result: f64) -> CoverResult {
    let margin = cover_margin(side, spread_line, result);
    if margin > 0.0 {
        CoverResult::PosteamCovers
    } else if margin < 0.0 {
        CoverResult::DefteamCovers
    } else {
        CoverResult::Push
    }
}

/// Whether the spread carries a half point (no push is possible).
#[inline]
pub fn is_half_point_spread(spread_line: f64) -> bool {
    spread_line.fract() != 0.0
}
