// Shared models for Coverline Rust services
use serde::{Deserialize, Serialize};

// ============================================================================
// Possession, Half & Play-Type Enums
// ============================================================================

/// Which side of the matchup a team is on.
///
/// Every sign in the feature formulas is keyed off this; an unknown side
/// stays `None` on the record and propagates as missing rather than
/// defaulting to either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }

    /// Numeric `posteam_is_home` encoding used in the feature vector.
    pub fn is_home_flag(&self) -> f64 {
        match self {
            TeamSide::Home => 1.0,
            TeamSide::Away => 0.0,
        }
    }
}

/// Game half marker from the source play-by-play data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameHalf {
    Half1,
    Half2,
    Overtime,
}

/// Play type, reduced to the categories the feature set cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    Kickoff,
    ExtraPoint,
    #[serde(other)]
    Other,
}

// ============================================================================
// Play Record (input row)
// ============================================================================

/// One American-football play, as read from a season play-by-play table.
///
/// Fields that the source can leave blank are `Option`s; the deriver
/// drops rows whose required values are still missing after all
/// computations (no imputation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    pub play_id: u32,
    pub game_id: String,
    pub season: u16,
    pub week: u8,
    pub home_team: String,
    pub away_team: String,
    pub posteam: Option<String>,
    pub posteam_type: Option<TeamSide>,
    pub defteam: Option<String>,
    pub home_score: u16,
    pub away_score: u16,
    /// Signed relative to the possession team.
    pub score_differential: Option<f64>,
    /// 1-4, 5 and up for overtime.
    pub qtr: u8,
    pub game_half: Option<GameHalf>,
    pub half_seconds_remaining: Option<f64>,
    pub game_seconds_remaining: Option<f64>,
    pub down: Option<u8>,
    pub ydstogo: Option<f64>,
    /// Distance to the opponent goal line, 0-100.
    pub yardline_100: Option<f64>,
    pub side_of_field: Option<String>,
    /// Point handicap, quoted relative to the away team.
    pub spread_line: Option<f64>,
    pub total_line: Option<f64>,
    /// Final home-minus-away margin; present only on historical rows.
    pub result: Option<f64>,
    pub play_type: Option<PlayType>,
    pub posteam_timeouts_remaining: Option<f64>,
    pub defteam_timeouts_remaining: Option<f64>,
}

// ============================================================================
// Cover Outcome (training label)
// ============================================================================

/// Three-way outcome of a play's game against the spread, from the
/// possession team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverResult {
    DefteamCovers,
    PosteamCovers,
    Push,
}

impl CoverResult {
    /// Numeric class label used in the training table.
    pub fn label(&self) -> u8 {
        match self {
            CoverResult::DefteamCovers => 0,
            CoverResult::PosteamCovers => 1,
            CoverResult::Push => 2,
        }
    }
}

// ============================================================================
// Feature Row (model input vector)
// ============================================================================

/// Model input columns shared by both classifier variants, in training
/// order.
pub const MODEL_COLUMNS: [&str; 14] = [
    "spread_time",
    "score_differential",
    "diff_time_ratio",
    "posteam_is_home",
    "half_seconds_remaining",
    "game_seconds_remaining",
    "down",
    "ydstogo",
    "yardline_100",
    "posteam_timeouts_remaining",
    "defteam_timeouts_remaining",
    "receive_2h_ko",
    "is_pat",
    "spread_line_differential",
];

/// The multiclass model appends the half-point-spread flag.
pub const MODEL_COLUMNS_MULTICLASS: [&str; 15] = [
    "spread_time",
    "score_differential",
    "diff_time_ratio",
    "posteam_is_home",
    "half_seconds_remaining",
    "game_seconds_remaining",
    "down",
    "ydstogo",
    "yardline_100",
    "posteam_timeouts_remaining",
    "defteam_timeouts_remaining",
    "receive_2h_ko",
    "is_pat",
    "spread_line_differential",
    "is_half_point_spread",
];

/// Which classifier's column set to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureVariant {
    Binary,
    Multiclass,
}

impl FeatureVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureVariant::Binary => "binary",
            FeatureVariant::Multiclass => "multiclass",
        }
    }

    /// Parse a lowercase variant code, e.g. from an environment variable.
    pub fn from_code(code: &str) -> Option<FeatureVariant> {
        match code {
            "binary" => Some(FeatureVariant::Binary),
            "multiclass" => Some(FeatureVariant::Multiclass),
            _ => None,
        }
    }

    /// Model column names in the exact order the classifier was trained on.
    pub fn model_columns(&self) -> &'static [&'static str] {
        match self {
            FeatureVariant::Binary => &MODEL_COLUMNS,
            FeatureVariant::Multiclass => &MODEL_COLUMNS_MULTICLASS,
        }
    }
}

/// One derived feature vector, one-to-one with a valid `PlayRecord`.
///
/// All values are f64 so the row can be handed to the classifier's
/// batch-prediction interface unchanged. `is_half_point_spread` is
/// always computed; the `Binary` variant simply omits it from the
/// serialized column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub spread_time: f64,
    pub score_differential: f64,
    pub diff_time_ratio: f64,
    pub posteam_is_home: f64,
    pub half_seconds_remaining: f64,
    pub game_seconds_remaining: f64,
    pub down: f64,
    pub ydstogo: f64,
    pub yardline_100: f64,
    pub posteam_timeouts_remaining: f64,
    pub defteam_timeouts_remaining: f64,
    pub receive_2h_ko: f64,
    pub is_pat: f64,
    pub spread_line_differential: f64,
    pub is_half_point_spread: f64,
}

impl FeatureRow {
    /// The bare feature values in `variant.model_columns()` order.
    pub fn model_vector(&self, variant: FeatureVariant) -> Vec<f64> {
        let mut values = vec![
            self.spread_time,
            self.score_differential,
            self.diff_time_ratio,
            self.posteam_is_home,
            self.half_seconds_remaining,
            self.game_seconds_remaining,
            self.down,
            self.ydstogo,
            self.yardline_100,
            self.posteam_timeouts_remaining,
            self.defteam_timeouts_remaining,
            self.receive_2h_ko,
            self.is_pat,
            self.spread_line_differential,
        ];
        if let FeatureVariant::Multiclass = variant {
            values.push(self.is_half_point_spread);
        }
        values
    }
}

// ============================================================================
// Training Row (batch output)
// ============================================================================

/// A feature vector plus the keys and label the training pipeline needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    pub play_id: u32,
    pub game_id: String,
    pub season: u16,
    pub cover_result: CoverResult,
    pub features: FeatureRow,
}
