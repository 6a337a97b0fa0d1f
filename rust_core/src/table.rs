//! Columnar table I/O: play-by-play input, model-ready output.
//!
//! Readers and writers are generic over `io::Read`/`io::Write` so tests
//! can use in-memory tables; the path-taking wrappers attach the
//! offending path to any error.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::FeatureError;
use crate::models::{FeatureVariant, PlayRecord, TrainingRow};

/// Key and label columns preceding the model columns in the output table.
const OUTPUT_KEY_COLUMNS: [&str; 4] = ["play_id", "game_id", "season", "cover_result"];

/// Deserialize a whole play-by-play table. Empty fields are missing
/// values, not errors; the deriver decides what to drop.
pub fn read_plays<R: Read>(reader: R) -> Result<Vec<PlayRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(reader);
    reader.deserialize().collect()
}

/// Read one season's play-by-play CSV wholesale into memory.
pub fn load_plays(path: &Path) -> Result<Vec<PlayRecord>, FeatureError> {
    let file = File::open(path).map_err(|source| FeatureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_plays(file).map_err(|source| FeatureError::Csv {
        path: path.display().to_string(),
        source,
    })
}

/// Write the feature table with the fixed column order for `variant`:
/// the key/label columns followed by `variant.model_columns()`.
pub fn write_training_rows<W: Write>(
    writer: W,
    rows: &[TrainingRow],
    variant: FeatureVariant,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = OUTPUT_KEY_COLUMNS.to_vec();
    header.extend_from_slice(variant.model_columns());
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.play_id.to_string(),
            row.game_id.clone(),
            row.season.to_string(),
            row.cover_result.label().to_string(),
        ];
        record.extend(
            row.features
                .model_vector(variant)
                .iter()
                .map(|value| value.to_string()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the feature table to a file.
pub fn save_training_rows(
    path: &Path,
    rows: &[TrainingRow],
    variant: FeatureVariant,
) -> Result<(), FeatureError> {
    let file = File::create(path).map_err(|source| FeatureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_training_rows(file, rows, variant).map_err(|source| FeatureError::Csv {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverResult, FeatureRow, GameHalf, PlayType, TeamSide};

    const PBP_HEADER: &str = "play_id,game_id,season,week,home_team,away_team,posteam,posteam_type,defteam,home_score,away_score,score_differential,qtr,game_half,half_seconds_remaining,game_seconds_remaining,down,ydstogo,yardline_100,side_of_field,spread_line,total_line,result,play_type,posteam_timeouts_remaining,defteam_timeouts_remaining";

    fn make_training_row(play_id: u32) -> TrainingRow {
        TrainingRow {
            play_id,
            game_id: "2022_01_KC_JAX".to_string(),
            season: 2022,
            cover_result: CoverResult::PosteamCovers,
            features: FeatureRow {
                spread_time: 3.0,
                score_differential: 0.0,
                diff_time_ratio: 0.0,
                posteam_is_home: 0.0,
                half_seconds_remaining: 1800.0,
                game_seconds_remaining: 3600.0,
                down: 1.0,
                ydstogo: 10.0,
                yardline_100: 75.0,
                posteam_timeouts_remaining: 3.0,
                defteam_timeouts_remaining: 3.0,
                receive_2h_ko: 0.0,
                is_pat: 0.0,
                spread_line_differential: -3.0,
                is_half_point_spread: 0.0,
            },
        }
    }

    #[test]
    fn test_read_plays_parses_typed_fields() {
        let csv = format!(
            "{}\n{}",
            PBP_HEADER,
            "56,2022_01_KC_JAX,2022,1,JAX,KC,KC,away,JAX,0,0,0,1,Half1,1800,3600,1,10,75,KC,-3,44.5,-10,kickoff,3,3"
        );
        let plays = read_plays(csv.as_bytes()).unwrap();
        assert_eq!(plays.len(), 1);
        let play = &plays[0];
        assert_eq!(play.play_id, 56);
        assert_eq!(play.posteam_type, Some(TeamSide::Away));
        assert_eq!(play.game_half, Some(GameHalf::Half1));
        assert_eq!(play.play_type, Some(PlayType::Kickoff));
        assert_eq!(play.spread_line, Some(-3.0));
        assert_eq!(play.result, Some(-10.0));
    }

    #[test]
    fn test_read_plays_blank_fields_become_missing() {
        // Timeout rows in the source leave possession fields blank
        let csv = format!(
            "{}\n{}",
            PBP_HEADER,
            "57,2022_01_KC_JAX,2022,1,JAX,KC,,,,0,0,,1,Half1,1800,3600,,,,,-3,44.5,-10,no_play,,"
        );
        let plays = read_plays(csv.as_bytes()).unwrap();
        let play = &plays[0];
        assert_eq!(play.posteam_type, None);
        assert_eq!(play.score_differential, None);
        assert_eq!(play.down, None);
        assert_eq!(play.play_type, Some(PlayType::Other));
    }

    #[test]
    fn test_output_header_binary() {
        let mut buffer = Vec::new();
        write_training_rows(&mut buffer, &[], FeatureVariant::Binary).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(
            written.trim_end(),
            "play_id,game_id,season,cover_result,spread_time,score_differential,\
             diff_time_ratio,posteam_is_home,half_seconds_remaining,game_seconds_remaining,\
             down,ydstogo,yardline_100,posteam_timeouts_remaining,defteam_timeouts_remaining,\
             receive_2h_ko,is_pat,spread_line_differential"
        );
    }

    #[test]
    fn test_output_header_multiclass_appends_flag() {
        let mut buffer = Vec::new();
        write_training_rows(&mut buffer, &[], FeatureVariant::Multiclass).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.trim_end().ends_with(",is_half_point_spread"));
    }

    #[test]
    fn test_output_is_stable_across_runs() {
        let rows = vec![make_training_row(1), make_training_row(2)];

        let mut first = Vec::new();
        write_training_rows(&mut first, &rows, FeatureVariant::Multiclass).unwrap();
        let mut second = Vec::new();
        write_training_rows(&mut second, &rows, FeatureVariant::Multiclass).unwrap();

        assert_eq!(first, second, "same input must serialize identically");
    }

    #[test]
    fn test_output_row_values() {
        let mut buffer = Vec::new();
        write_training_rows(&mut buffer, &[make_training_row(56)], FeatureVariant::Binary)
            .unwrap();
        let written = String::from_utf8(buffer).unwrap();
        let row = written.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "56,2022_01_KC_JAX,2022,1,3,0,0,0,1800,3600,1,10,75,3,3,0,0,-3"
        );
    }
}
