//! Feature Pipeline Integration Tests
//!
//! Drives the full path: CSV play-by-play in, batch derivation, feature
//! table out. Uses in-memory tables, no files or network.

use coverline_core::table::{read_plays, write_training_rows};
use coverline_core::{derive_features, CoverResult, DeriverConfig, FeatureVariant};

const PBP_HEADER: &str = "play_id,game_id,season,week,home_team,away_team,posteam,posteam_type,defteam,home_score,away_score,score_differential,qtr,game_half,half_seconds_remaining,game_seconds_remaining,down,ydstogo,yardline_100,side_of_field,spread_line,total_line,result,play_type,posteam_timeouts_remaining,defteam_timeouts_remaining";

/// Two plays from a finished KC @ JAX game (KC -3, KC wins by 10) plus
/// one unusable row with no possession side.
fn sample_pbp() -> String {
    let rows = [
        // KC receives the opening kickoff
        "1,2022_01_KC_JAX,2022,1,JAX,KC,KC,away,JAX,0,0,0,1,Half1,1800,3600,1,10,75,KC,-3,44.5,-10,kickoff,3,3",
        // JAX first-half drive: JAX will receive the second-half kickoff
        "2,2022_01_KC_JAX,2022,1,JAX,KC,JAX,home,KC,0,7,-7,2,Half1,600,2400,2,4,33,JAX,-3,44.5,-10,pass,3,2",
        // Clock-stoppage row with no possession side recorded
        "3,2022_01_KC_JAX,2022,1,JAX,KC,,,,7,7,,2,Half1,0,1800,,,,,-3,44.5,-10,no_play,,",
    ];
    format!("{}\n{}\n", PBP_HEADER, rows.join("\n"))
}

#[test]
fn test_csv_to_feature_table() {
    let plays = read_plays(sample_pbp().as_bytes()).expect("sample table should parse");
    assert_eq!(plays.len(), 3);

    let output = derive_features(&plays, &DeriverConfig::default());

    // The sideless row is dropped and counted, nothing else
    assert_eq!(output.rows.len(), 2);
    assert_eq!(output.dropped, 1);

    // KC (-3, wins by 10) covers: label follows whoever has the ball
    assert_eq!(output.rows[0].cover_result, CoverResult::PosteamCovers);
    assert_eq!(output.rows[1].cover_result, CoverResult::DefteamCovers);
    for row in &output.rows {
        assert_eq!(row.game_id, "2022_01_KC_JAX");
    }

    // KC took the opening kickoff, so only the JAX drive flags 2H receipt
    assert_eq!(output.rows[0].features.receive_2h_ko, 0.0);
    assert_eq!(output.rows[1].features.receive_2h_ko, 1.0);

    let mut buffer = Vec::new();
    write_training_rows(&mut buffer, &output.rows, FeatureVariant::Binary)
        .expect("in-memory write cannot fail");
    let written = String::from_utf8(buffer).unwrap();

    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("play_id,game_id,season,cover_result,spread_time,"));
    assert!(header.ends_with(",spread_line_differential"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_pipeline_is_deterministic() {
    let plays = read_plays(sample_pbp().as_bytes()).unwrap();

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let derived = derive_features(&plays, &DeriverConfig::default());
        let mut buffer = Vec::new();
        write_training_rows(&mut buffer, &derived.rows, FeatureVariant::Multiclass).unwrap();
        outputs.push(buffer);
    }
    assert_eq!(
        outputs[0], outputs[1],
        "repeated runs on the same input must produce byte-identical tables"
    );
}

#[test]
fn test_empty_table_round_trip() {
    let plays = read_plays(format!("{}\n", PBP_HEADER).as_bytes()).unwrap();
    assert!(plays.is_empty());

    let output = derive_features(&plays, &DeriverConfig::default());
    assert!(output.rows.is_empty());
    assert_eq!(output.dropped, 0);
}

#[test]
fn test_cover_label_from_csv_row() {
    // JAX (home) possession, spread -3, result -10: margin 3 - 10 < 0
    let plays = read_plays(sample_pbp().as_bytes()).unwrap();
    let output = derive_features(&plays, &DeriverConfig::default());

    let jax_row = &output.rows[1];
    assert_eq!(jax_row.features.posteam_is_home, 1.0);
    // spread_line_differential: -(-3) + (-7) = -4
    assert_eq!(jax_row.features.spread_line_differential, -4.0);
}
