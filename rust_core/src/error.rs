//! Error types for feature derivation and table I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("malformed clock string '{0}', expected mm:ss")]
    MalformedClock(String),

    #[error("possession team '{posteam}' matches neither home '{home}' nor away '{away}'")]
    UnknownPossessionTeam {
        posteam: String,
        home: String,
        away: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}
