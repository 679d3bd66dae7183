use std::path::PathBuf;
use thiserror::Error;

/// Why a single log line could not be turned into a request record.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected a user agent in quote field 5, found {fields} quote-delimited fields")]
    MissingUserAgent { fields: usize },

    #[error("no bracketed timestamp found")]
    MissingTimestamp,

    #[error("invalid timestamp '{raw}'")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum LogReadError {
    #[error("failed to open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line} of {path}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed log line {line} in {path}")]
    Malformed {
        path: PathBuf,
        line: u64,
        #[source]
        source: LineError,
    },
}

impl LogReadError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Line number (1-based) the error was raised on, if any.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Open { .. } => None,
            Self::Read { line, .. } | Self::Malformed { line, .. } => Some(*line),
        }
    }
}
