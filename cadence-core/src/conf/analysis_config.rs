use crate::conf::error::ConfigError;
use crate::parse::{LineLimit, TimestampMode};
use crate::session::SESSION_BREAK_SECS;
use serde::Serialize;
use std::path::PathBuf;

/// Resolved settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    pub log_path: PathBuf,
    pub limit: LineLimit,
    pub dump_dir: PathBuf,
    pub session_break: f64,
    pub timestamp_mode: TimestampMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./access.log"),
            limit: LineLimit::default(),
            dump_dir: PathBuf::from("dumps"),
            session_break: SESSION_BREAK_SECS,
            timestamp_mode: TimestampMode::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLogPath);
        }

        if !self.session_break.is_finite() || self.session_break <= 0.0 {
            return Err(ConfigError::InvalidSessionBreak {
                value: self.session_break,
            });
        }

        Ok(())
    }
}
