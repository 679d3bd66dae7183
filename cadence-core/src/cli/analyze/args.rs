use crate::conf::AnalysisConfig;
use crate::parse::{LineLimit, TimestampMode};
use crate::session::SESSION_BREAK_SECS;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Access log to analyze
    #[arg(long = "log", value_name = "PATH", default_value = "./access.log")]
    pub log_path: PathBuf,

    /// Parse at most this many lines (the line numbered LIMIT is the first
    /// one skipped); 0 reads the whole file
    #[arg(long, default_value_t = 100_000)]
    pub limit: u64,

    /// Existing directory that receives the JSON dumps
    #[arg(long, value_name = "DIR", default_value = "dumps")]
    pub dump_dir: PathBuf,

    /// Gap in seconds at which a new session starts
    #[arg(long, value_name = "SECS", default_value_t = SESSION_BREAK_SECS)]
    pub session_break: f64,

    /// How logged timestamps are converted to epoch seconds
    #[arg(long = "timestamps", value_enum, default_value_t = TimestampMode::Local)]
    pub timestamp_mode: TimestampMode,
}

impl From<AnalyzeArgs> for AnalysisConfig {
    fn from(args: AnalyzeArgs) -> Self {
        Self {
            log_path: args.log_path,
            limit: LineLimit(args.limit),
            dump_dir: args.dump_dir,
            session_break: args.session_break,
            timestamp_mode: args.timestamp_mode,
        }
    }
}
