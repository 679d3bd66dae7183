use crate::conf::ConfigError;
use crate::dump::DumpError;
use crate::parse::LogReadError;
use crate::stats::StatsError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Read(#[from] LogReadError),

    #[error("failed to compute session statistics")]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Dump(#[from] DumpError),
}
