use std::path::PathBuf;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub lines_parsed: u64,
    pub clients: usize,
    pub sessions: usize,
    pub empty_sessions: usize,
    pub files: Vec<PathBuf>,
}
