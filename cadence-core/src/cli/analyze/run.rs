use crate::cli::analyze::error::AnalysisError;
use crate::cli::analyze::summary::AnalysisSummary;
use crate::conf::AnalysisConfig;
use crate::dump::{DumpKind, write_dump};
use crate::parse::read_client_requests;
use crate::session::{ClientSessions, segment_sessions};
use crate::stats::{ClientDeviations, ClientMeans, session_deviations, session_means};

/// The three parallel views of one segmentation.
#[derive(Debug)]
pub struct AnalysisOutput {
    pub lines_parsed: u64,
    pub sessions: ClientSessions,
    pub means: ClientMeans,
    pub deviations: ClientDeviations,
}

/// Reads the log and computes sessions, means and deviations without
/// touching the dump directory.
pub fn analyze(cfg: &AnalysisConfig) -> Result<AnalysisOutput, AnalysisError> {
    cfg.validate()?;

    let read = read_client_requests(&cfg.log_path, cfg.limit, cfg.timestamp_mode)?;
    tracing::info!(
        log = %cfg.log_path.display(),
        lines = read.lines_parsed,
        clients = read.requests.len(),
        "parsed access log"
    );

    let sessions = segment_sessions(&read.requests, cfg.session_break);
    let means = session_means(&sessions);
    let deviations = session_deviations(&sessions, &means)?;

    Ok(AnalysisOutput {
        lines_parsed: read.lines_parsed,
        sessions,
        means,
        deviations,
    })
}

/// Full run: analyze, then write the diff, mean and deviation dumps in that
/// order.
pub fn run_analysis(cfg: &AnalysisConfig) -> Result<AnalysisSummary, AnalysisError> {
    let output = analyze(cfg)?;

    let files = vec![
        write_dump(&cfg.dump_dir, DumpKind::Diff, cfg.limit, &output.sessions)?,
        write_dump(&cfg.dump_dir, DumpKind::Mean, cfg.limit, &output.means)?,
        write_dump(&cfg.dump_dir, DumpKind::Deviation, cfg.limit, &output.deviations)?,
    ];

    let summary = summarize(&output, files);
    if summary.empty_sessions > 0 {
        tracing::warn!(
            empty_sessions = summary.empty_sessions,
            "some sessions have no intervals; their means are null"
        );
    }
    tracing::info!(
        clients = summary.clients,
        sessions = summary.sessions,
        dump_dir = %cfg.dump_dir.display(),
        "wrote session dumps"
    );

    Ok(summary)
}

fn summarize(output: &AnalysisOutput, files: Vec<std::path::PathBuf>) -> AnalysisSummary {
    let sessions = output.sessions.values().map(Vec::len).sum();
    let empty_sessions = output
        .sessions
        .values()
        .flatten()
        .filter(|s| s.is_empty())
        .count();

    AnalysisSummary {
        lines_parsed: output.lines_parsed,
        clients: output.sessions.len(),
        sessions,
        empty_sessions,
        files,
    }
}
