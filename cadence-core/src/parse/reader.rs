use crate::parse::error::LogReadError;
use crate::parse::line::parse_line;
use crate::parse::timestamp::TimestampMode;
use crate::session::ClientRequestLog;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Upper bound on the lines read from a log. Zero means unbounded.
///
/// Lines are numbered from 1 and reading stops at the line whose number
/// equals the limit, so a limit of `n` admits `n - 1` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineLimit(pub u64);

impl LineLimit {
    pub const UNLIMITED: LineLimit = LineLimit(0);

    pub fn admits(self, line_number: u64) -> bool {
        self.0 == 0 || line_number < self.0
    }

    /// Thousands component used in dump file names.
    pub fn thousands(self) -> u64 {
        self.0 / 1000
    }
}

impl Default for LineLimit {
    fn default() -> Self {
        LineLimit(100_000)
    }
}

/// Result of reading a log file.
#[derive(Debug)]
pub struct LogRead {
    pub requests: ClientRequestLog,
    pub lines_parsed: u64,
}

/// Reads `path` top to bottom and groups request timestamps by client.
///
/// # Errors
///
/// Fails on the first I/O error or malformed line; nothing read so far is
/// returned.
pub fn read_client_requests(
    path: &Path,
    limit: LineLimit,
    mode: TimestampMode,
) -> Result<LogRead, LogReadError> {
    let file = File::open(path).map_err(|e| LogReadError::open(path, e))?;
    let mut reader = BufReader::new(file);

    let mut requests = ClientRequestLog::new();
    let mut lines_parsed = 0;
    let mut line = String::new();
    let mut line_number = 0;

    loop {
        line.clear();
        line_number += 1;
        let read = reader
            .read_line(&mut line)
            .map_err(|source| LogReadError::Read {
                path: path.to_path_buf(),
                line: line_number,
                source,
            })?;
        if read == 0 || !limit.admits(line_number) {
            break;
        }
        normalize_terminator(&mut line);

        let record = parse_line(&line, mode).map_err(|source| LogReadError::Malformed {
            path: path.to_path_buf(),
            line: line_number,
            source,
        })?;

        requests
            .entry_or_default(record.client)
            .push(record.timestamp);
        lines_parsed += 1;
    }

    tracing::debug!(
        path = %path.display(),
        lines = lines_parsed,
        clients = requests.len(),
        "read access log"
    );

    Ok(LogRead {
        requests,
        lines_parsed,
    })
}

/// Folds a `\r\n` terminator into `\n`. The terminator itself is kept.
fn normalize_terminator(line: &mut String) {
    if line.ends_with("\r\n") {
        line.truncate(line.len() - 2);
        line.push('\n');
    }
}
