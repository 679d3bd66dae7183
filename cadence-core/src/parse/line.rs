use crate::parse::error::LineError;
use crate::parse::timestamp::{TimestampMode, extract_timestamp};
use crate::session::{ClientIdentity, RequestTimestamp};

const USER_AGENT_FIELD: usize = 5;

/// One request pulled out of a log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub client: ClientIdentity,
    pub timestamp: RequestTimestamp,
}

/// Parses one raw log line. `line` may still carry its `\n` terminator; the
/// address rule below counts it.
pub fn parse_line(line: &str, mode: TimestampMode) -> Result<LogRecord, LineError> {
    let address = extract_address(line);
    let user_agent = extract_user_agent(line)?;
    let timestamp = extract_timestamp(line, mode)?;

    Ok(LogRecord {
        client: ClientIdentity::new(address, user_agent),
        timestamp,
    })
}

/// Everything before the character that precedes the first `-`.
///
/// For `1.2.3.4 - - [...]` the preceding character is the separating space.
/// Without such a character the cut counts back from the end of the line:
/// a leading `-` drops the last character, a missing `-` drops the last two.
fn extract_address(line: &str) -> &str {
    let end = match line.find('-') {
        Some(0) => start_of_nth_last_char(line, 1),
        Some(dash) => start_of_nth_last_char(&line[..dash], 1),
        None => start_of_nth_last_char(line, 2),
    };
    &line[..end]
}

/// Byte offset where the `n`-th character from the end begins, or 0 when the
/// string is shorter than `n` characters.
fn start_of_nth_last_char(s: &str, n: usize) -> usize {
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(i, _)| i)
}

fn extract_user_agent(line: &str) -> Result<&str, LineError> {
    let mut fields = line.split('"');
    fields.nth(USER_AGENT_FIELD).ok_or_else(|| LineError::MissingUserAgent {
        fields: line.split('"').count(),
    })
}
