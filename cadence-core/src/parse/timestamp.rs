use crate::parse::error::LineError;
use crate::session::RequestTimestamp;
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// e.g. `[22/Jan/2019:06:38:40 +0330]`
static TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+/\w+/\d+:\d+:\d+:\d+ [+-]?\d+)]").expect("valid regex"));

const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// How a parsed log timestamp becomes epoch seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Drop the logged offset and read the wall clock in the local time zone.
    #[default]
    Local,
    /// Honor the logged offset.
    Offset,
}

/// Finds the first bracketed timestamp in `line` and converts it.
pub fn extract_timestamp(line: &str, mode: TimestampMode) -> Result<RequestTimestamp, LineError> {
    let raw = TIMESTAMP
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or(LineError::MissingTimestamp)?
        .as_str();

    let parsed = parse_timestamp(raw)?;

    let seconds = match mode {
        TimestampMode::Local => local_epoch(parsed.naive_local()),
        TimestampMode::Offset => parsed.timestamp(),
    };

    Ok(RequestTimestamp(seconds as f64))
}

/// Parses the inside of the brackets, e.g. `22/Jan/2019:06:38:40 +0330`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, LineError> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|source| {
        LineError::InvalidTimestamp {
            raw: raw.to_string(),
            source,
        }
    })
}

/// Epoch seconds of a wall-clock time read in the local zone.
///
/// A time repeated by a DST fold resolves to its earlier instant. A time
/// skipped by a DST gap is shifted using the zone's offset at that moment.
fn local_epoch(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            let offset = Local.offset_from_utc_datetime(&naive).fix();
            (naive - offset).and_utc().timestamp()
        }
    }
}
