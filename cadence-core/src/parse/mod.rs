//! Access log reading.
//!
//! Each line of a combined-format access log yields one request record:
//!
//! ```text
//! 203.0.113.9 - - [22/Jan/2019:06:38:40 +0330] "GET / HTTP/1.1" 200 512 "-" "Mozilla/5.0"
//! ^ address                ^ timestamp                                     ^ user agent (quote field 5)
//! ```
//!
//! Records are grouped into a [`ClientRequestLog`](crate::session::ClientRequestLog)
//! keyed by address and user agent. Any malformed line aborts the read.

mod error;
mod line;
mod reader;
mod timestamp;


pub use error::{LineError, LogReadError};
pub use line::{LogRecord, parse_line};
pub use reader::{LineLimit, LogRead, read_client_requests};
pub use timestamp::{TimestampMode, extract_timestamp, parse_timestamp};
