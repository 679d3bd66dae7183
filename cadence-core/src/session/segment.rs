use crate::session::types::{ClientRequestLog, ClientSessions, RequestTimestamp, Session};

/// Splits every client's request history into sessions of intervals.
///
/// Clients keep their first-seen order. A client with a single request is
/// still present, mapped to an empty session list.
pub fn segment_sessions(log: &ClientRequestLog, session_break: f64) -> ClientSessions {
    log.map_values(|_, timestamps| split_sessions(timestamps, session_break))
}

/// Segments one client's ordered timestamps.
pub fn split_sessions(timestamps: &[RequestTimestamp], session_break: f64) -> Vec<Session> {
    let mut sessions = Vec::new();
    let mut open = Vec::new();

    for pair in timestamps.windows(2) {
        let gap = pair[1].seconds() - pair[0].seconds();
        if gap < session_break {
            open.push(gap);
        } else {
            // A break records whatever accumulated so far, even nothing.
            sessions.push(Session::from(std::mem::take(&mut open)));
        }
    }

    if !open.is_empty() {
        sessions.push(Session::from(open));
    }

    sessions
}
