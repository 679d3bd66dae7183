use crate::session::{ClientMap, ClientSessions};

/// Mean interval per session; `None` for a session without intervals.
pub type ClientMeans = ClientMap<Vec<Option<f64>>>;

pub fn session_means(sessions: &ClientSessions) -> ClientMeans {
    sessions.map_values(|_, list| list.iter().map(|s| mean(&s.intervals)).collect())
}

pub fn mean(intervals: &[f64]) -> Option<f64> {
    if intervals.is_empty() {
        return None;
    }
    Some(intervals.iter().sum::<f64>() / intervals.len() as f64)
}
