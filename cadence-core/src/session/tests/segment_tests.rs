use crate::session::*;
use pretty_assertions::assert_eq;

fn ts(values: &[f64]) -> Vec<RequestTimestamp> {
    values.iter().copied().map(RequestTimestamp).collect()
}

fn sessions(values: &[&[f64]]) -> Vec<Session> {
    values.iter().map(|s| Session::from(s.to_vec())).collect()
}

#[test]
fn short_gaps_form_a_single_session() {
    // Arrange
    let timestamps = ts(&[10.0, 16.0, 20.0, 25.0]);

    // Act
    let result = split_sessions(&timestamps, SESSION_BREAK_SECS);

    // Assert
    assert_eq!(result, sessions(&[&[6.0, 4.0, 5.0]]));
}

#[test]
fn single_request_yields_no_sessions() {
    let result = split_sessions(&ts(&[1000.0]), SESSION_BREAK_SECS);
    assert!(result.is_empty());
}

#[test]
fn no_requests_yields_no_sessions() {
    let result = split_sessions(&[], SESSION_BREAK_SECS);
    assert!(result.is_empty());
}

#[test]
fn long_gap_splits_sessions() {
    // Arrange
    let timestamps = ts(&[10.0, 16.0, 20.0, 2020.0, 2025.0]);

    // Act
    let result = split_sessions(&timestamps, SESSION_BREAK_SECS);

    // Assert
    assert_eq!(result, sessions(&[&[6.0, 4.0], &[5.0]]));
}

#[test]
fn gap_equal_to_threshold_is_a_break() {
    // Arrange
    let timestamps = ts(&[0.0, 10.0, 1810.0, 1820.0]);

    // Act
    let result = split_sessions(&timestamps, SESSION_BREAK_SECS);

    // Assert
    assert_eq!(result, sessions(&[&[10.0], &[10.0]]));
}

#[test]
fn gap_just_below_threshold_continues_session() {
    let result = split_sessions(&ts(&[0.0, 1799.0]), SESSION_BREAK_SECS);
    assert_eq!(result, sessions(&[&[1799.0]]));
}

#[test]
fn consecutive_breaks_record_empty_sessions() {
    // Arrange
    let timestamps = ts(&[0.0, 5.0, 3000.0, 6000.0, 6010.0]);

    // Act
    let result = split_sessions(&timestamps, SESSION_BREAK_SECS);

    // Assert
    assert_eq!(result, sessions(&[&[5.0], &[], &[10.0]]));
}

#[test]
fn leading_break_records_empty_session() {
    let result = split_sessions(&ts(&[0.0, 2000.0]), SESSION_BREAK_SECS);
    assert_eq!(result, sessions(&[&[]]));
}

#[test]
fn trailing_empty_buffer_is_dropped() {
    let result = split_sessions(&ts(&[0.0, 10.0, 5000.0]), SESSION_BREAK_SECS);
    assert_eq!(result, sessions(&[&[10.0]]));
}

#[test]
fn custom_threshold_is_respected() {
    let result = split_sessions(&ts(&[0.0, 30.0, 100.0, 110.0]), 60.0);
    assert_eq!(result, sessions(&[&[30.0], &[10.0]]));
}

#[test]
fn segment_sessions_keeps_client_order_and_singletons() {
    // Arrange
    let mut log = ClientRequestLog::new();
    let b = ClientIdentity::new("10.0.0.2", "curl/8.0");
    let a = ClientIdentity::new("10.0.0.1", "Mozilla/5.0");
    log.entry_or_default(b.clone()).extend(ts(&[0.0, 10.0, 20.0]));
    log.entry_or_default(a.clone()).push(RequestTimestamp(100.0));

    // Act
    let result = segment_sessions(&log, SESSION_BREAK_SECS);

    // Assert
    let clients: Vec<_> = result.clients().cloned().collect();
    assert_eq!(clients, vec![b.clone(), a.clone()]);
    assert_eq!(result.get(&b), Some(&sessions(&[&[10.0, 10.0]])));
    assert_eq!(result.get(&a), Some(&Vec::new()));
}
