use crate::session::{ClientIdentity, ClientSessions, Session};
use crate::stats::*;
use pretty_assertions::assert_eq;

fn sessions_for(client: &ClientIdentity, lists: &[&[f64]]) -> ClientSessions {
    let mut sessions = ClientSessions::new();
    sessions.insert(
        client.clone(),
        lists.iter().map(|l| Session::from(l.to_vec())).collect(),
    );
    sessions
}

#[test]
fn sample_deviation_uses_bessel_correction() {
    let result = sample_deviation(&[6.0, 4.0, 5.0], Some(5.0));
    assert_eq!(result, Deviation::Sample(1.0));
}

#[test]
fn equal_intervals_have_zero_sample_deviation() {
    let result = sample_deviation(&[10.0, 10.0], Some(10.0));
    assert_eq!(result, Deviation::Sample(0.0));
}

#[test]
fn single_interval_falls_back_to_zero() {
    let result = sample_deviation(&[6.0], Some(6.0));
    assert_eq!(result, Deviation::Insufficient);
    assert_eq!(result.value(), 0.0);
}

#[test]
fn empty_session_falls_back_to_zero() {
    assert_eq!(sample_deviation(&[], None), Deviation::Insufficient);
}

#[test]
fn fallback_serializes_as_integer_zero() {
    // Arrange
    let values = vec![Deviation::Insufficient, Deviation::Sample(1.5)];

    // Act
    let json = serde_json::to_string(&values).unwrap();

    // Assert
    assert_eq!(json, "[0,1.5]");
}

#[test]
fn session_deviations_parallel_sessions() {
    // Arrange
    let client = ClientIdentity::new("1.2.3.4", "ua");
    let sessions = sessions_for(&client, &[&[6.0, 4.0, 5.0], &[], &[7.0]]);
    let means = session_means(&sessions);

    // Act
    let deviations = session_deviations(&sessions, &means).unwrap();

    // Assert
    assert_eq!(
        deviations.get(&client),
        Some(&vec![
            Deviation::Sample(1.0),
            Deviation::Insufficient,
            Deviation::Insufficient,
        ])
    );
}

#[test]
fn mismatched_session_counts_are_rejected() {
    // Arrange
    let client = ClientIdentity::new("1.2.3.4", "ua");
    let sessions = sessions_for(&client, &[&[1.0, 2.0], &[3.0, 4.0]]);
    let means = session_means(&sessions_for(&client, &[&[1.0, 2.0]]));

    // Act
    let err = session_deviations(&sessions, &means).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        StatsError::Misaligned {
            sessions: 2,
            means: 1,
            ..
        }
    ));
}

#[test]
fn missing_client_is_rejected() {
    // Arrange
    let sessions = sessions_for(&ClientIdentity::new("1.2.3.4", "ua"), &[&[1.0]]);
    let means = ClientMeans::new();

    // Act
    let err = session_deviations(&sessions, &means).unwrap_err();

    // Assert
    assert!(matches!(err, StatsError::MissingClient { .. }));
}
