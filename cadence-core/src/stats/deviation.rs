use crate::session::{ClientMap, ClientSessions};
use crate::stats::error::StatsError;
use crate::stats::mean::ClientMeans;
use serde::{Serialize, Serializer};

/// Spread of a session's intervals around its mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    /// Sample standard deviation over two or more intervals.
    Sample(f64),
    /// Fewer than two intervals. Reported as zero.
    Insufficient,
}

impl Deviation {
    pub fn value(self) -> f64 {
        match self {
            Deviation::Sample(v) => v,
            Deviation::Insufficient => 0.0,
        }
    }
}

impl Serialize for Deviation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deviation::Sample(v) => serializer.serialize_f64(*v),
            // Integer literal `0`, not `0.0`.
            Deviation::Insufficient => serializer.serialize_u8(0),
        }
    }
}

pub type ClientDeviations = ClientMap<Vec<Deviation>>;

/// Sample standard deviation per session, paired with the means computed for
/// the same sessions.
///
/// # Errors
///
/// Returns [`StatsError`] when `means` does not have the same clients and
/// session counts as `sessions`.
pub fn session_deviations(
    sessions: &ClientSessions,
    means: &ClientMeans,
) -> Result<ClientDeviations, StatsError> {
    let mut out = ClientDeviations::new();

    for (client, list) in sessions.iter() {
        let client_means = means
            .get(client)
            .ok_or_else(|| StatsError::MissingClient {
                client: client.clone(),
            })?;

        if client_means.len() != list.len() {
            return Err(StatsError::Misaligned {
                client: client.clone(),
                sessions: list.len(),
                means: client_means.len(),
            });
        }

        let deviations = list
            .iter()
            .zip(client_means)
            .map(|(session, mean)| sample_deviation(&session.intervals, *mean))
            .collect();

        out.insert(client.clone(), deviations);
    }

    Ok(out)
}

/// `sqrt(sum((x - mean)^2) / (n - 1))`, or [`Deviation::Insufficient`] when
/// `n - 1 <= 0`.
pub fn sample_deviation(intervals: &[f64], mean: Option<f64>) -> Deviation {
    let (n, Some(mean)) = (intervals.len(), mean) else {
        return Deviation::Insufficient;
    };
    if n < 2 {
        return Deviation::Insufficient;
    }

    let squared: f64 = intervals.iter().map(|x| (x - mean).powi(2)).sum();
    Deviation::Sample((squared / (n - 1) as f64).sqrt())
}
