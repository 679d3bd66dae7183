//! Per-session timing statistics.
//!
//! Both calculators return maps parallel to the [`ClientSessions`] they were
//! given: same clients, same order, one value per session.
//!
//! [`ClientSessions`]: crate::session::ClientSessions

mod deviation;
mod error;
mod mean;

#[cfg(test)]
mod tests;

pub use deviation::*;
pub use error::StatsError;
pub use mean::*;
