use crate::session::ClientIdentity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no session means recorded for client '{client}'")]
    MissingClient { client: ClientIdentity },

    #[error("client '{client}' has {sessions} sessions but {means} means")]
    Misaligned {
        client: ClientIdentity,
        sessions: usize,
        means: usize,
    },
}
