use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to create dump file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write dump file {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to flush dump file {path}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
