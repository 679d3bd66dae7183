//! The `cadence` analysis run.
//!
//! ```text
//! access.log
//! read_client_requests   -> ClientRequestLog
//! segment_sessions       -> ClientSessions     -> log_clients_diff_{n}k.json
//! session_means          -> ClientMeans        -> log_clients_mean_{n}k.json
//! session_deviations     -> ClientDeviations   -> log_clients_deviation_{n}k.json
//! render_summary
//! ```

mod args;
mod error;
mod render;
mod run;
mod summary;


pub use args::AnalyzeArgs;
pub use error::AnalysisError;
pub use render::render_summary;
pub use run::{AnalysisOutput, analyze, run_analysis};
pub use summary::AnalysisSummary;
