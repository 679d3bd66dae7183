mod fixtures;
pub mod tracing;

pub use fixtures::{Workspace, fixture_path, read_dump};
pub use tracing::{CapturedEvent, capture_events};
