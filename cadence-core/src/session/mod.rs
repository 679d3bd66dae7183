//! Session segmentation.
//!
//! A client's requests are walked pairwise in file order. Gaps below the
//! session-break threshold accumulate into the open session; a gap at or
//! above it closes the open session (empty or not) and starts a new one.
//! The trailing session is only kept when it holds at least one interval.
//!
//! ```text
//! timestamps  [10, 16, 20, 2020, 2025]
//! gaps        [ 6,  4, 2000,   5]
//! sessions    [[6, 4], [5]]
//! ```

mod constants;
mod segment;
mod types;

#[cfg(test)]
mod tests;

pub use constants::SESSION_BREAK_SECS;
pub use segment::*;
pub use types::*;
