//! JSON dump files.
//!
//! Each pipeline stage is written to its own file inside the dump directory,
//! named after the stage and the requested line limit in thousands:
//!
//! - `log_clients_diff_{n}k.json`
//! - `log_clients_mean_{n}k.json`
//! - `log_clients_deviation_{n}k.json`

mod error;
mod naming;
mod writer;

#[cfg(test)]
mod tests;

pub use error::DumpError;
pub use naming::{DumpKind, dump_file_name, dump_path};
pub use writer::{to_pretty_json, write_dump};
