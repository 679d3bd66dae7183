use crate::parse::LineLimit;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Diff,
    Mean,
    Deviation,
}

impl DumpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DumpKind::Diff => "diff",
            DumpKind::Mean => "mean",
            DumpKind::Deviation => "deviation",
        }
    }
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `log_clients_{kind}_{limit / 1000}k.json`. An unlimited run is named `_0k`.
pub fn dump_file_name(kind: DumpKind, limit: LineLimit) -> String {
    format!("log_clients_{}_{}k.json", kind, limit.thousands())
}

pub fn dump_path(dir: &Path, kind: DumpKind, limit: LineLimit) -> PathBuf {
    dir.join(dump_file_name(kind, limit))
}
