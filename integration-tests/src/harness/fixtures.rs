use cadence_core::conf::AnalysisConfig;
use cadence_core::parse::{LineLimit, TimestampMode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Scratch directory holding an (initially empty) `dumps/` directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("dumps")).expect("failed to create dumps dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn dump_dir(&self) -> PathBuf {
        self.dir.path().join("dumps")
    }

    /// Config reading `fixture` with no line limit and offset-aware timestamps.
    pub fn config(&self, fixture: &str) -> AnalysisConfig {
        AnalysisConfig {
            log_path: fixture_path(fixture),
            limit: LineLimit::UNLIMITED,
            dump_dir: self.dump_dir(),
            timestamp_mode: TimestampMode::Offset,
            ..AnalysisConfig::default()
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_dump(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read dump {}: {e}", path.display()));
    serde_json::from_str(&raw).expect("dump is not valid JSON")
}
