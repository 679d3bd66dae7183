use crate::dump::error::DumpError;
use crate::dump::naming::{DumpKind, dump_path};
use crate::parse::LineLimit;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Writes `value` to its dump file in `dir`, replacing any previous file.
///
/// `dir` must already exist.
pub fn write_dump<T: Serialize>(
    dir: &Path,
    kind: DumpKind,
    limit: LineLimit,
    value: &T,
) -> Result<PathBuf, DumpError> {
    let path = dump_path(dir, kind, limit);

    let file = File::create(&path).map_err(|source| DumpError::Create {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_pretty(&mut writer, value).map_err(|source| DumpError::Serialize {
        path: path.clone(),
        source,
    })?;

    writer.flush().map_err(|source| DumpError::Flush {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(kind = %kind, path = %path.display(), "wrote dump");
    Ok(path)
}

/// Pretty JSON with a four-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, value)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_pretty<W: Write, T: Serialize>(writer: W, value: &T) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}
