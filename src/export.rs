//! Writing the specification artifacts to disk.
//!
//! Every artifact is first written to a temporary file next to its target
//! and only renamed over the target once fully written, so a failed run
//! never leaves a truncated output behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{EmitError, Result};
use crate::models::FeatureRow;

/// A fully written artifact waiting to be moved onto its target path.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
    bytes: u64,
}

impl StagedFile {
    fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|e| EmitError::file_write(target, e))?;
        Ok(Self {
            temp,
            target: target.to_path_buf(),
            bytes: 0,
        })
    }

    /// Path the artifact will occupy once committed.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Size of the staged content in bytes.
    pub fn len(&self) -> u64 {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Move the staged file over its target, replacing any existing file.
    pub fn commit(self) -> Result<PathBuf> {
        let Self {
            temp,
            target,
            bytes,
        } = self;

        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(Permissions::from_mode(0o644))
                .map_err(|e| EmitError::file_write(&target, e))?;
        }

        temp.persist(&target)
            .map_err(|e| EmitError::file_write(&target, e.error))?;
        tracing::info!(path = %target.display(), bytes, "wrote file");
        Ok(target)
    }
}

/// Write `rows` as CSV into a staged file for `path`.
pub fn stage_table(rows: &[FeatureRow], path: &Path) -> Result<StagedFile> {
    let mut staged = StagedFile::create(path)?;
    {
        let mut writer = csv::Writer::from_writer(staged.temp.as_file_mut());
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| EmitError::file_write(path, e))?;
        }
        writer.flush().map_err(|e| EmitError::file_write(path, e))?;
    }
    staged.bytes = file_len(&staged)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "staged table");
    Ok(staged)
}

/// Write `document` verbatim into a staged file for `path`.
pub fn stage_text(document: &str, path: &Path) -> Result<StagedFile> {
    let mut staged = StagedFile::create(path)?;
    staged
        .temp
        .write_all(document.as_bytes())
        .and_then(|()| staged.temp.flush())
        .map_err(|e| EmitError::file_write(path, e))?;
    staged.bytes = document.len() as u64;
    tracing::debug!(path = %path.display(), bytes = staged.bytes, "staged text");
    Ok(staged)
}

fn file_len(staged: &StagedFile) -> Result<u64> {
    staged
        .temp
        .as_file()
        .metadata()
        .map(|m| m.len())
        .map_err(|e| EmitError::file_write(&staged.target, e))
}

/// Serialize `rows` as CSV to `path`, overwriting any existing file.
///
/// The header line carries the column names; fields are quoted only when
/// they contain a comma, a quote or a line break.
pub fn export_table(rows: &[FeatureRow], path: &Path) -> Result<()> {
    stage_table(rows, path)?.commit()?;
    Ok(())
}

/// Write `document` to `path` as-is, overwriting any existing file.
pub fn write_text(document: &str, path: &Path) -> Result<()> {
    stage_text(document, path)?.commit()?;
    Ok(())
}

/// Parse a table previously written by [`export_table`].
pub fn read_table(path: &Path) -> Result<Vec<FeatureRow>> {
    let table_read = |source| EmitError::TableRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(table_read)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<FeatureRow>, _>>()
        .map_err(table_read)
}
