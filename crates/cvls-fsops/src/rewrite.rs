//! Read-convert-write for a single file.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::convert::{convert, scan};
use crate::error::{FsOpsError, FsOpsResult};

/// What [`rewrite_file`] did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Content changed and was written back.
    Converted,
    /// Content was already canonical; nothing was written.
    Unchanged,
}

/// Normalise the line terminators of `path` in place.
///
/// The file is read fully, converted, and written fully. A crash during the write
/// can leave the file truncated.
///
/// # Errors
///
/// Returns [`FsOpsError::MissingFile`] if the file is gone when its turn comes,
/// or [`FsOpsError::Io`] if it cannot be read or written.
pub fn rewrite_file(path: &Path) -> FsOpsResult<RewriteOutcome> {
    if !path.exists() {
        return Err(FsOpsError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let original = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FsOpsError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => FsOpsError::io("rewrite.read", path, source),
    })?;

    let Cow::Owned(converted) = convert(&original) else {
        debug!(path = %path.display(), "already canonical");
        return Ok(RewriteOutcome::Unchanged);
    };

    fs::write(path, &converted).map_err(|source| FsOpsError::io("rewrite.write", path, source))?;

    let stats = scan(&original);
    debug!(
        path = %path.display(),
        crlf = stats.crlf,
        bare_cr = stats.cr,
        bare_lf = stats.lf,
        "converted file"
    );
    Ok(RewriteOutcome::Converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use cvls_test_support::fixtures::{read_file, temp_dir, write_file};

    #[test]
    fn rewrites_bare_carriage_returns_in_place() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let path = write_file(temp.path(), "mixed.txt", b"a\r\nb\rc\nd")?;

        assert_eq!(rewrite_file(&path)?, RewriteOutcome::Converted);
        assert_eq!(read_file(&path)?, b"a\r\nb\r\nc\nd");
        Ok(())
    }

    #[test]
    fn canonical_file_reports_unchanged() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let path = write_file(temp.path(), "clean.txt", b"a\r\nb\nc")?;

        assert_eq!(rewrite_file(&path)?, RewriteOutcome::Unchanged);
        assert_eq!(read_file(&path)?, b"a\r\nb\nc");
        Ok(())
    }

    #[test]
    fn second_rewrite_is_a_no_op() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let path = write_file(temp.path(), "twice.txt", b"\r\r\n\r")?;

        assert_eq!(rewrite_file(&path)?, RewriteOutcome::Converted);
        let first = read_file(&path)?;
        assert_eq!(rewrite_file(&path)?, RewriteOutcome::Unchanged);
        assert_eq!(read_file(&path)?, first);
        Ok(())
    }

    #[test]
    fn missing_file_is_a_domain_error() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let path = temp.path().join("gone.txt");

        let err = rewrite_file(&path).unwrap_err();
        assert!(matches!(err, FsOpsError::MissingFile { .. }));
        assert!(err.is_domain());
        Ok(())
    }
}
