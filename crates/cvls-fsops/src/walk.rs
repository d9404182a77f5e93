//! File/directory dispatch for a single input.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsOpsError, FsOpsResult};
use crate::report::BatchReport;
use crate::rewrite::rewrite_file;

/// Filesystem classification of a path, taken once per visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory, including special files and dangling links.
    File,
    /// A directory, following symlinks.
    Directory,
}

impl EntryKind {
    /// Classify `path`. Paths that cannot be inspected count as files so the
    /// rewriter reports them.
    #[must_use]
    pub fn classify(path: &Path) -> Self {
        if path.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// Walks an input, rewriting files and optionally descending into subdirectories.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker {
    recursive: bool,
}

impl TreeWalker {
    /// Walker that descends into subdirectories only when `recursive` is set.
    #[must_use]
    pub const fn new(recursive: bool) -> Self {
        Self { recursive }
    }

    /// Rewrite `path` if it is a file, or its children if it is a directory.
    ///
    /// Children are processed in enumeration order. Without recursion a
    /// subdirectory is skipped whole.
    ///
    /// # Errors
    ///
    /// Stops at the first failing file or unreadable directory.
    pub fn walk(&self, path: &Path, report: &mut BatchReport) -> FsOpsResult<()> {
        match EntryKind::classify(path) {
            EntryKind::File => rewrite_into(path, report),
            EntryKind::Directory => self.walk_directory(path, report),
        }
    }

    fn walk_directory(&self, dir: &Path, report: &mut BatchReport) -> FsOpsResult<()> {
        for child in read_children(dir)? {
            match EntryKind::classify(&child) {
                EntryKind::Directory if self.recursive => self.walk_directory(&child, report)?,
                EntryKind::Directory => {
                    debug!(path = %child.display(), "skipping subdirectory");
                    report.directories_skipped += 1;
                }
                EntryKind::File => rewrite_into(&child, report)?,
            }
        }
        Ok(())
    }
}

fn rewrite_into(path: &Path, report: &mut BatchReport) -> FsOpsResult<()> {
    report.record(rewrite_file(path)?);
    Ok(())
}

/// Snapshot a directory listing before any child is touched.
fn read_children(dir: &Path) -> FsOpsResult<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| FsOpsError::io("walk.read_dir", dir, source))? {
        let entry =
            entry.map_err(|source| FsOpsError::io("walk.read_dir_entry", dir, source))?;
        children.push(entry.path());
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use cvls_test_support::fixtures::{read_file, temp_dir, write_file};

    #[test]
    fn classify_distinguishes_directories() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let file = write_file(temp.path(), "a.txt", b"")?;
        assert_eq!(EntryKind::classify(temp.path()), EntryKind::Directory);
        assert_eq!(EntryKind::classify(&file), EntryKind::File);
        assert_eq!(
            EntryKind::classify(&temp.path().join("missing")),
            EntryKind::File
        );
        Ok(())
    }

    #[test]
    fn non_recursive_walk_skips_subdirectories() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let top = write_file(temp.path(), "top.txt", b"a\rb")?;
        let nested = write_file(temp.path(), "sub/nested.txt", b"c\rd")?;
        let deeper = write_file(temp.path(), "sub/deeper/leaf.txt", b"e\rf")?;

        let mut report = BatchReport::default();
        TreeWalker::new(false).walk(temp.path(), &mut report)?;

        assert_eq!(read_file(&top)?, b"a\r\nb");
        assert_eq!(read_file(&nested)?, b"c\rd");
        assert_eq!(read_file(&deeper)?, b"e\rf");
        assert_eq!(report.files_converted, 1);
        assert_eq!(report.directories_skipped, 1);
        Ok(())
    }

    #[test]
    fn recursive_walk_reaches_every_level() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let top = write_file(temp.path(), "top.txt", b"a\rb")?;
        let nested = write_file(temp.path(), "sub/nested.txt", b"c\r\nd")?;
        let deeper = write_file(temp.path(), "sub/deeper/leaf.txt", b"e\rf")?;

        let mut report = BatchReport::default();
        TreeWalker::new(true).walk(temp.path(), &mut report)?;

        assert_eq!(read_file(&top)?, b"a\r\nb");
        assert_eq!(read_file(&nested)?, b"c\r\nd");
        assert_eq!(read_file(&deeper)?, b"e\r\nf");
        assert_eq!(report.files_converted, 2);
        assert_eq!(report.files_unchanged, 1);
        assert_eq!(report.directories_skipped, 0);
        Ok(())
    }

    #[test]
    fn walking_a_file_rewrites_it_directly() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let file = write_file(temp.path(), "single.txt", b"x\ry\n")?;

        let mut report = BatchReport::default();
        TreeWalker::new(false).walk(&file, &mut report)?;

        assert_eq!(read_file(&file)?, b"x\r\ny\n");
        assert_eq!(report.files_visited(), 1);
        Ok(())
    }

    #[test]
    fn walking_a_missing_path_reports_missing_file() -> Result<()> {
        let temp = temp_dir("cvls-fsops-")?;
        let mut report = BatchReport::default();
        let err = TreeWalker::new(true)
            .walk(&temp.path().join("nope"), &mut report)
            .unwrap_err();
        assert!(matches!(err, FsOpsError::MissingFile { .. }));
        Ok(())
    }
}
