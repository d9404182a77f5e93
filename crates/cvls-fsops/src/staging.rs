//! Run-scoped staging root holding one pre-mutation snapshot per input.
//!
//! # Design
//! - The root is an owned handle: created fresh at run start, removed on drop.
//! - Slots are keyed by the input's position in the argument list, not by content.
//! - A slot directory is created non-recursively so a leftover slot is a collision.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{FsOpsError, FsOpsResult};

/// File name used for a single-file snapshot whose input path has no final component.
const FALLBACK_SNAPSHOT_NAME: &str = "input";

/// Exclusive handle over the staging directory for one run.
#[derive(Debug)]
pub struct StagingRoot {
    path: PathBuf,
    released: bool,
}

impl StagingRoot {
    /// Remove any stale tree at `path` and create it empty.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] if the stale tree cannot be removed or the
    /// directory cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> FsOpsResult<Self> {
        let path = path.into();
        match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path)
                .map_err(|source| FsOpsError::io("staging.remove_stale", &path, source))?,
            Ok(_) => fs::remove_file(&path)
                .map_err(|source| FsOpsError::io("staging.remove_stale", &path, source))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(FsOpsError::io("staging.inspect_stale", &path, source)),
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| FsOpsError::io("staging.create_parent", parent, source))?;
        }
        fs::create_dir(&path)
            .map_err(|source| FsOpsError::io("staging.create_root", &path, source))?;

        debug!(staging_root = %path.display(), "staging root created");
        Ok(Self {
            path,
            released: false,
        })
    }

    /// Location of the staging root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot `input` into the slot for `index`.
    ///
    /// A directory is mirrored directly under the slot; a file is copied to
    /// `<slot>/<file name>`.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Staging`] if the slot already exists or cannot be
    /// created, or if the copy does not complete.
    pub fn stage(&self, index: usize, input: &Path) -> FsOpsResult<StagingSlot> {
        let slot = self.path.join(index.to_string());
        fs::create_dir(&slot)
            .map_err(|source| FsOpsError::staging(index, input, "create_slot", source))?;

        let snapshot = if input.is_dir() {
            slot
        } else {
            slot.join(
                input
                    .file_name()
                    .unwrap_or_else(|| OsStr::new(FALLBACK_SNAPSHOT_NAME)),
            )
        };
        copy_tree(input, &snapshot)
            .map_err(|source| FsOpsError::staging(index, input, "copy", source))?;

        debug!(
            index,
            input = %input.display(),
            snapshot = %snapshot.display(),
            "input staged"
        );
        Ok(StagingSlot {
            index,
            original: input.to_path_buf(),
            snapshot,
        })
    }

    /// Remove the staging tree now and report failure instead of logging it.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] if the tree cannot be removed.
    pub fn close(mut self) -> FsOpsResult<()> {
        self.released = true;
        fs::remove_dir_all(&self.path)
            .map_err(|source| FsOpsError::io("staging.remove_root", &self.path, source))
    }
}

impl Drop for StagingRoot {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = fs::remove_dir_all(&self.path) {
            info!(
                error = %err,
                staging_root = %self.path.display(),
                "failed to remove staging root"
            );
        }
    }
}

/// Snapshot of one input taken before any of its bytes were rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingSlot {
    index: usize,
    original: PathBuf,
    snapshot: PathBuf,
}

impl StagingSlot {
    /// Position of the input in the argument list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Input path the snapshot was taken from.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Copy of the input inside the staging root.
    #[must_use]
    pub fn snapshot(&self) -> &Path {
        &self.snapshot
    }

    /// Copy the snapshot back over the original input.
    ///
    /// Conversion never creates or removes entries, so overwriting every staged
    /// file restores the input exactly.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] if any staged entry cannot be copied back.
    pub fn restore(&self) -> FsOpsResult<()> {
        copy_tree(&self.snapshot, &self.original)
            .map_err(|source| FsOpsError::io("staging.restore", &self.original, source))
    }
}

/// Recursively copy `source` to `destination`, following symlinks.
fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    if !source.is_dir() {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        return Ok(());
    }

    fs::create_dir_all(destination)?;
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(io::Error::other)?;
        let target_path = destination.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)?;
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target_path)?;
        }
    }
    Ok(())
}
