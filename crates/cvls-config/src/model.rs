//! Run settings consumed by the batch runner.

use std::path::PathBuf;

use crate::defaults::default_staging_root;

/// Settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Descend into subdirectories of directory inputs.
    pub recursive: bool,
    /// Directory that holds one staging slot per input for the lifetime of the run.
    pub staging_root: PathBuf,
    /// Copy staged snapshots back over every staged input when the run fails.
    pub restore_on_error: bool,
}

impl RunSettings {
    /// Settings with the well-known staging root and rollback disabled.
    #[must_use]
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            staging_root: default_staging_root(),
            restore_on_error: false,
        }
    }

    /// Replace the staging root.
    #[must_use]
    pub fn with_staging_root(mut self, staging_root: impl Into<PathBuf>) -> Self {
        self.staging_root = staging_root.into();
        self
    }

    /// Toggle restoring staged snapshots when the run aborts.
    #[must_use]
    pub const fn with_restore_on_error(mut self, restore_on_error: bool) -> Self {
        self.restore_on_error = restore_on_error;
        self
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::new(false)
    }
}
