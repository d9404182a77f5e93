//! # Design
//!
//! - Domain failures (missing paths, staging) name the offending path in their message
//!   because the binary prints that message verbatim.
//! - Unclassified IO failures keep the operation label and path as fields.
//! - Source errors are preserved, never interpolated into the message.

use std::io;
use std::path::PathBuf;

use cvls_config::ConfigError;
use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced by the conversion pipeline.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// A top-level input did not exist when its turn came.
    #[error("{} does not exist", path.display())]
    MissingInput {
        /// Input path as supplied by the caller.
        path: PathBuf,
    },
    /// A file vanished between enumeration and rewriting.
    #[error("{} does not exist", path.display())]
    MissingFile {
        /// Path of the enumerated file.
        path: PathBuf,
    },
    /// The snapshot of an input could not be staged.
    #[error("failed to stage {} into slot {index}: {reason}", path.display())]
    Staging {
        /// Ordinal of the input in the argument list.
        index: usize,
        /// Input path being staged.
        path: PathBuf,
        /// Static reason for the failure.
        reason: &'static str,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Run settings were rejected before any filesystem mutation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Unclassified IO failures while interacting with the filesystem.
    #[error("{operation} failed for {}", path.display())]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn staging(
        index: usize,
        path: impl Into<PathBuf>,
        reason: &'static str,
        source: io::Error,
    ) -> Self {
        Self::Staging {
            index,
            path: path.into(),
            reason,
            source,
        }
    }

    /// Whether this is an expected, classified failure rather than a fatal one.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        match self {
            Self::MissingInput { .. }
            | Self::MissingFile { .. }
            | Self::Staging { .. }
            | Self::Config(_) => true,
            Self::Io { .. } => false,
        }
    }
}
