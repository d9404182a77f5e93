//! Default names and levels shared by the CLI and the pipeline.
//!
//! # Design
//! - Keep the reserved staging directory name in one place so tests and the binary agree.
//! - The staging root lives under the platform temp directory unless overridden.

use std::path::PathBuf;

/// Directory name reserved for this tool under the platform temp directory.
pub const STAGING_DIR_NAME: &str = "cvls";

/// Log level used when neither `RUST_LOG` nor a verbosity flag is supplied.
///
/// Kept at `warn` so a failed run prints only its single error line.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Well-known staging root: `<temp dir>/cvls`.
#[must_use]
pub fn default_staging_root() -> PathBuf {
    std::env::temp_dir().join(STAGING_DIR_NAME)
}
