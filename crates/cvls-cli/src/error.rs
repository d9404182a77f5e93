//! CLI-level error type separating expected failures from fatal ones.

use cvls_fsops::FsOpsError;

/// Exit status for classified failures such as a missing input.
pub(crate) const DOMAIN_EXIT_CODE: i32 = -1;
/// Exit status for unclassified failures such as an unreadable file.
pub(crate) const FAILURE_EXIT_CODE: i32 = 1;

/// CLI-level error type to distinguish domain errors from fatal failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Domain(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Domain(_) => DOMAIN_EXIT_CODE,
            Self::Failure(_) => FAILURE_EXIT_CODE,
        }
    }

    /// Single line written to stderr.
    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Domain(message) => format!("err: {message}"),
            Self::Failure(error) => format!("fatal: {error:#}"),
        }
    }
}

impl From<FsOpsError> for CliError {
    fn from(error: FsOpsError) -> Self {
        if error.is_domain() {
            Self::Domain(error.to_string())
        } else {
            Self::failure(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_print_err_prefix_and_exit_minus_one() {
        let err = CliError::from(FsOpsError::MissingInput {
            path: PathBuf::from("b.txt"),
        });
        assert_eq!(err.exit_code(), -1);
        assert_eq!(err.display_message(), "err: b.txt does not exist");
    }

    #[test]
    fn io_errors_are_fatal_with_source_chain() {
        let err = CliError::from(FsOpsError::Io {
            operation: "rewrite.write",
            path: PathBuf::from("locked.txt"),
            source: io::Error::other("permission denied"),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.display_message(),
            "fatal: rewrite.write failed for locked.txt: permission denied"
        );
    }
}
