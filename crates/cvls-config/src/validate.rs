//! Validation helpers for the input list and staging location.
//!
//! Missing inputs are not rejected here; the batch runner reports them in
//! argument order so earlier inputs are still converted.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::RunSettings;

const EMPTY_INPUTS: &str = "no input paths given";
const STAGING_INSIDE_INPUT: &str = "staging root lies inside a directory input";
const INPUT_INSIDE_STAGING: &str = "input lies inside the staging root";

/// Check that the run has inputs and that the staging root cannot clobber them.
///
/// The staging root is wiped at the start of a run and receives recursive copies,
/// so it must neither sit inside a directory input nor contain any input.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the input list is empty or the
/// staging root overlaps an existing input.
pub fn validate_inputs(inputs: &[PathBuf], settings: &RunSettings) -> ConfigResult<()> {
    if inputs.is_empty() {
        return Err(ConfigError::InvalidField {
            field: "inputs",
            reason: EMPTY_INPUTS,
            value: None,
        });
    }

    let staging = resolve(&settings.staging_root);
    for input in inputs.iter().filter(|input| input.exists()) {
        let resolved = resolve(input);
        if input.is_dir() && staging.starts_with(&resolved) {
            return Err(ConfigError::InvalidField {
                field: "staging_root",
                reason: STAGING_INSIDE_INPUT,
                value: Some(settings.staging_root.display().to_string()),
            });
        }
        if resolved.starts_with(&staging) {
            return Err(ConfigError::InvalidField {
                field: "inputs",
                reason: INPUT_INSIDE_STAGING,
                value: Some(input.display().to_string()),
            });
        }
    }

    debug!(
        inputs = inputs.len(),
        staging_root = %staging.display(),
        "run settings validated"
    );
    Ok(())
}

/// Canonicalise the deepest existing ancestor and re-append the rest.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => resolve(parent).join(name),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use cvls_test_support::fixtures::{temp_dir, write_file};

    #[test]
    fn rejects_empty_input_list() {
        let err = validate_inputs(&[], &RunSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "inputs",
                reason: EMPTY_INPUTS,
                ..
            }
        ));
    }

    #[test]
    fn rejects_staging_root_nested_in_directory_input() -> Result<()> {
        let temp = temp_dir("cvls-config-")?;
        let settings = RunSettings::new(true).with_staging_root(temp.path().join("stage"));
        let err = validate_inputs(&[temp.path().to_path_buf()], &settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "staging_root",
                reason: STAGING_INSIDE_INPUT,
                ..
            }
        ));
        let stage = temp.path().join("stage");
        assert!(err.to_string().contains(&stage.display().to_string()));
        Ok(())
    }

    #[test]
    fn rejects_input_inside_staging_root() -> Result<()> {
        let temp = temp_dir("cvls-config-")?;
        let input = write_file(temp.path(), "stage/0/notes.txt", b"a\rb")?;
        let settings = RunSettings::default().with_staging_root(temp.path().join("stage"));
        let err = validate_inputs(&[input.clone()], &settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "inputs",
                reason: INPUT_INSIDE_STAGING,
                ..
            }
        ));
        assert!(err.to_string().contains(&input.display().to_string()));
        Ok(())
    }

    #[test]
    fn accepts_disjoint_paths_and_ignores_missing_inputs() -> Result<()> {
        let temp = temp_dir("cvls-config-")?;
        let input = write_file(temp.path(), "work/a.txt", b"a\r\n")?;
        let settings = RunSettings::default().with_staging_root(temp.path().join("stage"));
        validate_inputs(&[input, temp.path().join("missing.txt")], &settings)?;
        Ok(())
    }
}
