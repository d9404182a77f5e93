//! Ordered orchestration over the input list.
//!
//! # Design
//! - Inputs are processed strictly left to right; the first error aborts the run.
//! - Every input is staged before any of its bytes change.
//! - The staging root is owned by the run and removed on every exit path.
//! - Files converted before a failure stay converted unless rollback is enabled.

use std::path::{Path, PathBuf};

use cvls_config::{RunSettings, validate_inputs};
use tracing::{info, info_span};

use crate::error::{FsOpsError, FsOpsResult};
use crate::report::BatchReport;
use crate::staging::{StagingRoot, StagingSlot};
use crate::walk::{EntryKind, TreeWalker};

/// Runs the stage-then-convert pipeline over a list of inputs.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    settings: RunSettings,
}

impl BatchRunner {
    /// Construct a runner for the given settings.
    #[must_use]
    pub const fn new(settings: RunSettings) -> Self {
        Self { settings }
    }

    /// Settings this runner was built with.
    #[must_use]
    pub const fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Convert every input in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised: invalid settings, a missing input, a
    /// staging failure, or a failure while converting a file. Earlier inputs
    /// stay converted unless `restore_on_error` is set, in which case every
    /// staged input is copied back from its snapshot first.
    pub fn run(&self, inputs: &[PathBuf]) -> FsOpsResult<BatchReport> {
        validate_inputs(inputs, &self.settings)?;

        let staging = StagingRoot::create(&self.settings.staging_root)?;
        let mut slots = Vec::with_capacity(inputs.len());
        let mut report = BatchReport::default();

        if let Err(err) = self.process_inputs(&staging, inputs, &mut slots, &mut report) {
            if self.settings.restore_on_error {
                restore_slots(&slots);
            }
            return Err(err);
        }

        staging.close()?;
        info!(
            inputs = report.inputs_processed,
            converted = report.files_converted,
            unchanged = report.files_unchanged,
            skipped_dirs = report.directories_skipped,
            "run complete"
        );
        Ok(report)
    }

    fn process_inputs(
        &self,
        staging: &StagingRoot,
        inputs: &[PathBuf],
        slots: &mut Vec<StagingSlot>,
        report: &mut BatchReport,
    ) -> FsOpsResult<()> {
        let walker = TreeWalker::new(self.settings.recursive);
        for (index, input) in inputs.iter().enumerate() {
            let _span = info_span!("input", index, path = %input.display()).entered();
            process_input(staging, &walker, index, input, slots, report)?;
        }
        Ok(())
    }
}

fn process_input(
    staging: &StagingRoot,
    walker: &TreeWalker,
    index: usize,
    input: &Path,
    slots: &mut Vec<StagingSlot>,
    report: &mut BatchReport,
) -> FsOpsResult<()> {
    if !input.exists() {
        return Err(FsOpsError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    slots.push(staging.stage(index, input)?);
    report.staged_slots += 1;

    info!(kind = EntryKind::classify(input).as_str(), "converting input");
    walker.walk(input, report)?;
    report.inputs_processed += 1;
    Ok(())
}

/// Copy snapshots back, newest first. Outcomes are logged below the default
/// level so the caller's error stays the only line on stderr.
fn restore_slots(slots: &[StagingSlot]) {
    for slot in slots.iter().rev() {
        match slot.restore() {
            Ok(()) => info!(
                index = slot.index(),
                path = %slot.original().display(),
                "restored input from staging snapshot"
            ),
            Err(err) => info!(
                index = slot.index(),
                path = %slot.original().display(),
                error = %err,
                "failed to restore input from staging snapshot"
            ),
        }
    }
}
