//! Counters describing what a successful run touched.

use serde::Serialize;

use crate::rewrite::RewriteOutcome;

/// Summary of a completed batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Inputs that were staged and fully walked.
    pub inputs_processed: usize,
    /// Staging slots created under the staging root.
    pub staged_slots: usize,
    /// Files whose content changed.
    pub files_converted: usize,
    /// Files that were already canonical.
    pub files_unchanged: usize,
    /// Subdirectories left alone because recursion was off.
    pub directories_skipped: usize,
}

impl BatchReport {
    /// Count one rewritten file.
    pub const fn record(&mut self, outcome: RewriteOutcome) {
        match outcome {
            RewriteOutcome::Converted => self.files_converted += 1,
            RewriteOutcome::Unchanged => self.files_unchanged += 1,
        }
    }

    /// Files visited in total.
    #[must_use]
    pub const fn files_visited(&self) -> usize {
        self.files_converted + self.files_unchanged
    }
}
