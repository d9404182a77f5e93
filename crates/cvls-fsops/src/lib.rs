#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem pipeline that rewrites line terminators to CRLF in place.
//!
//! Layout:
//! - `convert.rs`: pure byte transform and terminator statistics
//! - `rewrite.rs`: read-convert-write for a single file
//! - `staging.rs`: run-scoped staging root and per-input snapshots
//! - `walk.rs`: file/directory classification and traversal
//! - `batch.rs`: ordered, abort-on-first-error orchestration
//! - `report.rs`: counters returned by a successful run

pub mod batch;
pub mod convert;
pub mod error;
pub mod report;
pub mod rewrite;
pub mod staging;
pub mod walk;

pub use batch::BatchRunner;
pub use convert::{LineEndingStats, convert, needs_conversion, scan};
pub use error::{FsOpsError, FsOpsResult};
pub use report::BatchReport;
pub use rewrite::{RewriteOutcome, rewrite_file};
pub use staging::{StagingRoot, StagingSlot};
pub use walk::{EntryKind, TreeWalker};
