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

//! Typed run settings for the line-ending conversion pipeline.
//!
//! Layout: `defaults.rs` (well-known names and levels), `model.rs` (`RunSettings`),
//! `validate.rs` (input list checks), `error.rs` (`ConfigError`).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use defaults::{DEFAULT_LOG_LEVEL, STAGING_DIR_NAME, default_staging_root};
pub use error::{ConfigError, ConfigResult};
pub use model::RunSettings;
pub use validate::validate_inputs;
