//! Argument parsing and dispatch for `cvls`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use cvls_config::{DEFAULT_LOG_LEVEL, RunSettings, default_staging_root};
use cvls_fsops::BatchRunner;
use cvls_telemetry::{LogFormat, LoggingConfig};
use tracing::debug;

use crate::error::CliResult;
use crate::output::render_report;

#[derive(Parser, Debug)]
#[command(
    name = "cvls",
    version,
    about = "Convert Line Separator tool: rewrites CR and CRLF terminators to CRLF in place"
)]
pub(crate) struct Cli {
    #[arg(
        required = true,
        value_name = "PATHS",
        help = "Target files or directories"
    )]
    paths: Vec<PathBuf>,
    #[arg(short = 'r', long, help = "Descend into subdirectories of directory targets")]
    recursive: bool,
    #[arg(
        long,
        env = "CVLS_STAGING_DIR",
        value_name = "DIR",
        help = "Staging directory for pre-conversion snapshots (wiped at start and end)"
    )]
    staging_dir: Option<PathBuf>,
    #[arg(
        long,
        env = "CVLS_RESTORE_ON_ERROR",
        help = "Restore every staged target from its snapshot when the run fails"
    )]
    restore_on_error: bool,
    #[arg(
        long = "output",
        value_enum,
        help = "Print a run summary on success"
    )]
    output: Option<OutputFormat>,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    verbose: u8,
    #[arg(long, env = "CVLS_LOG_FORMAT", value_enum, help = "Log output format")]
    log_format: Option<LogFormatArg>,
}

impl Cli {
    fn settings(&self) -> RunSettings {
        RunSettings::new(self.recursive)
            .with_staging_root(
                self.staging_dir
                    .clone()
                    .unwrap_or_else(default_staging_root),
            )
            .with_restore_on_error(self.restore_on_error)
    }

    const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            _ => "debug",
        }
    }

    fn logging(&self) -> LoggingConfig<'static> {
        LoggingConfig {
            level: self.log_level(),
            format: self.log_format.map_or_else(LogFormat::infer, LogFormat::from),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Parses process arguments, runs the conversion, and returns the exit code.
#[must_use]
pub fn run() -> i32 {
    run_from(std::env::args_os())
}

/// Same as [`run`] with explicit arguments; the first item is the program name.
///
/// Returns `0` on success, `-1` after a domain error, `1` after a fatal error,
/// and clap's own code for usage errors, help, and version output.
pub fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    // A subscriber installed by an embedding process keeps receiving events.
    let _ = cvls_telemetry::init_logging(&cli.logging());

    match dispatch(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err.display_message());
            err.exit_code()
        }
    }
}

fn dispatch(cli: &Cli) -> CliResult<()> {
    let settings = cli.settings();
    debug!(
        targets = cli.paths.len(),
        recursive = settings.recursive,
        staging_root = %settings.staging_root.display(),
        restore_on_error = settings.restore_on_error,
        "starting run"
    );

    let report = BatchRunner::new(settings).run(&cli.paths)?;
    if let Some(format) = cli.output {
        render_report(&report, format)?;
    }
    Ok(())
}
