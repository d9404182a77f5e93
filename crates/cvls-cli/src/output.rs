//! Output renderers for the run summary.

use cvls_fsops::BatchReport;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

pub(crate) fn render_report(report: &BatchReport, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_report(report, format)?);
    Ok(())
}

fn format_report(report: &BatchReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(CliError::failure),
        OutputFormat::Text => Ok(format!(
            "inputs: {}\nconverted: {}\nunchanged: {}\nskipped directories: {}",
            report.inputs_processed,
            report.files_converted,
            report.files_unchanged,
            report.directories_skipped
        )),
    }
}
