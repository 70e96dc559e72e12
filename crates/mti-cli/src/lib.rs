// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Library half of the `mti` command: argument definitions, CSV loading,
//! config resolution and report writing.

mod cli;
mod error;
mod input;
mod logging;
mod output;
mod settings;

pub use cli::{AnalyzeArgs, Cli, Command, OutputFormat};
pub use error::{CliError, ErrorEnvelope, ErrorPayload, emit_structured_error};
pub use input::{load_table, parse_csv_table};
pub use logging::{default_filter, init_tracing};
pub use output::{AnalysisReport, InputSummary, write_json_output, write_text_output};
pub use settings::{load_config, resolve_config};

use mti_report::{downsample_for_display, records, render_csv, render_text_summary};
use mti_scan::analyze_table;
use tracing::info;

/// Dispatches a parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Analyze(args) => handle_analyze(&args),
    }
}

/// Loads the input, analyses it and writes every requested output.
pub fn handle_analyze(args: &AnalyzeArgs) -> Result<(), CliError> {
    let config = resolve_config(args)?;
    let table = load_table(&args.input)?;
    let result = analyze_table(&table, &config)?;
    info!(
        input = %args.input.display(),
        intervals = result.merged_intervals.len(),
        "analysis finished"
    );

    if let Some(path) = &args.summary_csv {
        write_text_output(&render_csv(&result), Some(path))?;
    }

    match args.format {
        OutputFormat::Json => {
            let display = args
                .display_points
                .map(|max_points| {
                    downsample_for_display(table.n_rows(), &result.merged_intervals, max_points)
                })
                .transpose()?;
            let report = AnalysisReport {
                input: InputSummary {
                    path: args.input.display().to_string(),
                    rows: table.n_rows(),
                    columns: table.column_names().to_vec(),
                },
                result: &result,
                records: records(&result),
                display,
            };
            write_json_output(&report, args.output.as_deref())
        }
        OutputFormat::Text => {
            write_text_output(&render_text_summary(&result), args.output.as_deref())
        }
    }
}
