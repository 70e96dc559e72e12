// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::CliError;
use mti_report::{DisplayPlan, IntervalRecord};
use mti_scan::AnalysisResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Shape and provenance of the analysed input.
#[derive(Clone, Debug, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub rows: usize,
    pub columns: Vec<String>,
}

/// JSON document written by `mti analyze --format json`.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub input: InputSummary,
    pub result: &'a AnalysisResult,
    pub records: Vec<IntervalRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPlan>,
}

pub fn write_json_output<T: Serialize>(
    payload: &T,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let encoded = serde_json::to_string_pretty(payload)
        .map_err(|source| CliError::json("failed to serialize JSON output", source))?;
    write_text_output(&format!("{encoded}\n"), output_path)
}

/// Writes `text` to `output_path`, or to stdout when no path is given.
pub fn write_text_output(text: &str, output_path: Option<&Path>) -> Result<(), CliError> {
    match output_path {
        Some(path) => fs::write(path, text)
            .map_err(|source| CliError::io(format!("failed to write '{}'", path.display()), source)),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
