// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::CliError;
use mti_core::{Column, SequenceTable};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a headed CSV file into a [`SequenceTable`].
pub fn load_table(path: &Path) -> Result<SequenceTable, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::io(format!("failed to read '{}'", path.display()), source))?;
    let table = parse_csv_table(&raw)?;
    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_columns(),
        "loaded input table"
    );
    Ok(table)
}

/// Parses CSV text whose first non-blank line is the header.
///
/// Cells and header names are trimmed and blank lines are ignored. A column
/// is numeric only when every one of its cells parses as a finite `f64`;
/// blank, `NaN` or infinite cells make the whole column text. Quoted fields
/// are not supported.
pub fn parse_csv_table(raw: &str) -> Result<SequenceTable, CliError> {
    let mut lines = raw
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(CliError::invalid_input("CSV input is empty"));
    };
    let names = split_cells(header);
    if let Some(pos) = names.iter().position(|name| name.is_empty()) {
        return Err(CliError::csv(
            header_line,
            format!("header column {} has no name", pos + 1),
        ));
    }

    let mut cells_by_column = vec![Vec::<String>::new(); names.len()];
    for (line_no, line) in lines {
        let cells = split_cells(line);
        if cells.len() != names.len() {
            return Err(CliError::csv(
                line_no,
                format!(
                    "row has {} fields but header has {}",
                    cells.len(),
                    names.len()
                ),
            ));
        }
        for (column, cell) in cells_by_column.iter_mut().zip(cells) {
            column.push(cell);
        }
    }

    let columns = cells_by_column.into_iter().map(into_column).collect();
    Ok(SequenceTable::new(names, columns)?)
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn into_column(cells: Vec<String>) -> Column {
    let parsed = cells
        .iter()
        .map(|cell| cell.parse::<f64>().ok().filter(|value| value.is_finite()))
        .collect::<Option<Vec<_>>>();
    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Text(cells),
    }
}
