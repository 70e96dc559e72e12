// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{ChannelSchema, ChannelValues, MtiError};
use std::collections::HashSet;

/// A single named column of a [`SequenceTable`].
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Every cell parsed as a number.
    Numeric(Vec<f64>),
    /// At least one cell was not numeric; carried as metadata only.
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Text(_) => None,
        }
    }
}

/// Owned, column-major table of named columns sharing one row count.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceTable {
    names: Vec<String>,
    columns: Vec<Column>,
    n: usize,
}

impl SequenceTable {
    /// Constructs a validated table.
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self, MtiError> {
        if names.len() != columns.len() {
            return Err(MtiError::invalid_input(format!(
                "column count mismatch: got {} names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(MtiError::invalid_input("column names must be non-empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(MtiError::invalid_input(format!(
                    "duplicate column name '{name}'"
                )));
            }
        }

        let n = columns.first().map_or(0, Column::len);
        if let Some((idx, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != n)
        {
            return Err(MtiError::invalid_input(format!(
                "column '{}' has {} rows but expected {n}",
                names[idx],
                column.len()
            )));
        }

        Ok(Self { names, columns, n })
    }

    pub fn n_rows(&self) -> usize {
        self.n
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|idx| &self.columns[idx])
    }

    /// Names of the first `k` columns in table order.
    pub fn leading_columns(&self, k: usize) -> Vec<String> {
        self.names.iter().take(k).cloned().collect()
    }

    /// Names of every numeric column in table order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.names
            .iter()
            .zip(self.columns.iter())
            .filter(|(_, column)| column.is_numeric())
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Read-only view over a sequence restricted to its numeric channels.
///
/// Rows are indexed `0..n`; each analysed channel is a borrowed slice of
/// length `n`. Channels that were selected but are not numeric are kept in
/// `skipped_channels` and contribute no constraint.
#[derive(Clone, Debug)]
pub struct SequenceView<'a> {
    schema: ChannelSchema,
    data: Vec<&'a [f64]>,
    skipped_channels: Vec<String>,
    n: usize,
}

impl<'a> SequenceView<'a> {
    /// Builds a view over the named columns of `table`, in selection order.
    pub fn select<S: AsRef<str>>(
        table: &'a SequenceTable,
        selection: &[S],
    ) -> Result<Self, MtiError> {
        let mut names = Vec::with_capacity(selection.len());
        let mut data = Vec::with_capacity(selection.len());
        let mut skipped_channels = vec![];
        let mut seen = HashSet::with_capacity(selection.len());

        for name in selection.iter().map(AsRef::as_ref) {
            if !seen.insert(name) {
                return Err(MtiError::invalid_input(format!(
                    "channel '{name}' selected more than once"
                )));
            }
            let column = table.column(name).ok_or_else(|| {
                MtiError::invalid_input(format!(
                    "unknown channel '{name}'; available columns: {}",
                    table.column_names().join(", ")
                ))
            })?;
            match column.as_numeric() {
                Some(values) => {
                    names.push(name.to_string());
                    data.push(values);
                }
                None => skipped_channels.push(name.to_string()),
            }
        }

        Self::build(names, data, skipped_channels, table.n_rows())
    }

    /// Builds a view directly over numeric channel slices.
    pub fn from_columns<S: AsRef<str>>(
        names: &[S],
        columns: &[&'a [f64]],
    ) -> Result<Self, MtiError> {
        if names.len() != columns.len() {
            return Err(MtiError::invalid_input(format!(
                "channel count mismatch: got {} names for {} columns",
                names.len(),
                columns.len()
            )));
        }
        let n = columns.first().map_or(0, |column| column.len());
        let names = names
            .iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        Self::build(names, columns.to_vec(), vec![], n)
    }

    fn build(
        names: Vec<String>,
        data: Vec<&'a [f64]>,
        skipped_channels: Vec<String>,
        n: usize,
    ) -> Result<Self, MtiError> {
        let schema = ChannelSchema::new(names)?;

        for (j, column) in data.iter().enumerate() {
            let name = schema.name(j).unwrap_or_default();
            if column.len() != n {
                return Err(MtiError::invalid_input(format!(
                    "channel '{name}' has {} rows but expected {n}",
                    column.len()
                )));
            }
            if let Some((row, value)) = column
                .iter()
                .copied()
                .enumerate()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(MtiError::invalid_input(format!(
                    "channel '{name}' has non-finite value {value} at row {row}"
                )));
            }
        }

        Ok(Self {
            schema,
            data,
            skipped_channels,
            n,
        })
    }

    /// Number of rows.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of analysed (numeric) channels.
    pub fn d(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn channels(&self) -> &ChannelSchema {
        &self.schema
    }

    pub fn skipped_channels(&self) -> &[String] {
        &self.skipped_channels
    }

    /// Full column of channel `j`.
    pub fn channel(&self, j: usize) -> &'a [f64] {
        self.data[j]
    }

    /// Iterates channel columns in schema order.
    pub fn iter_channels(&self) -> impl Iterator<Item = &'a [f64]> + '_ {
        self.data.iter().copied()
    }

    /// Values of every analysed channel at `row`.
    pub fn row_values(&self, row: usize) -> Result<ChannelValues, MtiError> {
        if row >= self.n {
            return Err(MtiError::invalid_input(format!(
                "row {row} out of bounds for sequence of length {}",
                self.n
            )));
        }
        Ok(ChannelValues::new(
            self.data.iter().map(|column| column[row]).collect(),
        ))
    }

    /// Validates an inclusive row range `[start, end]`.
    pub fn check_range(&self, start: usize, end: usize) -> Result<(), MtiError> {
        if start > end {
            return Err(MtiError::invalid_input(format!(
                "range start {start} is after end {end}"
            )));
        }
        if end >= self.n {
            return Err(MtiError::invalid_input(format!(
                "range end {end} out of bounds for sequence of length {}",
                self.n
            )));
        }
        Ok(())
    }
}
