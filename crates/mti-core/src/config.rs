// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{MtiError, SequenceTable};

/// Default maximum counter-movement allowed per step.
pub const DEFAULT_TOLERANCE: f64 = 0.05;
/// Number of leading columns analysed when no channels are named.
pub const DEFAULT_MAX_CHANNELS: usize = 5;

/// Parameters for a single scan.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanConfig {
    pub tolerance: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ScanConfig {
    /// Checked constructor.
    pub fn new(tolerance: f64) -> Result<Self, MtiError> {
        let config = Self { tolerance };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MtiError> {
        validate_tolerance(self.tolerance)
    }
}

/// Rejects negative or non-finite tolerances.
pub fn validate_tolerance(tolerance: f64) -> Result<(), MtiError> {
    if !tolerance.is_finite() {
        return Err(MtiError::invalid_input(format!(
            "tolerance must be finite; got {tolerance}"
        )));
    }
    if tolerance < 0.0 {
        return Err(MtiError::invalid_input(format!(
            "tolerance must be >= 0.0; got {tolerance}"
        )));
    }
    Ok(())
}

/// Full analysis configuration: scan parameters plus channel selection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,
    /// Explicit channel selection; `None` selects the leading columns.
    #[cfg_attr(feature = "serde", serde(default))]
    pub channels: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default = "default_max_channels"))]
    pub max_default_channels: usize,
}

#[cfg(feature = "serde")]
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

#[cfg(feature = "serde")]
fn default_max_channels() -> usize {
    DEFAULT_MAX_CHANNELS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            channels: None,
            max_default_channels: DEFAULT_MAX_CHANNELS,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), MtiError> {
        validate_tolerance(self.tolerance)?;
        if self.channels.is_none() && self.max_default_channels == 0 {
            return Err(MtiError::invalid_input(
                "max_default_channels must be >= 1 when no channels are named",
            ));
        }
        if let Some(channels) = &self.channels {
            if channels.iter().any(|name| name.trim().is_empty()) {
                return Err(MtiError::invalid_input("channel names must be non-empty"));
            }
        }
        Ok(())
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            tolerance: self.tolerance,
        }
    }

    /// Channel names to analyse for `table`.
    pub fn resolve_channels(&self, table: &SequenceTable) -> Vec<String> {
        match &self.channels {
            Some(channels) => channels.clone(),
            None => table.leading_columns(self.max_default_channels),
        }
    }
}
