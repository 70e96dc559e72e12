// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{AnalyzeArgs, CliError};
use mti_core::{AnalysisConfig, AnalysisConfigWire};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Reads a versioned JSON analysis config.
///
/// Unknown fields are tolerated and logged.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::io(format!("failed to read '{}'", path.display()), source))?;
    let wire: AnalysisConfigWire = serde_json::from_str(&raw).map_err(|source| {
        CliError::json(format!("invalid config '{}'", path.display()), source)
    })?;
    let (config, unknown_fields) = wire.into_runtime_parts()?;
    if !unknown_fields.is_empty() {
        let keys = unknown_fields.keys().cloned().collect::<Vec<_>>();
        warn!(path = %path.display(), ?keys, "ignoring unknown config fields");
    }
    Ok(config)
}

/// Defaults, then the config file, then explicit flags.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(channels) = &args.channels {
        config.channels = Some(channels.clone());
    }
    config.validate()?;
    Ok(config)
}
