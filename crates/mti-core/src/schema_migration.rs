// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{AnalysisConfig, MtiError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current schema version written by this crate.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
/// Maximum additive forward-compatible schema version accepted by readers.
pub const MAX_FORWARD_COMPAT_SCHEMA_VERSION: u32 = 2;

pub type UnknownFields = Map<String, Value>;

/// Validates whether an artifact schema version is currently readable.
pub fn validate_schema_version(schema_version: u32, artifact: &str) -> Result<(), MtiError> {
    if (CURRENT_SCHEMA_VERSION..=MAX_FORWARD_COMPAT_SCHEMA_VERSION).contains(&schema_version) {
        return Ok(());
    }

    Err(MtiError::invalid_input(format!(
        "{artifact} schema_version={schema_version} is unsupported; supported versions are {CURRENT_SCHEMA_VERSION}..={MAX_FORWARD_COMPAT_SCHEMA_VERSION}"
    )))
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// Wire format for versioned analysis config payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfigWire {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(flatten)]
    pub config: AnalysisConfig,
    #[serde(default, flatten)]
    pub unknown_fields: UnknownFields,
}

impl AnalysisConfigWire {
    pub fn into_runtime_parts(self) -> Result<(AnalysisConfig, UnknownFields), MtiError> {
        validate_schema_version(self.schema_version, "AnalysisConfig")?;
        self.config.validate()?;
        Ok((self.config, self.unknown_fields))
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisConfigWire, CURRENT_SCHEMA_VERSION, validate_schema_version};
    use crate::ScanConfig;

    #[test]
    fn schema_version_window_is_enforced() {
        assert!(validate_schema_version(1, "AnalysisConfig").is_ok());
        assert!(validate_schema_version(2, "AnalysisConfig").is_ok());
        let err = validate_schema_version(3, "AnalysisConfig").expect_err("v3 unsupported");
        assert!(err.to_string().contains("schema_version=3 is unsupported"));
        assert!(validate_schema_version(0, "AnalysisConfig").is_err());
    }

    #[test]
    fn minimal_payload_uses_defaults() {
        let wire: AnalysisConfigWire =
            serde_json::from_str(r#"{"tolerance": 0.1}"#).expect("wire should parse");
        assert_eq!(wire.schema_version, CURRENT_SCHEMA_VERSION);
        let (config, unknown) = wire.into_runtime_parts().expect("config should validate");
        assert!(unknown.is_empty());
        assert_eq!(config.scan_config(), ScanConfig { tolerance: 0.1 });
        assert!(config.channels.is_none());
        assert_eq!(config.max_default_channels, 5);
    }

    #[test]
    fn unknown_fields_are_preserved_for_forward_compat() {
        let raw = r#"{
            "schema_version": 2,
            "tolerance": 0.05,
            "channels": ["deltaX", "gamma"],
            "plot_max_points": 1000
        }"#;
        let wire: AnalysisConfigWire = serde_json::from_str(raw).expect("wire should parse");
        let (config, unknown) = wire.into_runtime_parts().expect("v2 should be readable");
        assert_eq!(unknown.len(), 1);
        assert_eq!(
            config.channels,
            Some(vec!["deltaX".to_string(), "gamma".to_string()])
        );
        assert_eq!(unknown.get("plot_max_points"), Some(&serde_json::json!(1000)));
    }

    #[test]
    fn invalid_tolerance_is_rejected_on_conversion() {
        let wire: AnalysisConfigWire =
            serde_json::from_str(r#"{"tolerance": -1.0}"#).expect("wire should parse");
        let err = wire
            .into_runtime_parts()
            .expect_err("negative tolerance must fail");
        assert!(err.to_string().contains("tolerance must be >= 0.0"));
    }
}
