// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Shared types for monotonic trend interval analysis.

pub mod channels;
pub mod config;
pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod interval;
#[cfg(feature = "serde")]
pub mod schema_migration;
pub mod sequence;

pub use channels::{ChannelSchema, ChannelValues};
pub use config::{
    AnalysisConfig, DEFAULT_MAX_CHANNELS, DEFAULT_TOLERANCE, ScanConfig, validate_tolerance,
};
pub use diagnostics::{DIAGNOSTICS_SCHEMA_VERSION, ScanDiagnostics, ScanStats};
pub use direction::Direction;
pub use error::MtiError;
pub use interval::{Interval, MIN_INTERVAL_LEN};
#[cfg(feature = "serde")]
pub use schema_migration::{
    AnalysisConfigWire, CURRENT_SCHEMA_VERSION, MAX_FORWARD_COMPAT_SCHEMA_VERSION, UnknownFields,
    validate_schema_version,
};
pub use sequence::{Column, SequenceTable, SequenceView};
