// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Diagnostics schema version for analysis run metadata.
pub const DIAGNOSTICS_SCHEMA_VERSION: u32 = 1;

/// Counters describing the work done by one scan and merge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Distinct start positions visited by the scanner cursor.
    pub cursor_positions: usize,
    /// Candidate `[start, end]` prefixes evaluated across both directions.
    pub prefix_checks: usize,
    pub raw_intervals: usize,
    pub merged_intervals: usize,
    /// Number of abutting same-direction pairs fused by the merger.
    pub fused_pairs: usize,
}

/// Structured diagnostics captured from an analysis run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScanDiagnostics {
    pub n: usize,
    pub d: usize,
    pub schema_version: u32,
    pub engine_version: Option<String>,
    pub runtime_ms: Option<u64>,
    pub tolerance: f64,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ScanStats,
}

impl Default for ScanDiagnostics {
    fn default() -> Self {
        Self {
            n: 0,
            d: 0,
            schema_version: DIAGNOSTICS_SCHEMA_VERSION,
            engine_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            runtime_ms: None,
            tolerance: 0.0,
            notes: vec![],
            warnings: vec![],
            stats: ScanStats::default(),
        }
    }
}
