// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::merge::merge_counting;
use crate::scanner::IntervalScanner;
use crate::statistics::{IntervalStatistics, summarize};
use crate::violations::{ViolationCounts, count_interval_violations};
use mti_core::{
    AnalysisConfig, ChannelSchema, Interval, MtiError, ScanConfig, ScanDiagnostics, SequenceTable,
    SequenceView,
};
use std::time::Instant;
use tracing::{info, warn};

/// Everything one analysis run produces.
///
/// `violations[i]` belongs to `merged_intervals[i]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub channels: ChannelSchema,
    pub skipped_channels: Vec<String>,
    pub tolerance: f64,
    pub raw_intervals: Vec<Interval>,
    pub merged_intervals: Vec<Interval>,
    pub violations: Vec<ViolationCounts>,
    pub statistics: IntervalStatistics,
    pub diagnostics: ScanDiagnostics,
}

impl AnalysisResult {
    pub fn total_violations(&self) -> usize {
        self.violations.iter().map(ViolationCounts::total).sum()
    }
}

/// Scan, merge, count violations and summarize `view`.
pub fn analyze(view: &SequenceView<'_>, config: &ScanConfig) -> Result<AnalysisResult, MtiError> {
    let started_at = Instant::now();
    let scanner = IntervalScanner::new(*config)?;
    let outcome = scanner.scan_with_stats(view)?;

    let raw_intervals = outcome.intervals;
    let (merged_intervals, fused_pairs) = merge_counting(raw_intervals.iter().cloned());

    let violations = merged_intervals
        .iter()
        .map(|interval| count_interval_violations(view, interval, config.tolerance))
        .collect::<Result<Vec<_>, _>>()?;

    let statistics = summarize(&merged_intervals);

    let mut diagnostics = ScanDiagnostics {
        n: view.n(),
        d: view.d(),
        tolerance: config.tolerance,
        stats: outcome.stats,
        ..ScanDiagnostics::default()
    };
    diagnostics.stats.merged_intervals = merged_intervals.len();
    diagnostics.stats.fused_pairs = fused_pairs;
    diagnostics.notes.push(format!(
        "channels analysed: {}",
        view.channels().names().join(", ")
    ));

    for name in view.skipped_channels() {
        warn!(channel = name.as_str(), "skipping non-numeric channel");
        diagnostics
            .warnings
            .push(format!("skipped non-numeric channel '{name}'"));
    }
    if view.channels().is_empty() {
        warn!("no numeric channels selected; every range passes vacuously");
        diagnostics.warnings.push(
            "no numeric channels selected; intervals carry no per-channel values".to_string(),
        );
    }
    for (interval, counts) in merged_intervals.iter().zip(violations.iter()) {
        if !counts.is_clean() {
            warn!(
                start = interval.start,
                end = interval.end,
                violations = counts.total(),
                "merged interval reports tolerance violations"
            );
            diagnostics.warnings.push(format!(
                "interval [{}, {}] reports {} tolerance violations",
                interval.start,
                interval.end,
                counts.total()
            ));
        }
    }

    diagnostics.runtime_ms =
        Some(u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX));

    info!(
        n = view.n(),
        d = view.d(),
        tolerance = config.tolerance,
        raw = raw_intervals.len(),
        merged = merged_intervals.len(),
        increasing = statistics.increasing.count,
        decreasing = statistics.decreasing.count,
        "monotonic interval analysis complete"
    );

    Ok(AnalysisResult {
        channels: view.channels().clone(),
        skipped_channels: view.skipped_channels().to_vec(),
        tolerance: config.tolerance,
        raw_intervals,
        merged_intervals,
        violations,
        statistics,
        diagnostics,
    })
}

/// Resolves the channel selection from `config` and analyses `table`.
pub fn analyze_table(
    table: &SequenceTable,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, MtiError> {
    config.validate()?;
    let selection = config.resolve_channels(table);
    let view = SequenceView::select(table, &selection)?;
    analyze(&view, &config.scan_config())
}
