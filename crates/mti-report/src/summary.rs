// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::records::records;
use mti_core::Direction;
use mti_scan::AnalysisResult;

/// Plain-text report: analysed channels, per-direction statistics and a
/// detail block per merged interval.
pub fn render_text_summary(result: &AnalysisResult) -> String {
    let stats = &result.statistics;
    let mut lines = vec![format!(
        "Columns analyzed: [{}]",
        result.channels.names().join(", ")
    )];
    if !result.skipped_channels.is_empty() {
        lines.push(format!(
            "Skipped non-numeric columns: [{}]",
            result.skipped_channels.join(", ")
        ));
    }
    lines.push(format!("Tolerance: {}", result.tolerance));
    lines.push(format!("Total merged intervals: {}", stats.total_intervals));
    for direction in Direction::SCAN_ORDER {
        lines.push(format!(
            "{} intervals: {}",
            capitalized(direction),
            stats.for_direction(direction).count
        ));
    }

    for direction in Direction::SCAN_ORDER {
        let summary = stats.for_direction(direction);
        let (Some(average), Some(max)) = (summary.average_length, summary.max_length) else {
            continue;
        };
        lines.push(String::new());
        lines.push(format!("{} intervals statistics:", capitalized(direction)));
        lines.push(format!("  Average length: {average:.1}"));
        lines.push(format!("  Maximum length: {max}"));
        lines.push(format!(
            "  Total change (all columns): {:.6}",
            summary.total_change
        ));
    }

    let rows = records(result);
    if !rows.is_empty() {
        lines.push(String::new());
        lines.push(format!("Merged intervals (tolerance={}):", result.tolerance));
    }
    for row in rows {
        lines.push(String::new());
        lines.push(format!(
            "  {}. {} interval:",
            row.interval_id,
            row.direction.as_str().to_uppercase()
        ));
        lines.push(format!("     Indices: {}-{}", row.start_index, row.end_index));
        lines.push(format!("     Length: {}", row.length));
        lines.push(format!("     Total violations: {}", row.total_violations));
        lines.push("     Changes by column:".to_string());
        for channel in &row.channels {
            lines.push(format!(
                "       {}: {:.6} (violations: {})",
                channel.channel, channel.change, channel.violations
            ));
        }
        lines.push(format!("     Total change: {:.6}", row.total_change));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn capitalized(direction: Direction) -> &'static str {
    match direction {
        Direction::Increasing => "Increasing",
        Direction::Decreasing => "Decreasing",
    }
}
