// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::Direction;
use mti_scan::AnalysisResult;

/// Endpoint values, net change and violation count of one channel over
/// one interval.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelRecord {
    pub channel: String,
    pub start: f64,
    pub end: f64,
    pub change: f64,
    pub violations: usize,
}

/// One row of the interval summary table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalRecord {
    /// 1-based position in the merged interval list.
    pub interval_id: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub direction: Direction,
    pub start_index: usize,
    pub end_index: usize,
    pub length: usize,
    pub total_change: f64,
    pub total_violations: usize,
    pub channels: Vec<ChannelRecord>,
}

/// Flattens merged intervals of `result` into summary records.
pub fn records(result: &AnalysisResult) -> Vec<IntervalRecord> {
    result
        .merged_intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| {
            let violations = result.violations.get(idx);
            let channels = result
                .channels
                .iter()
                .enumerate()
                .map(|(j, name)| ChannelRecord {
                    channel: name.to_string(),
                    start: interval.start_values.get(j).unwrap_or(f64::NAN),
                    end: interval.end_values.get(j).unwrap_or(f64::NAN),
                    change: interval.changes.get(j).unwrap_or(f64::NAN),
                    violations: violations.and_then(|counts| counts.get(j)).unwrap_or(0),
                })
                .collect();

            IntervalRecord {
                interval_id: idx + 1,
                direction: interval.direction,
                start_index: interval.start,
                end_index: interval.end,
                length: interval.length,
                total_change: interval.total_change,
                total_violations: violations.map_or(0, |counts| counts.total()),
                channels,
            }
        })
        .collect()
}

/// Renders the summary table as CSV with one row per merged interval.
///
/// Columns are `interval_id,type,start_index,end_index,length,total_change`
/// followed by `<channel>_start,<channel>_end,<channel>_change` for every
/// analysed channel. A header is always written, even with no intervals.
pub fn render_csv(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let mut header = ["interval_id", "type", "start_index", "end_index", "length", "total_change"]
        .iter()
        .map(|name| (*name).to_string())
        .collect::<Vec<_>>();
    for name in result.channels.iter() {
        for suffix in ["start", "end", "change"] {
            header.push(csv_field(&format!("{name}_{suffix}")));
        }
    }
    out.push_str(&header.join(","));
    out.push('\n');

    for record in records(result) {
        out.push_str(&format!(
            "{},{},{},{},{},{}",
            record.interval_id,
            record.direction,
            record.start_index,
            record.end_index,
            record.length,
            record.total_change
        ));
        for channel in &record.channels {
            out.push_str(&format!(
                ",{},{},{}",
                channel.start, channel.end, channel.change
            ));
        }
        out.push('\n');
    }
    out
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
