// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::{Direction, Interval, MtiError};

/// Point budget used when callers do not pick one.
pub const DEFAULT_DISPLAY_POINTS: usize = 1000;

/// An interval re-indexed onto the thinned display rows.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInterval {
    /// Position of the source interval in the list passed in.
    pub source: usize,
    pub start: usize,
    pub end: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub direction: Direction,
}

/// Row thinning and interval remap for plotting a long sequence.
///
/// Display row `k` shows source row `k * step`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayPlan {
    pub step: usize,
    pub display_len: usize,
    pub intervals: Vec<DisplayInterval>,
}

impl DisplayPlan {
    /// Source row index shown at display row `k`.
    pub fn source_row(&self, k: usize) -> Option<usize> {
        (k < self.display_len).then(|| k * self.step)
    }

    pub fn source_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.display_len).map(move |k| k * self.step)
    }
}

/// Thins `n` rows to roughly `max_points` and remaps `intervals` onto the
/// kept rows.
///
/// With `n > max_points` every `n / max_points`-th row is kept; interval
/// bounds are divided by that step and the end is clamped to the last
/// display row. Intervals that collapse to a single display row are dropped.
pub fn downsample_for_display(
    n: usize,
    intervals: &[Interval],
    max_points: usize,
) -> Result<DisplayPlan, MtiError> {
    if max_points == 0 {
        return Err(MtiError::invalid_input("max_points must be >= 1"));
    }

    let step = if n > max_points { n / max_points } else { 1 };
    let display_len = n.div_ceil(step);
    let last = display_len.saturating_sub(1);

    let intervals = intervals
        .iter()
        .enumerate()
        .filter_map(|(source, interval)| {
            let start = interval.start / step;
            let end = (interval.end / step).min(last);
            (start < end).then_some(DisplayInterval {
                source,
                start,
                end,
                direction: interval.direction,
            })
        })
        .collect();

    Ok(DisplayPlan {
        step,
        display_len,
        intervals,
    })
}
