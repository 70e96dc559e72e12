// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::{Direction, Interval};

/// Aggregates over the merged intervals of one direction.
///
/// `average_length` and `max_length` are `None` when `count == 0`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionSummary {
    pub direction: Direction,
    pub count: usize,
    pub average_length: Option<f64>,
    pub max_length: Option<usize>,
    pub total_change: f64,
}

impl DirectionSummary {
    fn empty(direction: Direction) -> Self {
        Self {
            direction,
            count: 0,
            average_length: None,
            max_length: None,
            total_change: 0.0,
        }
    }

    fn from_intervals<'i>(
        direction: Direction,
        intervals: impl Iterator<Item = &'i Interval>,
    ) -> Self {
        let mut summary = Self::empty(direction);
        let mut length_sum = 0usize;
        for interval in intervals.filter(|interval| interval.direction == direction) {
            summary.count += 1;
            length_sum += interval.length;
            summary.max_length = Some(summary.max_length.map_or(interval.length, |max| {
                max.max(interval.length)
            }));
            summary.total_change += interval.total_change;
        }
        if summary.count > 0 {
            summary.average_length = Some(length_sum as f64 / summary.count as f64);
        }
        summary
    }
}

/// Corpus-level statistics over a merged interval list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalStatistics {
    pub total_intervals: usize,
    pub increasing: DirectionSummary,
    pub decreasing: DirectionSummary,
}

impl IntervalStatistics {
    pub fn for_direction(&self, direction: Direction) -> &DirectionSummary {
        match direction {
            Direction::Increasing => &self.increasing,
            Direction::Decreasing => &self.decreasing,
        }
    }
}

/// Partitions `merged` by direction and aggregates each side.
///
/// Never fails: empty partitions report a zero count and no lengths.
pub fn summarize(merged: &[Interval]) -> IntervalStatistics {
    IntervalStatistics {
        total_intervals: merged.len(),
        increasing: DirectionSummary::from_intervals(Direction::Increasing, merged.iter()),
        decreasing: DirectionSummary::from_intervals(Direction::Decreasing, merged.iter()),
    }
}

/// Intervals of `merged` that carry `direction`, in order.
pub fn intervals_of(merged: &[Interval], direction: Direction) -> Vec<&Interval> {
    merged
        .iter()
        .filter(|interval| interval.direction == direction)
        .collect()
}
