// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{ChannelSchema, ChannelValues, Direction, MtiError, SequenceView};

/// Smallest `end - start` an interval must span to be reported.
pub const MIN_INTERVAL_LEN: usize = 2;

/// Contiguous inclusive row range `[start, end]` where every analysed
/// channel moves in `direction` within tolerance.
///
/// `start_values`, `end_values` and `changes` are aligned to the run's
/// [`ChannelSchema`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub direction: Direction,
    pub length: usize,
    pub start_values: ChannelValues,
    pub end_values: ChannelValues,
    pub changes: ChannelValues,
    pub total_change: f64,
}

impl Interval {
    /// Builds an interval from endpoint values, deriving changes and totals.
    pub fn from_endpoints(
        start: usize,
        end: usize,
        direction: Direction,
        start_values: ChannelValues,
        end_values: ChannelValues,
    ) -> Result<Self, MtiError> {
        if end <= start {
            return Err(MtiError::invalid_input(format!(
                "interval end {end} must be greater than start {start}"
            )));
        }
        if start_values.len() != end_values.len() {
            return Err(MtiError::invalid_input(format!(
                "endpoint channel count mismatch: start has {}, end has {}",
                start_values.len(),
                end_values.len()
            )));
        }
        let changes = end_values.minus(&start_values);
        let total_change = changes.sum();
        Ok(Self {
            start,
            end,
            direction,
            length: end - start,
            start_values,
            end_values,
            changes,
            total_change,
        })
    }

    /// Reads endpoint values for `[start, end]` out of `view`.
    pub fn from_view(
        view: &SequenceView<'_>,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Result<Self, MtiError> {
        view.check_range(start, end)?;
        Self::from_endpoints(
            start,
            end,
            direction,
            view.row_values(start)?,
            view.row_values(end)?,
        )
    }

    /// True when `next` starts where `self` ends and shares its direction.
    pub fn abuts(&self, next: &Interval) -> bool {
        self.end == next.start && self.direction == next.direction
    }

    /// Returns the fusion of `self` with an abutting `next`.
    ///
    /// Start values are kept, end values come from `next`, and changes are
    /// recomputed from the two.
    pub fn fused_with(&self, next: &Interval) -> Interval {
        debug_assert!(self.abuts(next));
        let changes = next.end_values.minus(&self.start_values);
        let total_change = changes.sum();
        Interval {
            start: self.start,
            end: next.end,
            direction: self.direction,
            length: self.length + next.length,
            start_values: self.start_values.clone(),
            end_values: next.end_values.clone(),
            changes,
            total_change,
        }
    }

    /// Net change of the named channel, if it was analysed.
    pub fn change_of(&self, schema: &ChannelSchema, channel: &str) -> Option<f64> {
        schema
            .index_of(channel)
            .and_then(|idx| self.changes.get(idx))
    }
}
