// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::{Direction, MtiError, SequenceView, validate_tolerance};

/// True when a single step `previous -> current` moves against `direction`
/// by more than `tolerance`.
#[inline]
pub fn step_violates(direction: Direction, previous: f64, current: f64, tolerance: f64) -> bool {
    direction.counter_movement(previous, current) > tolerance
}

/// Directional test for one channel over a full inclusive slice.
///
/// Requires a strict net move in `direction` from first to last value and
/// no step whose counter-movement exceeds `tolerance`.
pub fn channel_is_monotonic(values: &[f64], direction: Direction, tolerance: f64) -> bool {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return false;
    };
    if values.len() < 2 || !direction.net_trend_holds(first, last) {
        return false;
    }
    values
        .windows(2)
        .all(|pair| !step_violates(direction, pair[0], pair[1], tolerance))
}

/// Joint monotonicity predicate over every analysed channel of a view.
///
/// Pure: holds no state beyond the borrowed view and the tolerance.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicityChecker<'v, 'a> {
    view: &'v SequenceView<'a>,
    tolerance: f64,
}

impl<'v, 'a> MonotonicityChecker<'v, 'a> {
    pub fn new(view: &'v SequenceView<'a>, tolerance: f64) -> Result<Self, MtiError> {
        validate_tolerance(tolerance)?;
        Ok(Self { view, tolerance })
    }

    pub fn view(&self) -> &'v SequenceView<'a> {
        self.view
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Full check of the inclusive range `[start, end]`.
    ///
    /// Ranges with fewer than two rows are never monotonic. A view with no
    /// analysed channels imposes no constraint, so any range of two or more
    /// rows passes.
    pub fn is_monotonic(
        &self,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Result<bool, MtiError> {
        if end <= start {
            return Ok(false);
        }
        self.view.check_range(start, end)?;
        Ok(self
            .view
            .iter_channels()
            .all(|column| channel_is_monotonic(&column[start..=end], direction, self.tolerance)))
    }

    /// True when no channel's step `row - 1 -> row` exceeds tolerance.
    ///
    /// `row` must be in `1..n`.
    pub(crate) fn step_within_tolerance(&self, row: usize, direction: Direction) -> bool {
        self.view
            .iter_channels()
            .all(|column| !step_violates(direction, column[row - 1], column[row], self.tolerance))
    }

    /// True when every channel moves strictly in `direction` from `start` to `end`.
    ///
    /// Both indices must be below `n`.
    pub(crate) fn net_trend_holds(&self, start: usize, end: usize, direction: Direction) -> bool {
        self.view
            .iter_channels()
            .all(|column| direction.net_trend_holds(column[start], column[end]))
    }
}

/// Free-function form of [`MonotonicityChecker::is_monotonic`].
pub fn is_monotonic(
    view: &SequenceView<'_>,
    start: usize,
    end: usize,
    direction: Direction,
    tolerance: f64,
) -> Result<bool, MtiError> {
    MonotonicityChecker::new(view, tolerance)?.is_monotonic(start, end, direction)
}
