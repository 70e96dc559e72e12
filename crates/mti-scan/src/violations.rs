// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::monotonicity::step_violates;
use mti_core::{ChannelSchema, Direction, Interval, MtiError, SequenceView, validate_tolerance};

/// Per-channel count of steps whose counter-movement exceeds tolerance,
/// aligned to the view's [`ChannelSchema`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViolationCounts(Vec<usize>);

impl ViolationCounts {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn get(&self, idx: usize) -> Option<usize> {
        self.0.get(idx).copied()
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    pub fn named<'s>(
        &'s self,
        schema: &'s ChannelSchema,
    ) -> impl Iterator<Item = (&'s str, usize)> + 's {
        schema.iter().zip(self.0.iter().copied())
    }
}

/// Counts tolerance violations for each channel over the inclusive range
/// `[start, end]`, using the same step rule as the monotonicity predicate.
pub fn count_violations(
    view: &SequenceView<'_>,
    start: usize,
    end: usize,
    direction: Direction,
    tolerance: f64,
) -> Result<ViolationCounts, MtiError> {
    validate_tolerance(tolerance)?;
    view.check_range(start, end)?;
    Ok(ViolationCounts(
        view.iter_channels()
            .map(|column| {
                column[start..=end]
                    .windows(2)
                    .filter(|pair| step_violates(direction, pair[0], pair[1], tolerance))
                    .count()
            })
            .collect(),
    ))
}

/// [`count_violations`] over an interval's own range and direction.
pub fn count_interval_violations(
    view: &SequenceView<'_>,
    interval: &Interval,
    tolerance: f64,
) -> Result<ViolationCounts, MtiError> {
    count_violations(view, interval.start, interval.end, interval.direction, tolerance)
}

#[cfg(test)]
mod tests {
    use super::count_violations;
    use mti_core::{Direction, SequenceView};

    #[test]
    fn counts_each_offending_step_per_channel() {
        let a = [1.0, 0.0, 1.0, 0.0, 1.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        let view = SequenceView::from_columns(&["a", "b"], &[&a, &b]).expect("view");
        let counts = count_violations(&view, 0, 4, Direction::Increasing, 0.5).expect("counts");
        assert_eq!(counts.as_slice(), &[2, 0]);
        assert_eq!(counts.total(), 2);
        assert!(!counts.is_clean());

        let down = count_violations(&view, 0, 4, Direction::Decreasing, 0.5).expect("counts");
        assert_eq!(down.as_slice(), &[2, 4]);
    }

    #[test]
    fn single_row_range_has_no_steps() {
        let a = [1.0, 0.0];
        let view = SequenceView::from_columns(&["a"], &[&a]).expect("view");
        let counts = count_violations(&view, 1, 1, Direction::Increasing, 0.0).expect("counts");
        assert!(counts.is_clean());
    }

    #[test]
    fn rejects_bad_range_and_tolerance() {
        let a = [1.0, 2.0];
        let view = SequenceView::from_columns(&["a"], &[&a]).expect("view");
        assert!(count_violations(&view, 0, 2, Direction::Increasing, 0.0).is_err());
        assert!(count_violations(&view, 0, 1, Direction::Increasing, -1.0).is_err());
    }

    #[test]
    fn named_counts_follow_schema_order() {
        let a = [3.0, 2.0];
        let b = [3.0, 4.0];
        let view = SequenceView::from_columns(&["a", "b"], &[&a, &b]).expect("view");
        let counts = count_violations(&view, 0, 1, Direction::Decreasing, 0.0).expect("counts");
        let named = counts.named(view.channels()).collect::<Vec<_>>();
        assert_eq!(named, vec![("a", 0), ("b", 1)]);
    }
}
