// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::monotonicity::MonotonicityChecker;
use mti_core::{
    Direction, Interval, MIN_INTERVAL_LEN, MtiError, ScanConfig, ScanStats, SequenceView,
};
use tracing::{debug, trace};

/// Raw intervals plus the counters gathered while producing them.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutcome {
    pub intervals: Vec<Interval>,
    pub stats: ScanStats,
}

/// Greedy forward scanner for jointly monotonic intervals.
///
/// At each cursor position the scanner extends an increasing candidate
/// until the first failing end index, falling back to decreasing only when
/// no increasing prefix was admissible. The first admissible run wins: this
/// is a tie-break policy, not an optimal interval packing.
///
/// Extension stops at the first failure and never resumes, so a range that
/// fails its net-trend test at some end index (for example a flat first
/// step) hides any longer admissible range from the same start.
#[derive(Clone, Debug)]
pub struct IntervalScanner {
    config: ScanConfig,
}

impl IntervalScanner {
    pub fn new(config: ScanConfig) -> Result<Self, MtiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans `view` and returns raw (unmerged) intervals in start order.
    pub fn scan(&self, view: &SequenceView<'_>) -> Result<Vec<Interval>, MtiError> {
        Ok(self.scan_with_stats(view)?.intervals)
    }

    pub fn scan_with_stats(&self, view: &SequenceView<'_>) -> Result<ScanOutcome, MtiError> {
        let checker = MonotonicityChecker::new(view, self.config.tolerance)?;
        let n = view.n();
        let mut intervals = vec![];
        let mut stats = ScanStats::default();

        if n < 2 {
            return Ok(ScanOutcome { intervals, stats });
        }

        let mut start = 0usize;
        while start < n - 1 {
            stats.cursor_positions += 1;

            let mut candidate = None;
            for direction in Direction::SCAN_ORDER {
                if let Some(end) = longest_admissible_end(&checker, start, direction, &mut stats) {
                    candidate = Some((end, direction));
                    break;
                }
            }

            match candidate {
                Some((end, direction)) if end - start >= MIN_INTERVAL_LEN => {
                    let interval = Interval::from_view(view, start, end, direction)?;
                    debug!(
                        start,
                        end,
                        direction = direction.as_str(),
                        total_change = interval.total_change,
                        "emitted raw interval"
                    );
                    intervals.push(interval);
                    start = end;
                }
                _ => {
                    trace!(start, "no admissible interval starts here");
                    start += 1;
                }
            }
        }

        stats.raw_intervals = intervals.len();
        Ok(ScanOutcome { intervals, stats })
    }
}

/// Last end index for which `[start, end]` passes the joint predicate,
/// extending one row at a time and stopping at the first failure.
///
/// Every accepted prefix has already cleared its earlier steps, so each
/// extension only checks the new step and the net trend to `end`; this is
/// equivalent to re-running the full predicate on every prefix.
fn longest_admissible_end(
    checker: &MonotonicityChecker<'_, '_>,
    start: usize,
    direction: Direction,
    stats: &mut ScanStats,
) -> Option<usize> {
    let n = checker.view().n();
    let mut best = None;
    for end in start + 1..n {
        stats.prefix_checks += 1;
        if checker.step_within_tolerance(end, direction)
            && checker.net_trend_holds(start, end, direction)
        {
            best = Some(end);
        } else {
            break;
        }
    }
    best
}

/// Convenience wrapper: validates `tolerance` and scans `view`.
pub fn scan(view: &SequenceView<'_>, tolerance: f64) -> Result<Vec<Interval>, MtiError> {
    IntervalScanner::new(ScanConfig::new(tolerance)?)?.scan(view)
}
