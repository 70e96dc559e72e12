// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Detection of intervals where every tracked channel of a multivariate
//! sequence moves in the same direction within a per-step tolerance.
//!
//! The pipeline is [`IntervalScanner`] (driving [`MonotonicityChecker`]) →
//! [`merge`] → [`count_violations`] and [`summarize`]; [`analyze`] runs all
//! stages over one [`SequenceView`](mti_core::SequenceView).

pub mod merge;
pub mod monotonicity;
pub mod pipeline;
pub mod scanner;
pub mod statistics;
pub mod violations;

pub use merge::{merge, merge_counting};
pub use monotonicity::{MonotonicityChecker, channel_is_monotonic, is_monotonic, step_violates};
pub use pipeline::{AnalysisResult, analyze, analyze_table};
pub use scanner::{IntervalScanner, ScanOutcome, scan};
pub use statistics::{DirectionSummary, IntervalStatistics, intervals_of, summarize};
pub use violations::{ViolationCounts, count_interval_violations, count_violations};
