// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Presentation helpers for monotonic interval results: flat per-interval
//! records, the CSV summary table, a plain-text report and the index remap
//! used when a long sequence is thinned for display.

pub mod display;
pub mod records;
pub mod summary;

pub use display::{DEFAULT_DISPLAY_POINTS, DisplayInterval, DisplayPlan, downsample_for_display};
pub use records::{ChannelRecord, IntervalRecord, records, render_csv};
pub use summary::render_text_summary;
