// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use libfuzzer_sys::fuzz_target;
use mti_core::{MIN_INTERVAL_LEN, ScanConfig, SequenceView};
use mti_report::{downsample_for_display, records};
use mti_scan::{analyze, is_monotonic, merge};

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);
    let d = common::bounded(cursor.next_u8(), 0, 4);
    let n = common::bounded(cursor.next_u8(), 0, 96);
    let tolerance = f64::from(cursor.next_u8()) / 64.0;
    let quantum = 0.01 + f64::from(cursor.next_u8() % 32) / 16.0;

    let columns = (0..d)
        .map(|_| {
            let mut level = 0.0;
            (0..n)
                .map(|_| {
                    level += f64::from(cursor.next_i8()) * quantum;
                    level
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let names = (0..d).map(|j| format!("c{j}")).collect::<Vec<_>>();
    let slices = columns.iter().map(Vec::as_slice).collect::<Vec<_>>();
    let Ok(view) = SequenceView::from_columns(&names, &slices) else {
        return;
    };
    let config = ScanConfig::new(tolerance).expect("generated tolerance must be valid");

    let result = analyze(&view, &config).expect("analysis of a valid view must succeed");
    assert_eq!(result.total_violations(), 0);
    for interval in &result.merged_intervals {
        assert!(interval.length >= MIN_INTERVAL_LEN);
        assert!(interval.end < view.n());
        assert!(
            is_monotonic(&view, interval.start, interval.end, interval.direction, tolerance)
                .expect("range from the scanner must be in bounds")
        );
    }
    for pair in result.raw_intervals.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    assert_eq!(merge(result.merged_intervals.clone()), result.merged_intervals);
    assert_eq!(records(&result).len(), result.merged_intervals.len());

    let max_points = common::bounded(cursor.next_u8(), 1, 64);
    let plan = downsample_for_display(view.n(), &result.merged_intervals, max_points)
        .expect("non-zero point budget must succeed");
    for shown in &plan.intervals {
        assert!(shown.start < shown.end && shown.end < plan.display_len);
    }
});
