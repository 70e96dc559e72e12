// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mti_bench::trending_channels;
use mti_core::{ScanConfig, SequenceView};
use mti_scan::{IntervalScanner, analyze};

const N: usize = 100_000;

fn benchmark_scan(c: &mut Criterion) {
    let config = ScanConfig::default();
    let scanner = IntervalScanner::new(config).expect("scanner config should be valid");
    let mut group = c.benchmark_group("scan_synthetic");

    for d in [1usize, 5, 16] {
        let columns = trending_channels(N, d, 250, 0.04, 0x5eed_0000 + d as u64);
        let names = (0..d).map(|j| format!("c{j}")).collect::<Vec<_>>();
        let slices = columns.iter().map(Vec::as_slice).collect::<Vec<_>>();
        let view = SequenceView::from_columns(&names, &slices)
            .expect("benchmark view should be valid");

        group.bench_with_input(BenchmarkId::new("scan_n1e5", d), &view, |b, view| {
            b.iter(|| {
                let intervals = scanner
                    .scan(black_box(view))
                    .expect("scan should succeed");
                black_box(intervals);
            })
        });

        group.bench_with_input(BenchmarkId::new("analyze_n1e5", d), &view, |b, view| {
            b.iter(|| {
                let result = analyze(black_box(view), black_box(&config))
                    .expect("analysis should succeed");
                black_box(result);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_scan);
criterion_main!(benches);
