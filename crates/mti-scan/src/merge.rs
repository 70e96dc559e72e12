// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::Interval;
use tracing::debug;

/// Fuses abutting same-direction intervals in a single left-to-right pass.
///
/// Two neighbours fuse when the first's `end` equals the second's `start`
/// and both share a direction. The output never contains such a pair, so
/// merging an already merged list returns it unchanged.
pub fn merge<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    merge_counting(intervals).0
}

/// [`merge`] that also reports how many pairs were fused.
pub fn merge_counting<I>(intervals: I) -> (Vec<Interval>, usize)
where
    I: IntoIterator<Item = Interval>,
{
    let mut iter = intervals.into_iter();
    let Some(mut current) = iter.next() else {
        return (vec![], 0);
    };

    let mut merged = vec![];
    let mut fused_pairs = 0usize;
    for next in iter {
        if current.abuts(&next) {
            debug!(
                start = current.start,
                boundary = next.start,
                end = next.end,
                direction = current.direction.as_str(),
                "fused abutting intervals"
            );
            current = current.fused_with(&next);
            fused_pairs += 1;
        } else {
            merged.push(std::mem::replace(&mut current, next));
        }
    }
    merged.push(current);

    (merged, fused_pairs)
}
