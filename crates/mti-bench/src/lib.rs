// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Deterministic synthetic inputs shared by the scanner benchmarks.

use mti_core::{ChannelValues, Direction, Interval, MtiError};

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

fn unit_noise(state: &mut u64) -> f64 {
    ((lcg_next(state) >> 11) as f64 / (1u64 << 53) as f64) - 0.5
}

/// `d` channels sharing a piecewise-linear trend whose direction flips every
/// `run` rows, plus per-channel noise of amplitude `noise`.
pub fn trending_channels(n: usize, d: usize, run: usize, noise: f64, seed: u64) -> Vec<Vec<f64>> {
    let run = run.max(1);
    let mut state = seed;
    (0..d)
        .map(|j| {
            let scale = 1.0 + j as f64 * 0.5;
            let mut level = 100.0 * scale;
            (0..n)
                .map(|t| {
                    let rising = (t / run) % 2 == 0;
                    level += if rising { scale } else { -scale };
                    level + unit_noise(&mut state) * noise
                })
                .collect()
        })
        .collect()
}

/// `count` unit-channel intervals laid end to end, alternating direction
/// every `same_direction_run` pieces so the merger has runs to fuse.
pub fn abutting_fragments(
    count: usize,
    piece_len: usize,
    same_direction_run: usize,
) -> Result<Vec<Interval>, MtiError> {
    let piece_len = piece_len.max(1);
    let same_direction_run = same_direction_run.max(1);
    let mut level = 0.0;
    (0..count)
        .map(|idx| {
            let direction = if (idx / same_direction_run) % 2 == 0 {
                Direction::Increasing
            } else {
                Direction::Decreasing
            };
            let start = idx * piece_len;
            let from = level;
            level += match direction {
                Direction::Increasing => piece_len as f64,
                Direction::Decreasing => -(piece_len as f64),
            };
            Interval::from_endpoints(
                start,
                start + piece_len,
                direction,
                ChannelValues::new(vec![from]),
                ChannelValues::new(vec![level]),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{abutting_fragments, trending_channels};
    use mti_scan::merge;

    #[test]
    fn generators_are_deterministic() {
        let first = trending_channels(64, 3, 8, 0.1, 7);
        let second = trending_channels(64, 3, 8, 0.1, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|column| column.len() == 64));
    }

    #[test]
    fn fragments_fuse_into_direction_runs() {
        let fragments = abutting_fragments(12, 5, 3).expect("fragments");
        let merged = merge(fragments);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0].length, 15);
    }
}
