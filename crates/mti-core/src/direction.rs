// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::MtiError;
use std::fmt;
use std::str::FromStr;

/// Trend direction an interval is classified under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Order in which the scanner attempts directions at a fixed start.
    pub const SCAN_ORDER: [Direction; 2] = [Direction::Increasing, Direction::Decreasing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }

    /// Movement of one step measured against this direction.
    ///
    /// Positive values move against the trend: a drop for `Increasing`,
    /// a rise for `Decreasing`.
    pub fn counter_movement(self, previous: f64, current: f64) -> f64 {
        match self {
            Self::Increasing => previous - current,
            Self::Decreasing => current - previous,
        }
    }

    /// Strict net-trend test between the first and last value of a range.
    pub fn net_trend_holds(self, first: f64, last: f64) -> bool {
        match self {
            Self::Increasing => last > first,
            Self::Decreasing => last < first,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MtiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            _ => Err(MtiError::invalid_input(format!(
                "invalid direction '{raw}'; expected one of: increasing, decreasing"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn parse_accepts_case_insensitive_names() {
        assert_eq!("increasing".parse::<Direction>(), Ok(Direction::Increasing));
        assert_eq!(" DECREASING ".parse::<Direction>(), Ok(Direction::Decreasing));
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        let err = "sideways"
            .parse::<Direction>()
            .expect_err("unknown direction must fail");
        assert!(err.to_string().contains("invalid direction 'sideways'"));
    }

    #[test]
    fn counter_movement_signs_follow_direction() {
        assert_eq!(Direction::Increasing.counter_movement(3.0, 2.0), 1.0);
        assert_eq!(Direction::Increasing.counter_movement(2.0, 3.0), -1.0);
        assert_eq!(Direction::Decreasing.counter_movement(2.0, 3.0), 1.0);
        assert_eq!(Direction::Decreasing.counter_movement(3.0, 2.0), -1.0);
    }

    #[test]
    fn net_trend_is_strict() {
        assert!(Direction::Increasing.net_trend_holds(1.0, 1.5));
        assert!(!Direction::Increasing.net_trend_holds(1.0, 1.0));
        assert!(Direction::Decreasing.net_trend_holds(1.0, 0.5));
        assert!(!Direction::Decreasing.net_trend_holds(1.0, 1.0));
    }

    #[test]
    fn scan_order_tries_increasing_first() {
        assert_eq!(
            Direction::SCAN_ORDER,
            [Direction::Increasing, Direction::Decreasing]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn direction_serializes_lowercase() {
        let encoded = serde_json::to_string(&Direction::Decreasing).expect("serialize direction");
        assert_eq!(encoded, "\"decreasing\"");
    }
}
