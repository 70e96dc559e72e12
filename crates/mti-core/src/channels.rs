// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::MtiError;
use std::collections::HashSet;

/// Ordered, duplicate-free set of channel names fixed for one analysis run.
///
/// Per-channel payloads ([`ChannelValues`]) are positional and aligned to
/// this schema, so the channel set stays statically known for the run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelSchema {
    names: Vec<String>,
}

impl ChannelSchema {
    pub fn new(names: Vec<String>) -> Result<Self, MtiError> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(MtiError::invalid_input("channel names must be non-empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(MtiError::invalid_input(format!(
                    "duplicate channel name '{name}'"
                )));
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One value per channel, positionally aligned to a [`ChannelSchema`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelValues(Vec<f64>);

impl ChannelValues {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Channel-wise `self - base`.
    pub fn minus(&self, base: &ChannelValues) -> ChannelValues {
        debug_assert_eq!(self.len(), base.len());
        ChannelValues(
            self.0
                .iter()
                .zip(base.0.iter())
                .map(|(end, start)| end - start)
                .collect(),
        )
    }

    /// Left-to-right sum over channels in schema order.
    ///
    /// An empty set sums to `+0.0`.
    pub fn sum(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, value| acc + value)
    }

    /// Pairs each value with its channel name.
    pub fn named<'s>(
        &'s self,
        schema: &'s ChannelSchema,
    ) -> impl Iterator<Item = (&'s str, f64)> + 's {
        schema.iter().zip(self.iter())
    }
}

impl From<Vec<f64>> for ChannelValues {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelSchema, ChannelValues};

    fn schema(names: &[&str]) -> ChannelSchema {
        ChannelSchema::new(names.iter().map(|name| name.to_string()).collect())
            .expect("schema should be valid")
    }

    #[test]
    fn schema_rejects_duplicates_and_empty_names() {
        let dup = ChannelSchema::new(vec!["a".to_string(), "a".to_string()])
            .expect_err("duplicate must fail");
        assert!(dup.to_string().contains("duplicate channel name 'a'"));

        let empty = ChannelSchema::new(vec![String::new()]).expect_err("empty must fail");
        assert!(empty.to_string().contains("non-empty"));
    }

    #[test]
    fn schema_lookup_by_name_and_index() {
        let s = schema(&["deltaX", "gamma", "omega"]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.index_of("gamma"), Some(1));
        assert_eq!(s.index_of("flux"), None);
        assert_eq!(s.name(2), Some("omega"));
        assert_eq!(s.name(3), None);
    }

    #[test]
    fn empty_schema_is_valid() {
        let s = ChannelSchema::new(vec![]).expect("empty schema is degenerate but valid");
        assert!(s.is_empty());
    }

    #[test]
    fn values_minus_and_sum() {
        let start = ChannelValues::new(vec![1.0, 10.0]);
        let end = ChannelValues::new(vec![3.0, 7.0]);
        let changes = end.minus(&start);
        assert_eq!(changes.as_slice(), &[2.0, -3.0]);
        assert_eq!(changes.sum(), -1.0);
        let empty = ChannelValues::default().sum();
        assert_eq!(empty, 0.0);
        assert!(empty.is_sign_positive());
    }

    #[test]
    fn named_pairs_follow_schema_order() {
        let s = schema(&["a", "b"]);
        let values = ChannelValues::new(vec![0.5, 1.5]);
        let pairs = values.named(&s).collect::<Vec<_>>();
        assert_eq!(pairs, vec![("a", 0.5), ("b", 1.5)]);
    }
}
