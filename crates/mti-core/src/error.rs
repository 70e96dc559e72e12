// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by monotonic interval analysis.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MtiError {
    /// Caller supplied an argument outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested combination is recognised but not implemented.
    #[error("not supported: {0}")]
    NotSupported(String),
    /// A numeric invariant broke while computing a result.
    #[error("numerical issue: {0}")]
    NumericalIssue(String),
}

impl MtiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    pub fn numerical_issue(msg: impl Into<String>) -> Self {
        Self::NumericalIssue(msg.into())
    }

    /// Stable machine-readable code for error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotSupported(_) => "not_supported",
            Self::NumericalIssue(_) => "numerical_issue",
        }
    }
}
