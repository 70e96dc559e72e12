// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use mti_core::MtiError;
use serde::Serialize;
use thiserror::Error;

/// Everything the `mti` binary can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Mti(#[from] MtiError),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("CSV line {line}: {message}")]
    Csv { line: usize, message: String },
    #[error("{0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn csv(line: usize, message: impl Into<String>) -> Self {
        Self::Csv {
            line,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mti(err) => err.code(),
            Self::InvalidInput(_) => "invalid_input",
            Self::Io { .. } => "io_error",
            Self::Json { .. } => "json_error",
            Self::Csv { .. } => "csv_error",
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorPayload {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// `{"error": {"code": .., "message": ..}}` written to stderr on failure.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

/// Prints the JSON error envelope for `err` on stderr.
pub fn emit_structured_error(err: &CliError) {
    match serde_json::to_string_pretty(&err.envelope()) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!(
            "{{\"error\":{{\"code\":\"{}\",\"message\":\"{}\"}}}}",
            err.code(),
            err
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use mti_core::MtiError;

    #[test]
    fn codes_follow_the_wrapped_error() {
        assert_eq!(
            CliError::from(MtiError::invalid_input("bad")).code(),
            "invalid_input"
        );
        assert_eq!(
            CliError::from(MtiError::numerical_issue("nan")).code(),
            "numerical_issue"
        );
        assert_eq!(CliError::csv(3, "ragged").code(), "csv_error");
        let io = CliError::io(
            "failed to read 'x.csv'",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(io.code(), "io_error");
        assert_eq!(io.to_string(), "failed to read 'x.csv': missing");
    }

    #[test]
    fn envelope_carries_code_and_message() {
        let err = CliError::csv(4, "row has 2 fields but header has 3");
        let json = serde_json::to_value(err.envelope()).expect("envelope should serialize");
        assert_eq!(json["error"]["code"], "csv_error");
        assert_eq!(
            json["error"]["message"],
            "CSV line 4: row has 2 fields but header has 3"
        );
    }
}
