//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed script lines)
//! - 3: Data error (unknown vertex, rejected edge weight)
//!
//! Most engine conditions are values rather than errors: duplicate inserts
//! are no-ops, unknown labels are `None`, unreachable targets have infinite
//! distance. `GraphError` covers the precondition violations that are
//! diagnosed at edge creation plus the I/O and parsing failures of the
//! configuration and CLI layers.

mod macros;

use thiserror::Error;

/// Exit codes per graphkit CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, rejected weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphkit operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("invalid edge weight {weight} for {edge}: weights must be finite")]
    InvalidWeight { edge: String, weight: f64 },

    #[error("negative edge weight {weight} for {edge} (set weights.allow_negative to permit)")]
    NegativeWeight { edge: String, weight: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Display) -> Self {
        GraphError::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            GraphError::VertexNotFound { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::NegativeWeight { .. } => ExitCode::Data,

            // Generic failures
            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::TomlSerialize(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) | GraphError::TomlSerialize(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphError::vertex_not_found("A").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::NegativeWeight {
                edge: "edge-A-B".into(),
                weight: -1.0
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(GraphError::Other("x".into()).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Usage), 2);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphError::vertex_not_found("Z");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "vertex_not_found");
        assert_eq!(json["error"]["message"], "vertex not found: Z");
    }

    #[test]
    fn test_invalid_value_message() {
        let err = GraphError::invalid_value("weight", "abc");
        assert_eq!(err.to_string(), "invalid weight: abc");
    }
}
