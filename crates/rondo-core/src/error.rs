//! Error types and exit codes for rondo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (unmet preconditions, stuck tours, IO)
//! - 2: Usage error (bad flags/args, out-of-range node selections)
//! - 3: Data error (missing or malformed graph file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the rondo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[derive(Error, Debug)]
pub enum RondoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("malformed graph document at token {position}: {reason}")]
    MalformedDocument { position: usize, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("graph is not connected (required by {operation})")]
    NotConnected { operation: &'static str },

    #[error("graph is not metric (required by {operation})")]
    NotMetric { operation: &'static str },

    #[error("tour stuck at node {node}: no edge to an unvisited node")]
    TourStuck { node: usize },

    #[error("tour cannot close: no edge from node {node} back to node 0")]
    TourNotClosed { node: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RondoError {
    /// Map this error to the process exit code it should produce.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RondoError::UnknownFormat(_)
            | RondoError::UsageError(_)
            | RondoError::NodeOutOfRange { .. } => ExitCode::Usage,

            // Data errors
            RondoError::GraphNotFound { .. }
            | RondoError::MalformedDocument { .. }
            | RondoError::InvalidConfig { .. }
            | RondoError::ConfigNotFound { .. } => ExitCode::Data,

            // Generic failures
            RondoError::NotConnected { .. }
            | RondoError::NotMetric { .. }
            | RondoError::TourStuck { .. }
            | RondoError::TourNotClosed { .. }
            | RondoError::Io(_)
            | RondoError::Json(_)
            | RondoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RondoError::UnknownFormat(_) => "unknown_format",
            RondoError::UsageError(_) => "usage_error",
            RondoError::NodeOutOfRange { .. } => "node_out_of_range",
            RondoError::GraphNotFound { .. } => "graph_not_found",
            RondoError::MalformedDocument { .. } => "malformed_document",
            RondoError::InvalidConfig { .. } => "invalid_config",
            RondoError::ConfigNotFound { .. } => "config_not_found",
            RondoError::NotConnected { .. } => "not_connected",
            RondoError::NotMetric { .. } => "not_metric",
            RondoError::TourStuck { .. } => "tour_stuck",
            RondoError::TourNotClosed { .. } => "tour_not_closed",
            RondoError::Io(_) => "io_error",
            RondoError::Json(_) => "json_error",
            RondoError::Other(_) => "other",
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

pub type Result<T> = std::result::Result<T, RondoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
        assert_eq!(i32::from(ExitCode::Usage), 2);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_usage_errors_exit_code_2() {
        assert_eq!(
            RondoError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RondoError::NodeOutOfRange {
                node: 9,
                node_count: 4
            }
            .exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_data_errors_exit_code_3() {
        assert_eq!(
            RondoError::GraphNotFound {
                path: PathBuf::from("missing.txt")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RondoError::MalformedDocument {
                position: 3,
                reason: "expected edge weight".into()
            }
            .exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn test_precondition_errors_exit_code_1() {
        assert_eq!(
            RondoError::NotConnected {
                operation: "minimum spanning tree"
            }
            .exit_code(),
            ExitCode::Failure
        );
        assert_eq!(RondoError::TourStuck { node: 2 }.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_shape() {
        let err = RondoError::NotConnected {
            operation: "metric closure",
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 1);
        assert_eq!(json["error"]["type"], "not_connected");
        assert!(json["error"]["message"].as_str().unwrap().contains("not connected"));
    }

    #[test]
    fn test_error_messages() {
        let err = RondoError::NodeOutOfRange {
            node: 7,
            node_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "node 7 is out of range for a graph of 4 nodes"
        );

        let err = RondoError::TourStuck { node: 3 };
        assert_eq!(
            err.to_string(),
            "tour stuck at node 3: no edge to an unvisited node"
        );
    }
}
