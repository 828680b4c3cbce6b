// ============================================================================
// depot-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for depot-core
//
// Every failure an operation can surface to its caller is one variant of
// `CoreError`. Nothing is retried and nothing is fatal to the process; each
// operation is independently recoverable by the caller.
//
// KEY COMPONENTS:
// - CoreError: the error enum
// - CoreResult: result alias used throughout the crate
// - Helper constructors for the process-layer variants

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

/// Errors returned by depot-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required argument (usually a changelist number) was not supplied.
    /// Raised before any process is spawned.
    #[error("Missing parameter/argument: {0}")]
    MissingParameter(&'static str),

    /// The external tool could not be launched at all.
    #[error("Failed to start '{tool}': {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// Waiting on a spawned tool or collecting its output failed.
    #[error("Failed to wait for '{tool}': {source}")]
    CommandWait {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but wrote to stderr or exited unsuccessfully.
    /// `stderr` carries the tool's own text verbatim.
    #[error("Command '{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The tool succeeded but its output did not contain what the
    /// operation needed (e.g. no changelist number after `change -i`).
    #[error("Unknown error: {0}")]
    UnknownOutput(String),

    /// The option schema document could not be read or parsed.
    #[error("Invalid option schema: {0}")]
    Schema(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for depot-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for `tool`.
pub fn command_start_error(tool: &str, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        tool: tool.to_string(),
        source,
    }
}

/// Builds a `CommandWait` error for `tool`.
pub fn command_wait_error(tool: &str, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        tool: tool.to_string(),
        source,
    }
}

/// Builds a `CommandFailed` error from the rendered command line and the
/// process outcome.
pub fn command_failed_error(
    command: &str,
    status: Option<ExitStatus>,
    stderr: String,
) -> CoreError {
    let status = match status.and_then(|s| s.code()) {
        Some(code) => format!("exit code {}", code),
        None if status.is_some() => "terminated by signal".to_string(),
        None => "unknown status".to_string(),
    };
    CoreError::CommandFailed {
        command: command.to_string(),
        status,
        stderr,
    }
}

impl CoreError {
    /// Returns the stderr text carried by a `CommandFailed` error.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            CoreError::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
