// ============================================================================
// depot-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Client Configuration and Environment Overrides
//
// A `ClientConfig` says which p4 binary to run, where to run it, and which
// option schema to translate requests with. Defaults work against a `p4`
// found on PATH with the built-in schema.
//
// ENVIRONMENT:
// - DEPOT_P4_BIN: binary to execute (default "p4")
// - DEPOT_SCHEMA: path of a JSON option schema replacing the built-in one
// - DEPOT_CWD:    working directory for every invocation

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::external::DEFAULT_P4_BINARY;
use crate::options::OptionSchema;

// ---- Standard library imports ----
use std::path::PathBuf;

/// Environment variable naming the p4 binary.
pub const ENV_P4_BIN: &str = "DEPOT_P4_BIN";
/// Environment variable naming an option schema file.
pub const ENV_SCHEMA: &str = "DEPOT_SCHEMA";
/// Environment variable naming the working directory.
pub const ENV_CWD: &str = "DEPOT_CWD";

/// Configuration for a [`crate::P4Client`].
///
/// # Examples
///
/// ```rust
/// use depot_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .p4_binary("/opt/perforce/bin/p4")
///     .cwd("/home/alice/ws")
///     .build();
/// assert_eq!(config.p4_binary, "/opt/perforce/bin/p4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Binary to execute for every invocation
    pub p4_binary: String,

    /// Working directory; the caller's own when `None`
    pub cwd: Option<PathBuf>,

    /// Alternate option schema file; the built-in schema when `None`
    pub schema_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            p4_binary: DEFAULT_P4_BINARY.to_string(),
            cwd: None,
            schema_path: None,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Defaults overridden by `DEPOT_P4_BIN`, `DEPOT_SCHEMA` and `DEPOT_CWD`.
    pub fn from_env() -> Self {
        Self {
            p4_binary: get_env_string(ENV_P4_BIN, DEFAULT_P4_BINARY.to_string()),
            cwd: get_env_path(ENV_CWD),
            schema_path: get_env_path(ENV_SCHEMA),
        }
    }

    /// Loads the configured schema, or returns the built-in one.
    pub fn load_schema(&self) -> CoreResult<OptionSchema> {
        match &self.schema_path {
            Some(path) => OptionSchema::from_path(path),
            None => Ok(OptionSchema::builtin().clone()),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn p4_binary(mut self, binary: impl Into<String>) -> Self {
        self.config.p4_binary = binary.into();
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.config.cwd = Some(cwd.into());
        self
    }

    pub fn schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.schema_path = Some(path.into());
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Get a string value from an environment variable or use the default
fn get_env_string(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default,
    }
}

/// Get a path from an environment variable, ignoring empty values
fn get_env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}
