//! Core library for driving the Perforce `p4` command-line tool with
//! structured requests and structured results.
//!
//! A caller describes an operation as a [`Request`] of named options. The
//! request is translated against an [`options::OptionSchema`] into flags,
//! positional file arguments and stdin lines, run as one `p4` process, and
//! the text report is parsed back into a record where the command has one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use depot_core::{ChangeOptions, P4Client, Request};
//!
//! let client = P4Client::from_env().unwrap();
//!
//! let number = client
//!     .changelist()
//!     .create(&ChangeOptions::new().description("Refactor the parser"))
//!     .unwrap();
//!
//! client
//!     .edit(&Request::new()
//!         .with("changelist", number)
//!         .with("files", vec!["//depot/main/parser.c"]))
//!     .unwrap();
//!
//! let change = client
//!     .changelist()
//!     .view(&ChangeOptions::new().changelist(number))
//!     .unwrap();
//! for file in &change.files {
//!     println!("{} {:?}", file.file, file.action);
//! }
//! ```

pub mod changelist;
pub mod client;
pub mod config;
pub mod error;
pub mod external;
pub mod options;
pub mod parse;

// Re-exports for public API
pub use changelist::{ChangeOptions, Changelists, DEFAULT_DESCRIPTION};
pub use client::{FileCommand, P4Client};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{CommandRunner, Invocation, ProcessRunner, RawOutput, StdinDelivery};
pub use options::{CommandPlan, OptionValue, Request};
pub use parse::{ChangeRecord, FileAction, Record};
