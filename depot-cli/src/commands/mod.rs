//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `change create|edit|delete|view`
pub mod change;

/// `add`, `delete`, `edit` and `revert` pass-through commands
pub mod files;

/// `info`
pub mod info;
