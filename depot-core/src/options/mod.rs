// ============================================================================
// depot-core/src/options/mod.rs
// ============================================================================
//
// OPTIONS: Request Values, Option Schema and Option Translation
//
// This module owns the caller-facing half of the translation layer. A caller
// describes what they want as a `Request` (option name -> value); the
// translator consults the `OptionSchema` and produces a `CommandPlan` of
// flags, positional file arguments, and stdin lines.
//
// KEY COMPONENTS:
// - OptionValue / Request: per-call input
// - OptionSchema / OptionDescriptor: static option metadata
// - translate / CommandPlan: the translation itself

pub mod schema;
pub mod translator;
pub mod value;

pub use schema::{OptionCategory, OptionDescriptor, OptionSchema, ValueType};
pub use translator::{CommandPlan, STDIN_FLAG, translate};
pub use value::{OptionValue, Request};
