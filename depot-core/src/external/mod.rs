// ============================================================================
// depot-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Running the p4 Binary
//
// This module encapsulates the interaction with the external p4 command-line
// tool. Operations never spawn processes directly; they build an `Invocation`
// and hand it to a `CommandRunner`, which makes the process layer replaceable
// in tests.
//
// KEY COMPONENTS:
// - Invocation: tool + subcommand + command plan, renderable as a command line
// - CommandRunner: trait for executing an invocation
// - ProcessRunner: implementation backed by std::process
// - MockRunner: recording implementation for tests (feature "test-mocks")
//
// CONTRACT:
// - Success means the tool exited zero and wrote nothing to stderr; stdout is
//   returned unparsed.
// - Anything on stderr is a failure carrying that text, even with exit code
//   zero and non-empty stdout.
// - Stdin lines are best effort: how far delivery got is reported back in
//   `RawOutput::stdin` instead of being silently dropped.

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::options::CommandPlan;

// ---- Standard library imports ----
use std::path::PathBuf;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Recording runner used by tests to assert on issued invocations
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

/// std::process backed runner
pub mod process_runner;

// ============================================================================
// RE-EXPORTS
// ============================================================================

#[cfg(any(test, feature = "test-mocks"))]
pub use mocks::MockRunner;
pub use process_runner::{ProcessRunner, write_stdin_lines};

/// Name of the binary used when nothing else is configured.
pub const DEFAULT_P4_BINARY: &str = "p4";

// ============================================================================
// INVOCATION
// ============================================================================

/// One fully prepared call of the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Binary to execute (e.g. `p4` or an absolute path)
    pub program: String,
    /// p4 subcommand (`change`, `info`, `add`, ...)
    pub subcommand: String,
    /// Translated flags, positionals and stdin lines
    pub plan: CommandPlan,
    /// Working directory for the process; inherits the caller's when `None`
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: &str, subcommand: &str, plan: CommandPlan) -> Self {
        Self {
            program: program.to_string(),
            subcommand: subcommand.to_string(),
            plan,
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Renders `<tool> <subcommand> <flags...> <positionals...>` joined by
    /// single spaces. Used for logging and error messages; the process
    /// itself receives an argument vector.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(std::iter::once(self.subcommand.as_str()))
            .chain(self.plan.args())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// How the stdin lines of an invocation were delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinDelivery {
    /// The plan had no stdin lines; the child's stdin was closed.
    NotRequested,
    /// Every line was written and the stream closed.
    Delivered,
    /// The child closed its input early; `written` of `total` lines made it.
    ChannelClosed { written: usize, total: usize },
}

/// Unparsed output of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: String,
    pub stdin: StdinDelivery,
}

impl RawOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stdin: StdinDelivery::NotRequested,
        }
    }
}

// ============================================================================
// RUNNER TRAIT
// ============================================================================

/// Something that can execute an [`Invocation`].
///
/// Implementations must return `Err` when the tool cannot be started, exits
/// unsuccessfully, or writes anything to stderr.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RawOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> CoreResult<RawOutput> {
        (**self).run(invocation)
    }
}
