// depot-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests, and for downstream tests through the
// "test-mocks" feature.

use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::external::{CommandRunner, Invocation, RawOutput, StdinDelivery};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// What a mocked invocation returns.
#[derive(Debug, Clone)]
enum MockOutcome {
    Stdout(String),
    Stderr(String),
    StartError(io::ErrorKind),
}

/// Represents an expected p4 subcommand call and its mock result.
#[derive(Debug, Clone)]
pub struct MockExpectation {
    pub subcommand: String,
    outcome: MockOutcome,
}

/// Recording [`CommandRunner`] that answers from a queue of expectations.
///
/// Clones share state, so a test can keep one handle while the client owns
/// another and inspect [`MockRunner::received_calls`] afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    expectations: Rc<RefCell<Vec<MockExpectation>>>,
    received_calls: Rc<RefCell<Vec<Invocation>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Default::default()
    }

    fn add_expectation(&self, subcommand: &str, outcome: MockOutcome) {
        self.expectations.borrow_mut().push(MockExpectation {
            subcommand: subcommand.to_string(),
            outcome,
        });
    }

    /// The next `subcommand` call succeeds with `stdout`.
    pub fn expect_stdout(&self, subcommand: &str, stdout: &str) {
        self.add_expectation(subcommand, MockOutcome::Stdout(stdout.to_string()));
    }

    /// The next `subcommand` call fails as if the tool wrote `stderr`.
    pub fn expect_stderr(&self, subcommand: &str, stderr: &str) {
        self.add_expectation(subcommand, MockOutcome::Stderr(stderr.to_string()));
    }

    /// The next `subcommand` call fails to launch.
    pub fn expect_start_error(&self, subcommand: &str, kind: io::ErrorKind) {
        self.add_expectation(subcommand, MockOutcome::StartError(kind));
    }

    pub fn received_calls(&self) -> Vec<Invocation> {
        self.received_calls.borrow().clone()
    }

    /// Expectations that were registered but never consumed.
    pub fn pending(&self) -> usize {
        self.expectations.borrow().len()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RawOutput> {
        self.received_calls.borrow_mut().push(invocation.clone());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations
            .iter()
            .position(|exp| exp.subcommand == invocation.subcommand);

        let Some(index) = found_index else {
            log::error!(
                "MockRunner: No expectation found for: {}",
                invocation.command_line()
            );
            panic!(
                "MockRunner: No expectation found for: {}",
                invocation.command_line()
            );
        };

        let expectation = expectations.remove(index);
        log::info!("MockRunner: Matched expectation for '{}'", expectation.subcommand);

        match expectation.outcome {
            MockOutcome::Stdout(stdout) => Ok(RawOutput {
                stdout,
                stdin: if invocation.plan.has_stdin() {
                    StdinDelivery::Delivered
                } else {
                    StdinDelivery::NotRequested
                },
            }),
            MockOutcome::Stderr(stderr) => Err(command_failed_error(
                &invocation.command_line(),
                None,
                stderr,
            )),
            MockOutcome::StartError(kind) => Err(command_start_error(
                &invocation.program,
                io::Error::from(kind),
            )),
        }
    }
}
