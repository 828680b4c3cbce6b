//! Changelist operations built on `p4 change`.
//!
//! - create: `change -i` with `Change:new` and `Description:` on stdin
//! - edit:   `change -i` with `Change:<n>` and `Description:` on stdin
//! - delete: `change -d <n>`
//! - view:   `change -o <n>`, parsed into a [`ChangeRecord`]
//!
//! Edit, delete and view need a changelist number and fail with
//! [`CoreError::MissingParameter`] before anything is spawned when it is
//! absent. Changelist `0` (the default changelist) counts as absent.

use crate::client::P4Client;
use crate::error::{CoreError, CoreResult};
use crate::external::CommandRunner;
use crate::options::Request;
use crate::parse::{ChangeRecord, parse_change, parse_created_change};

/// Description used when a changelist is created without one.
pub const DEFAULT_DESCRIPTION: &str = "<saved by depot>";

const CHANGE: &str = "change";

/// Arguments for changelist operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeOptions {
    pub changelist: Option<u64>,
    pub description: Option<String>,
}

impl ChangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelist(mut self, changelist: u64) -> Self {
        self.changelist = Some(changelist);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, with an empty one counting as absent.
    fn given_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    fn require_changelist(&self) -> CoreResult<u64> {
        self.changelist
            .filter(|&n| n != 0)
            .ok_or(CoreError::MissingParameter("changelist"))
    }
}

/// Changelist operations of a [`P4Client`].
pub struct Changelists<'a, R: CommandRunner> {
    client: &'a P4Client<R>,
}

impl<'a, R: CommandRunner> Changelists<'a, R> {
    pub(crate) fn new(client: &'a P4Client<R>) -> Self {
        Self { client }
    }

    /// Creates a pending changelist and returns its number.
    pub fn create(&self, options: &ChangeOptions) -> CoreResult<u64> {
        let description = options.given_description().unwrap_or(DEFAULT_DESCRIPTION);
        let request = Request::new()
            .with("_change", "new")
            .with("description", description);

        let output = self.client.run(CHANGE, &request)?;
        let number = parse_created_change(&output.stdout)?;
        log::info!("Created changelist {}", number);
        Ok(number)
    }

    /// Replaces the description of a pending changelist.
    ///
    /// Without a description there is nothing to change and the call
    /// returns without running p4.
    pub fn edit(&self, options: &ChangeOptions) -> CoreResult<()> {
        let changelist = options.require_changelist()?;
        let Some(description) = options.given_description() else {
            log::debug!("No description for changelist {}; nothing to edit", changelist);
            return Ok(());
        };
        let request = Request::new()
            .with("_change", changelist.to_string())
            .with("description", description);

        self.client.run(CHANGE, &request)?;
        Ok(())
    }

    /// Deletes a pending changelist.
    pub fn delete(&self, options: &ChangeOptions) -> CoreResult<()> {
        let changelist = options.require_changelist()?;
        self.client
            .run(CHANGE, &Request::new().with("_delete", changelist))?;
        Ok(())
    }

    /// Reads a changelist spec.
    pub fn view(&self, options: &ChangeOptions) -> CoreResult<ChangeRecord> {
        let changelist = options.require_changelist()?;
        let output = self
            .client
            .run(CHANGE, &Request::new().with("_output", changelist))?;
        Ok(parse_change(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::external::{MockRunner, StdinDelivery};

    fn client(runner: &MockRunner) -> P4Client<MockRunner> {
        P4Client::with_runner(ClientConfig::default(), runner.clone()).unwrap()
    }

    #[test]
    fn test_create_sends_spec_on_stdin() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 1234 created.\n");
        let number = client(&runner)
            .changelist()
            .create(&ChangeOptions::new().description("tidy up"))
            .unwrap();
        assert_eq!(number, 1234);

        let calls = runner.received_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command_line(), "p4 change -i");
        assert_eq!(
            calls[0].plan.stdin_lines,
            vec!["Change:new", "Description:tidy up"]
        );
    }

    #[test]
    fn test_create_default_description() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 5 created.");
        client(&runner).changelist().create(&ChangeOptions::new()).unwrap();
        assert_eq!(
            runner.received_calls()[0].plan.stdin_lines[1],
            "Description:<saved by depot>"
        );
    }

    #[test]
    fn test_create_empty_description_uses_default() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 6 created.");
        client(&runner)
            .changelist()
            .create(&ChangeOptions::new().description(""))
            .unwrap();
        assert_eq!(
            runner.received_calls()[0].plan.stdin_lines,
            vec!["Change:new", "Description:<saved by depot>"]
        );
    }

    #[test]
    fn test_create_without_number_is_unknown_error() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change created.");
        let err = client(&runner)
            .changelist()
            .create(&ChangeOptions::new())
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownOutput(_)));
    }

    #[test]
    fn test_missing_changelist_spawns_nothing() {
        let runner = MockRunner::new();
        let client = client(&runner);
        let changes = client.changelist();
        let options = ChangeOptions::new().description("x");

        assert!(matches!(
            changes.edit(&options),
            Err(CoreError::MissingParameter("changelist"))
        ));
        assert!(matches!(
            changes.delete(&options),
            Err(CoreError::MissingParameter(_))
        ));
        assert!(matches!(
            changes.view(&options.clone().changelist(0)),
            Err(CoreError::MissingParameter(_))
        ));
        assert!(runner.received_calls().is_empty());
    }

    #[test]
    fn test_edit_without_description_is_noop() {
        let runner = MockRunner::new();
        client(&runner)
            .changelist()
            .edit(&ChangeOptions::new().changelist(42))
            .unwrap();
        assert!(runner.received_calls().is_empty());
    }

    #[test]
    fn test_edit_with_empty_description_is_noop() {
        let runner = MockRunner::new();
        client(&runner)
            .changelist()
            .edit(&ChangeOptions::new().changelist(4).description(""))
            .unwrap();
        assert!(runner.received_calls().is_empty());
    }

    #[test]
    fn test_edit_rewrites_description() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 42 updated.");
        client(&runner)
            .changelist()
            .edit(&ChangeOptions::new().changelist(42).description("better words"))
            .unwrap();

        let call = &runner.received_calls()[0];
        assert_eq!(call.plan.flags, vec!["-i"]);
        assert_eq!(
            call.plan.stdin_lines,
            vec!["Change:42", "Description:better words"]
        );
    }

    #[test]
    fn test_delete_and_view_flags() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 42 deleted.");
        runner.expect_stdout("change", "Change:\t42\n\nStatus:\tpending\n");
        let client = client(&runner);

        client
            .changelist()
            .delete(&ChangeOptions::new().changelist(42))
            .unwrap();
        let record = client
            .changelist()
            .view(&ChangeOptions::new().changelist(42))
            .unwrap();

        assert_eq!(record.status(), Some("pending"));
        assert!(record.files.is_empty());

        let calls = runner.received_calls();
        assert_eq!(calls[0].command_line(), "p4 change -d 42");
        assert_eq!(calls[1].command_line(), "p4 change -o 42");
        assert!(!calls[1].plan.has_stdin());
    }

    #[test]
    fn test_delete_huge_changelist_is_not_wrapped() {
        let runner = MockRunner::new();
        runner.expect_stderr("change", "Change 18446744073709551615 unknown.");
        let result = client(&runner)
            .changelist()
            .delete(&ChangeOptions::new().changelist(u64::MAX));
        assert!(result.is_err());
        assert_eq!(
            runner.received_calls()[0].command_line(),
            "p4 change -d 18446744073709551615"
        );
    }

    #[test]
    fn test_mock_reports_stdin_delivery() {
        let runner = MockRunner::new();
        runner.expect_stdout("change", "Change 1 created.");
        let client = client(&runner);
        let output = client
            .run("change", &Request::new().with("_change", "new"))
            .unwrap();
        assert_eq!(output.stdin, StdinDelivery::Delivered);
    }
}
