// ============================================================================
// depot-core/src/client.rs
// ============================================================================
//
// CLIENT: Entry Point for p4 Operations
//
// `P4Client` ties the pieces together: it translates a `Request` with its
// option schema, wraps the plan in an `Invocation`, runs it through its
// `CommandRunner`, and (for commands with structured output) parses the
// result.
//
// Every call spawns exactly one process and shares no mutable state with
// other calls. There is no timeout: a hung p4 hangs the calling operation.

// ---- Internal crate imports ----
use crate::changelist::Changelists;
use crate::config::ClientConfig;
use crate::error::CoreResult;
use crate::external::{CommandRunner, Invocation, ProcessRunner, RawOutput};
use crate::options::{OptionSchema, Request, translate};
use crate::parse::{Record, parse_info};

// ---- Standard library imports ----
use std::fmt;

/// File commands that pass a request straight through to p4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCommand {
    /// `p4 add`: open new files for add
    Add,
    /// `p4 delete`: open files for delete
    Delete,
    /// `p4 edit`: open files for edit
    Edit,
    /// `p4 revert`: discard changes to open files
    Revert,
}

impl FileCommand {
    pub const ALL: [FileCommand; 4] = [
        FileCommand::Add,
        FileCommand::Delete,
        FileCommand::Edit,
        FileCommand::Revert,
    ];

    pub fn subcommand(self) -> &'static str {
        match self {
            FileCommand::Add => "add",
            FileCommand::Delete => "delete",
            FileCommand::Edit => "edit",
            FileCommand::Revert => "revert",
        }
    }
}

impl fmt::Display for FileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

/// Structured client for the p4 command-line tool.
///
/// # Examples
///
/// ```rust,no_run
/// use depot_core::{P4Client, Request};
///
/// let client = P4Client::from_env().unwrap();
/// let info = client.info().unwrap();
/// println!("client root: {:?}", info.get("clientRoot"));
///
/// let opened = client
///     .edit(&Request::new().with("files", vec!["//depot/main/a.c"]))
///     .unwrap();
/// println!("{}", opened);
/// ```
#[derive(Debug, Clone)]
pub struct P4Client<R: CommandRunner = ProcessRunner> {
    config: ClientConfig,
    schema: OptionSchema,
    runner: R,
}

impl P4Client<ProcessRunner> {
    /// Client configured from `DEPOT_*` environment variables.
    pub fn from_env() -> CoreResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn new(config: ClientConfig) -> CoreResult<Self> {
        Self::with_runner(config, ProcessRunner::new())
    }
}

impl<R: CommandRunner> P4Client<R> {
    /// Client using `runner` to execute invocations; loads the schema named
    /// by `config`.
    pub fn with_runner(config: ClientConfig, runner: R) -> CoreResult<Self> {
        let schema = config.load_schema()?;
        Ok(Self::from_parts(config, schema, runner))
    }

    pub fn from_parts(config: ClientConfig, schema: OptionSchema, runner: R) -> Self {
        Self {
            config,
            schema,
            runner,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Builds the invocation for `subcommand` without running it.
    pub fn prepare(&self, subcommand: &str, request: &Request) -> Invocation {
        let plan = translate(request, &self.schema);
        Invocation::new(&self.config.p4_binary, subcommand, plan).with_cwd(self.config.cwd.clone())
    }

    /// Translates `request` and runs `p4 <subcommand>`; stdout is returned
    /// unparsed.
    pub fn run(&self, subcommand: &str, request: &Request) -> CoreResult<RawOutput> {
        let invocation = self.prepare(subcommand, request);
        self.runner.run(&invocation)
    }

    /// `p4 info`, parsed into a record keyed by camel-cased labels.
    pub fn info(&self) -> CoreResult<Record> {
        let output = self.run("info", &Request::new())?;
        Ok(parse_info(&output.stdout))
    }

    /// Runs one of the pass-through file commands.
    pub fn file_command(&self, command: FileCommand, request: &Request) -> CoreResult<String> {
        Ok(self.run(command.subcommand(), request)?.stdout)
    }

    pub fn add(&self, request: &Request) -> CoreResult<String> {
        self.file_command(FileCommand::Add, request)
    }

    pub fn delete(&self, request: &Request) -> CoreResult<String> {
        self.file_command(FileCommand::Delete, request)
    }

    pub fn edit(&self, request: &Request) -> CoreResult<String> {
        self.file_command(FileCommand::Edit, request)
    }

    pub fn revert(&self, request: &Request) -> CoreResult<String> {
        self.file_command(FileCommand::Revert, request)
    }

    /// Changelist operations (`p4 change`).
    pub fn changelist(&self) -> Changelists<'_, R> {
        Changelists::new(self)
    }
}
