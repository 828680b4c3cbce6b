// depot-cli/src/lib.rs
//
// Library portion of the Depot CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{ChangeCommands, Cli, Commands, FileArgs};
pub use commands::{change::run_change, files::run_file_command, info::run_info};

use depot_core::{ClientConfig, ClientConfigBuilder, CommandRunner, FileCommand, P4Client};

/// Client configuration from the parsed flags.
///
/// clap already falls back to the `DEPOT_*` variables for each flag, so the
/// environment is not consulted again here.
pub fn client_config(cli: &Cli) -> ClientConfig {
    let mut builder = ClientConfigBuilder::new();
    // An empty value (e.g. `DEPOT_CWD=`) counts as unset
    if let Some(bin) = cli.p4_bin.as_deref().filter(|b| !b.is_empty()) {
        builder = builder.p4_binary(bin);
    }
    if let Some(schema) = cli.schema.as_deref().filter(|p| !p.as_os_str().is_empty()) {
        builder = builder.schema_path(schema);
    }
    if let Some(cwd) = cli.cwd.as_deref().filter(|p| !p.as_os_str().is_empty()) {
        builder = builder.cwd(cwd);
    }
    builder.build()
}

/// Dispatches the parsed command line to its implementation.
pub fn run<R: CommandRunner>(
    client: &P4Client<R>,
    command: Commands,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        Commands::Info => run_info(client, json),
        Commands::Change(change) => run_change(client, change, json),
        Commands::Add(args) => run_file_command(client, FileCommand::Add, &args, json),
        Commands::Delete(args) => run_file_command(client, FileCommand::Delete, &args, json),
        Commands::Edit(args) => run_file_command(client, FileCommand::Edit, &args, json),
        Commands::Revert(args) => run_file_command(client, FileCommand::Revert, &args, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use depot_core::external::MockRunner;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_client_config_from_flags() {
        let cli = parse(&["depot", "--p4-bin", "/opt/p4", "--cwd", "/ws", "info"]);
        let config = client_config(&cli);
        assert_eq!(config.p4_binary, "/opt/p4");
        assert_eq!(config.cwd, Some(PathBuf::from("/ws")));
        assert_eq!(config.schema_path, None);
    }

    #[test]
    fn test_empty_flag_values_are_unset() {
        let cli = parse(&["depot", "--p4-bin", "", "--cwd", "", "info"]);
        let config = client_config(&cli);
        assert_eq!(config.p4_binary, "p4");
        assert_eq!(config.cwd, None);
    }

    #[test]
    fn test_dispatch_change_view_requires_number() {
        let runner = MockRunner::new();
        let client = P4Client::with_runner(ClientConfig::default(), runner.clone()).unwrap();
        let cli = parse(&["depot", "change", "view"]);

        let err = run(&client, cli.command, false).unwrap_err();
        assert!(format!("{:#}", err).contains("Missing parameter"));
        assert!(runner.received_calls().is_empty());
    }

    #[test]
    fn test_dispatch_file_command() {
        let runner = MockRunner::new();
        runner.expect_stdout("revert", "//depot/a.c#3 - was edit, reverted\n");
        let client = P4Client::with_runner(ClientConfig::default(), runner.clone()).unwrap();
        let cli = parse(&["depot", "revert", "-a", "//depot/a.c"]);

        run(&client, cli.command, false).unwrap();
        assert_eq!(
            runner.received_calls()[0].command_line(),
            "p4 revert -a //depot/a.c"
        );
    }
}
