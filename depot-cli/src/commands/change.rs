use anyhow::Context;
use depot_core::{ChangeOptions, CommandRunner, P4Client};

use crate::cli::ChangeCommands;
use crate::output::{print_change, print_json};

fn options(changelist: Option<u64>, description: Option<String>) -> ChangeOptions {
    ChangeOptions {
        changelist,
        description,
    }
}

/// Execute a `change` subcommand
pub fn run_change<R: CommandRunner>(
    client: &P4Client<R>,
    command: ChangeCommands,
    json: bool,
) -> anyhow::Result<()> {
    let changes = client.changelist();
    match command {
        ChangeCommands::Create { description } => {
            let number = changes
                .create(&options(None, description))
                .context("Failed to create changelist")?;
            if json {
                print_json(&serde_json::json!({ "changelist": number }))?;
            } else {
                println!("{}", number);
            }
        }
        ChangeCommands::Edit {
            changelist,
            description,
        } => {
            changes
                .edit(&options(changelist, description))
                .context("Failed to edit changelist")?;
        }
        ChangeCommands::Delete { changelist } => {
            changes
                .delete(&options(changelist, None))
                .context("Failed to delete changelist")?;
        }
        ChangeCommands::View { changelist } => {
            let record = changes
                .view(&options(changelist, None))
                .context("Failed to view changelist")?;
            if json {
                print_json(&record)?;
            } else {
                print_change(&record);
            }
        }
    }
    Ok(())
}
