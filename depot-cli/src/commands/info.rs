use depot_core::{CommandRunner, P4Client};
use log::info;

use crate::output::{print_json, print_record};

/// Execute the info command
pub fn run_info<R: CommandRunner>(client: &P4Client<R>, json: bool) -> anyhow::Result<()> {
    info!("Querying p4 info");
    let record = client.info()?;
    if json {
        print_json(&record)
    } else {
        print_record(&record);
        Ok(())
    }
}
