// depot-cli/src/main.rs
//
// Entry point for the `depot` binary: parses arguments, sets up logging,
// builds the p4 client, and maps failures to exit code 1.

use clap::Parser;
use depot_cli::{Cli, client_config, logging, run};
use depot_core::P4Client;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = client_config(&cli);
    log::debug!("Using p4 binary: {}", config.p4_binary);

    let result = P4Client::new(config)
        .map_err(anyhow::Error::from)
        .and_then(|client| run(&client, cli.command, cli.json));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
