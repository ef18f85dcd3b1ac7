mod cmd;

use anyhow::Result;
use clap::Parser;
use upm_dev::cli::{Cli, Command};

fn main() -> Result<()> {
    // Print scaffold diagnostics even if the caller did not configure tracing.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Command::New(args) => cmd::package::run_new(&args),
        Command::Delete(args) => cmd::package::run_delete(&args),
        Command::List(args) => cmd::package::run_list(&args),
        Command::Open(args) => cmd::package::run_open(&args),
        Command::Root(root) => cmd::root::run(root),
        Command::Config(config_cmd) => cmd::config::run(config_cmd),
    }
}
