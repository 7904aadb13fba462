use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_logging};

fn main() -> Result<(), ScriptError> {
    let Cli { command } = Cli::parse();

    setup_logging();

    command.run()
}
