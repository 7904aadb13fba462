//! Definitions of CLI arguments and commands for the deployment scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{list, show, validate},
    constants::{ENVIRONMENT_ENV_VAR, LATEST_ENVIRONMENT},
    errors::ScriptError,
    registry::Registry,
};

/// Inspect the deployment parameters of the `Microsponsors` contract
#[derive(Parser)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands
#[derive(Subcommand)]
pub enum Command {
    /// List every configured environment, in authoring order
    List,
    /// Print the constructor arguments for an environment
    Show(ShowArgs),
    /// Validate one or all deployment records
    Validate(ValidateArgs),
}

impl Command {
    /// Run the command against the embedded deployments table
    pub fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::List => list(Registry::embedded()?),
            Command::Show(args) => show(args, Registry::embedded()?),
            Command::Validate(args) => validate(args),
        }
    }
}

/// Print the constructor arguments for an environment
#[derive(Args)]
pub struct ShowArgs {
    /// The environment label
    #[arg(short, long, env = ENVIRONMENT_ENV_VAR, default_value = LATEST_ENVIRONMENT)]
    pub env: String,
}

/// Validate deployment records
#[derive(Args)]
pub struct ValidateArgs {
    /// The environment label to validate. All environments are validated if omitted
    #[arg(short, long, env = ENVIRONMENT_ENV_VAR)]
    pub env: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::constants::LATEST_ENVIRONMENT;

    use super::{Cli, Command};

    #[test]
    fn test_show_defaults_to_latest() {
        let Cli { command } = Cli::try_parse_from(["microsponsors-scripts", "show"]).unwrap();
        match command {
            Command::Show(args) => assert_eq!(args.env, LATEST_ENVIRONMENT),
            _ => panic!("expected the show command"),
        }
    }

    #[test]
    fn test_show_explicit_env() {
        let Cli { command } =
            Cli::try_parse_from(["microsponsors-scripts", "show", "--env", "kovan-v2"]).unwrap();
        match command {
            Command::Show(args) => assert_eq!(args.env, "kovan-v2"),
            _ => panic!("expected the show command"),
        }
    }
}
