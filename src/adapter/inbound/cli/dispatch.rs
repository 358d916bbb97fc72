//! Routes a parsed command line to its handler.

use super::command::{Cli, Commands, ConfigCommand};
use super::{config, inventory, seed, serve, session, shop};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command. Output and logging must already be set up.
pub async fn execute(cli: &Cli, settings: &Config) -> Result<()> {
    match &cli.command {
        Commands::Seed(args) => seed::execute(settings, args).await,
        Commands::Serve(args) => serve::execute(settings, args).await,
        Commands::Login(args) => session::execute_login(settings, args).await,
        Commands::Logout => session::execute_logout(),
        Commands::Inventory(args) => inventory::execute(settings, args).await,
        Commands::Pet => inventory::execute_pet(settings).await,
        Commands::Use(args) => inventory::execute_use(settings, &args.id).await,
        Commands::Equip(args) => inventory::execute_equip(settings, &args.id).await,
        Commands::Shop => shop::execute_list(settings).await,
        Commands::Buy(args) => shop::execute_buy(settings, &args.item).await,
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&cli.config, args.force)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}

/// Whether the command needs a valid configuration before it can start.
/// The `config` group manages the file itself, so it must work on a
/// broken one.
#[must_use]
pub fn needs_config(cli: &Cli) -> bool {
    !matches!(cli.command, Commands::Config(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn config_commands_skip_loading() {
        let cli = Cli::try_parse_from(["habitpet", "config", "validate"]).unwrap();
        assert!(!needs_config(&cli));
        let cli = Cli::try_parse_from(["habitpet", "inventory"]).unwrap();
        assert!(needs_config(&cli));
    }
}
