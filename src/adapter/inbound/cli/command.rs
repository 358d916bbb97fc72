//! Command-line interface definitions.
//!
//! Defines the CLI structure for the habitpet application using `clap`.
//! Server-side commands (`seed`, `serve`) work on the database directly;
//! player commands (`login`, `inventory`, `use`, `equip`, `shop`, `buy`)
//! talk to the REST API with the token saved by `login`.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::{output, paths};
use crate::application::header::View;
use crate::domain::ItemFilter;
use crate::infrastructure::config::logging::LoggingConfig;

/// Habit tracker with a virtual pet
#[derive(Parser, Debug)]
#[command(name = "habitpet")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output settings implied by the global flags.
    #[must_use]
    pub fn output_config(&self) -> output::OutputConfig {
        let color = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        output::OutputConfig::new(self.json, self.quiet, self.verbose, color)
    }

    fn json_logs(&self) -> bool {
        match &self.command {
            Commands::Seed(args) => args.json_logs,
            Commands::Serve(args) => args.json_logs,
            _ => false,
        }
    }

    /// Logging settings after applying `-v`, `-q` and `--json-logs`.
    #[must_use]
    pub fn logging(&self, base: LoggingConfig) -> LoggingConfig {
        let mut logging = base.with_overrides(self.verbose, self.json_logs());
        if self.quiet && self.verbose == 0 {
            logging.level = "warn".into();
        }
        logging
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the habitpet CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Populate the database with demo users, items and challenges
    Seed(SeedArgs),

    /// Run the REST API
    Serve(ServeArgs),

    /// Sign in and save the session token
    Login(LoginArgs),

    /// Forget the saved session
    Logout,

    /// Show the header and your inventory
    Inventory(InventoryArgs),

    /// Show your pet and what it wears
    Pet,

    /// Use a consumable inventory item on your pet
    Use(ItemArgs),

    /// Equip a customization inventory item on your pet
    Equip(ItemArgs),

    /// List the item shop
    Shop,

    /// Buy one unit of a shop item
    Buy(BuyArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `habitpet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `habitpet config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `habitpet seed`.
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// SQLite database file (overrides config)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `habitpet serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (overrides config)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `habitpet login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Account password
    #[arg(long, env = "HABITPET_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// API base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,
}

/// Arguments for `habitpet inventory`.
#[derive(Parser, Debug)]
pub struct InventoryArgs {
    /// Current view shown in the header
    #[arg(long, default_value = "pet")]
    pub view: View,

    /// Item type filter [all, food, treat, toy, customization]
    #[arg(long, default_value = "all")]
    pub filter: ItemFilter,
}

/// An inventory row id.
#[derive(Parser, Debug)]
pub struct ItemArgs {
    /// Inventory row id (from `habitpet inventory`)
    pub id: String,
}

/// Arguments for `habitpet buy`.
#[derive(Parser, Debug)]
pub struct BuyArgs {
    /// Shop item id or name
    pub item: String,
}
