use clap::Parser;
use tracing::debug;

use habitpet::adapter::inbound::cli::command::Cli;
use habitpet::adapter::inbound::cli::{dispatch, output};
use habitpet::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(cli.output_config());

    let config = if dispatch::needs_config(&cli) {
        match Config::load_or_default(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                output::error(&format!("Failed to load config: {e}"));
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    cli.logging(config.logging.clone()).init();
    debug!(config = %cli.config.display(), "habitpet starting");

    if let Err(e) = dispatch::execute(&cli, &config).await {
        debug!(error = ?e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
