//! Alert adapters.
//!
//! Implements the [`Alerter`] port for the terminal front end.

use std::io::Write;

use owo_colors::OwoColorize;

use crate::port::outbound::alert::Alerter;

/// Prints each alert on its own line on stdout.
pub struct ConsoleAlerter {
    colored: bool,
}

impl ConsoleAlerter {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }
}

impl Alerter for ConsoleAlerter {
    fn alert(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = if self.colored {
            writeln!(stdout, "{} {}", "!".yellow().bold(), message.bold())
        } else {
            writeln!(stdout, "! {message}")
        };
    }
}

/// Routes alerts into the log instead of the terminal, for `--json` and
/// `--quiet` runs.
pub struct LogAlerter;

impl Alerter for LogAlerter {
    fn alert(&self, message: &str) {
        tracing::info!(message = %message, "Alert");
    }
}
