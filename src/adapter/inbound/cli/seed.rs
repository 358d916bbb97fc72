//! Handler for the `seed` command.

use std::path::Path;

use serde_json::json;
use tracing::{error, info};

use crate::adapter::inbound::cli::command::SeedArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::outbound::sqlite::database::connection;
use crate::adapter::outbound::sqlite::SqliteStore;
use crate::application::auth::PasswordHasher;
use crate::application::seed::{SeedReport, Seeder};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `seed`: migrate the database and write the demo fixtures.
///
/// The pool is closed whether or not seeding succeeded.
pub async fn execute(config: &Config, args: &SeedArgs) -> Result<()> {
    let database = args
        .database
        .clone()
        .unwrap_or_else(|| config.database.clone().into());

    let pb = output::spinner("Seeding database");
    let result = seed(&database).await;
    match result {
        Ok(report) => {
            output::spinner_success(&pb, "Seeding finished");
            print_report(&database, &report);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Seeding failed");
            output::spinner_fail(&pb, "Seeding failed");
            Err(e)
        }
    }
}

async fn seed(database: &Path) -> Result<SeedReport> {
    paths::ensure_parent(database)?;
    let pool = connection::open(&database.to_string_lossy())?;
    let store = SqliteStore::new(pool);
    let result = match PasswordHasher::new() {
        Ok(hasher) => Seeder::new(&store, hasher).run().await,
        Err(e) => Err(e),
    };
    store.close();
    info!("Database connection closed");
    result
}

fn print_report(database: &Path, report: &SeedReport) {
    if output::is_json() {
        output::json_output(json!({
            "command": "seed",
            "database": database.display().to_string(),
            "report": report,
        }));
        return;
    }
    output::field("Database", database.display());
    output::field("Items", format!("{} created", report.items_created));
    output::field(
        "Challenges",
        format!("{} created", report.challenges_created),
    );
    if report.users_created.is_empty() {
        output::field("Users", "already present");
    } else {
        output::field("Users", report.users_created.join(", "));
    }
    output::field(
        "Group",
        if report.group_created {
            "created"
        } else {
            "already present"
        },
    );
    output::field("Members", format!("{} added", report.memberships_added));
    output::field("Messages", format!("{} posted", report.messages_posted));
    output::field("Joins", format!("{} added", report.challenge_joins));
}
