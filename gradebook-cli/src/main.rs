//! gradebook CLI - students and exam scores on PostgreSQL
//!
//! Connection settings come from POSTGRES_DB, POSTGRES_USER,
//! POSTGRES_PASSWORD, DB_HOST and DB_PORT (environment or .env file).
//!
//! - `demo`: create tables, populate them, then run every operation once
//! - `init` / `populate` / `clear`: schema setup and development reset
//! - `group`, `average`, `search`, `sorted`, `set-group`, `delete-group`,
//!   `set-score`: one operation against existing data

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::records::RecordCommand;
use commands::setup::PopulateArgs;

#[derive(Parser, Debug)]
#[command(
    name = "gradebook",
    author,
    version,
    about = "Students and exam scores on PostgreSQL: create, populate, update and query"
)]
struct Cli {
    /// Enable debug logging (shows every statement and its parameters)
    #[arg(long, global = true)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create and populate the tables, then run every update and query once
    Demo(PopulateArgs),
    /// Create the students and scores tables if they do not exist
    Init,
    /// Create the tables if needed and insert synthetic students and scores
    Populate(PopulateArgs),
    /// Remove all students and scores and restart the id sequence
    Clear,
    #[command(flatten)]
    Records(RecordCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        quiet: cli.quiet,
    })
    .ok();

    match cli.command {
        Commands::Demo(args) => commands::run_demo(args).await?,
        Commands::Init => commands::run_init().await?,
        Commands::Populate(args) => commands::run_populate(args).await?,
        Commands::Clear => commands::run_clear().await?,
        Commands::Records(command) => commands::run_records(command).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_defaults_to_ten_students_seed_one() {
        let cli = Cli::try_parse_from(["gradebook", "demo"]).unwrap();
        match cli.command {
            Commands::Demo(args) => {
                assert_eq!(args.students, 10);
                assert_eq!(args.seed, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn record_commands_are_flattened() {
        let cli = Cli::try_parse_from(["gradebook", "set-group", "5", "10"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Records(RecordCommand::SetGroup {
                student_id: 5,
                group: 10
            })
        ));
    }
}
