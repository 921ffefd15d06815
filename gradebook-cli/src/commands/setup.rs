//! Schema creation, population and reset commands

use anyhow::{Context, Result};
use clap::Args;
use gradebook_core::db::{DEFAULT_STUDENT_COUNT, clear_tables};
use gradebook_core::synthetic::DEFAULT_SEED;
use gradebook_core::{DataPopulator, QueryExecutor, SyntheticData, TableManager};
use tracing::info;

use super::{close_session, open_session};

#[derive(Args, Debug, Clone, Copy)]
pub struct PopulateArgs {
    /// Number of synthetic students to insert
    #[arg(long, short = 'n', default_value_t = DEFAULT_STUDENT_COUNT)]
    pub students: usize,

    /// Seed for the synthetic data generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Default for PopulateArgs {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENT_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Create both tables, then fill them with synthetic rows.
///
/// Any failed table creation or insert is returned; the caller decides
/// whether the run can continue.
pub async fn create_and_populate(executor: &mut QueryExecutor, args: PopulateArgs) -> Result<()> {
    TableManager::new(executor)
        .create_all()
        .await
        .context("Failed to create tables")?;

    let mut data = SyntheticData::seeded(args.seed);
    let mut populator = DataPopulator::new(executor, &mut data);
    let students = populator.insert_students(args.students).await?;
    let scores = populator.insert_scores().await?;

    info!(
        students_inserted = students.inserted,
        scores_inserted = scores.map(|report| report.inserted).unwrap_or(0),
        seed = args.seed,
        "population finished"
    );
    Ok(())
}

pub async fn run_init() -> Result<()> {
    let mut executor = open_session().await?;
    let outcome = TableManager::new(&mut executor).create_all().await;
    close_session(executor).await;
    outcome.context("Failed to create tables")
}

pub async fn run_populate(args: PopulateArgs) -> Result<()> {
    let mut executor = open_session().await?;
    let outcome = create_and_populate(&mut executor, args).await;
    close_session(executor).await;
    outcome
}

pub async fn run_clear() -> Result<()> {
    let mut executor = open_session().await?;
    let outcome = clear_tables(&mut executor).await;
    close_session(executor).await;
    outcome?;
    Ok(())
}
