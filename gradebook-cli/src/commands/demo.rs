//! The full walkthrough: setup, then every mutation and query once.

use anyhow::{Context, Result};
use gradebook_core::{print_table, GroupMember, Mutator, Querier, QueryExecutor, Score, Student};

use super::setup::{create_and_populate, PopulateArgs};
use super::{close_session, open_session};

pub async fn run_demo(args: PopulateArgs) -> Result<()> {
    let executor = open_session().await?;
    run_demo_on(executor, args).await
}

/// Run the demo on an open session. The session is closed on every path.
async fn run_demo_on(mut executor: QueryExecutor, args: PopulateArgs) -> Result<()> {
    if let Err(err) = create_and_populate(&mut executor, args).await {
        close_session(executor).await;
        return Err(err).context("Critical error occurred!");
    }

    let outcome = walkthrough(&mut executor).await;
    close_session(executor).await;
    outcome
}

async fn walkthrough(executor: &mut QueryExecutor) -> Result<()> {
    {
        let mut mutator = Mutator::new(executor);
        mutator.update_group(5, 10).await?;
        mutator.delete_group(2).await?;
    }

    {
        let mut querier = Querier::new(executor);

        let group = querier.fetch_group(8).await?;
        print_table(group.as_deref(), &GroupMember::COLUMNS);

        querier.calculate_group_average_score(8).await?;

        let sorted_scores = querier.fetch_sorted_data("scores", "score").await?;
        print_table(sorted_scores.as_deref(), &Score::COLUMNS);

        let found = querier.search_student_by_name("tracy").await?;
        print_table(found.as_deref(), &Student::COLUMNS);
    }

    Mutator::new(executor).update_score(3, 100).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::ExecOptions;

    async fn run(executor: &mut QueryExecutor, sql: &str) {
        executor
            .execute(sql, sql, &[], ExecOptions::raising().quiet())
            .await
            .expect(sql);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn failed_table_creation_is_critical() {
        let schema = format!("gradebook_cli_test_{}", std::process::id());
        let mut executor = open_session().await.expect("session");
        run(&mut executor, &format!("CREATE SCHEMA {schema}")).await;
        run(&mut executor, &format!("SET search_path TO {schema}")).await;
        // `students` exists but is not a table, so the scores foreign key fails.
        run(&mut executor, "CREATE VIEW students AS SELECT 1 AS id").await;

        let err = run_demo_on(executor, PopulateArgs::default())
            .await
            .expect_err("demo should fail");
        assert_eq!(err.to_string(), "Critical error occurred!");
        assert!(format!("{err:#}").contains("Failed to create tables"));

        let mut cleanup = open_session().await.expect("session");
        run(&mut cleanup, &format!("DROP SCHEMA {schema} CASCADE")).await;
        close_session(cleanup).await;
    }
}
