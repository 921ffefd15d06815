//! Development reset

use super::executor::{ExecOptions, QueryExecutor};
use crate::error::DbResult;

const TRUNCATE_STUDENTS: &str = "TRUNCATE TABLE students RESTART IDENTITY CASCADE";

/// Empty `students` (and, by cascade, `scores`) and restart the id sequence.
///
/// Returns `false` if the truncate failed; the failure has already been reported.
pub async fn clear_tables(executor: &mut QueryExecutor) -> DbResult<bool> {
    let outcome = executor
        .execute(TRUNCATE_STUDENTS, "clear tables", &[], ExecOptions::default())
        .await?;
    Ok(outcome.is_some())
}
