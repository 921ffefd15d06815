//! Table manager
//!
//! Both statements are guarded by `IF NOT EXISTS`, so running them again
//! is a no-op. Failures propagate: a missing schema is a setup error.

use super::executor::{ExecOptions, QueryExecutor};
use crate::error::DbResult;

pub const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        birth_date DATE NOT NULL,
        "group" INTEGER NOT NULL
    )
"#;

pub const CREATE_SCORES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS scores (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        student_id INT REFERENCES students(id) ON DELETE CASCADE NOT NULL,
        score INTEGER NOT NULL
    )
"#;

pub struct TableManager<'a> {
    executor: &'a mut QueryExecutor,
}

impl<'a> TableManager<'a> {
    pub fn new(executor: &'a mut QueryExecutor) -> Self {
        Self { executor }
    }

    pub async fn create_students_table(&mut self) -> DbResult<()> {
        self.executor
            .execute(
                CREATE_STUDENTS_TABLE,
                "create students table",
                &[],
                ExecOptions::raising(),
            )
            .await?;
        Ok(())
    }

    pub async fn create_scores_table(&mut self) -> DbResult<()> {
        self.executor
            .execute(
                CREATE_SCORES_TABLE,
                "create scores table",
                &[],
                ExecOptions::raising(),
            )
            .await?;
        Ok(())
    }

    /// Create `students` then `scores` (which references it).
    pub async fn create_all(&mut self) -> DbResult<()> {
        self.create_students_table().await?;
        self.create_scores_table().await
    }
}
