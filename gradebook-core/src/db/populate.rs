//! Data populator
//!
//! Inserts rows one at a time. Population is part of setup, so the first
//! failed insert is returned to the caller and the rest are not attempted.

use rand::Rng;

use super::executor::{ExecOptions, QueryExecutor, SqlParam};
use crate::error::DbResult;
use crate::synthetic::SyntheticData;

pub const DEFAULT_STUDENT_COUNT: usize = 10;

const INSERT_STUDENT: &str = r#"
    INSERT INTO students (name, birth_date, "group")
    VALUES ($1, $2, $3)
"#;

const INSERT_SCORE: &str = r#"
    INSERT INTO scores (student_id, score)
    VALUES ($1, $2)
"#;

const SELECT_STUDENT_IDS: &str = "SELECT id FROM students ORDER BY id";

/// Rows written by one population phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub inserted: u64,
}

pub struct DataPopulator<'a, R: Rng> {
    executor: &'a mut QueryExecutor,
    data: &'a mut SyntheticData<R>,
}

impl<'a, R: Rng> DataPopulator<'a, R> {
    pub fn new(executor: &'a mut QueryExecutor, data: &'a mut SyntheticData<R>) -> Self {
        Self { executor, data }
    }

    /// Insert `count` generated students, stopping at the first failure.
    pub async fn insert_students(&mut self, count: usize) -> DbResult<PopulateReport> {
        let mut report = PopulateReport::default();

        for _ in 0..count {
            let student = self.data.student();
            let params: [SqlParam; 3] = [
                student.name.into(),
                student.birth_date.into(),
                student.group.into(),
            ];
            let outcome = self
                .executor
                .execute(
                    INSERT_STUDENT,
                    "insert students",
                    &params,
                    ExecOptions::raising().quiet(),
                )
                .await?;
            report.inserted += outcome.unwrap_or(0);
        }

        println!("Students table filled successfully!");
        Ok(report)
    }

    /// Insert one generated score for every existing student, stopping at
    /// the first failed insert.
    ///
    /// Returns `None` when the student ids could not be read.
    pub async fn insert_scores(&mut self) -> DbResult<Option<PopulateReport>> {
        let Some(cursor) = self
            .executor
            .execute_for_cursor(
                SELECT_STUDENT_IDS,
                "select students' identifiers",
                &[],
                ExecOptions::default(),
            )
            .await?
        else {
            return Ok(None);
        };
        let student_ids: Vec<(i32,)> = cursor.fetch_all()?;

        let mut report = PopulateReport::default();
        for (student_id,) in student_ids {
            let params: [SqlParam; 2] = [student_id.into(), self.data.score().into()];
            let outcome = self
                .executor
                .execute(
                    INSERT_SCORE,
                    "insert scores",
                    &params,
                    ExecOptions::raising().quiet(),
                )
                .await?;
            report.inserted += outcome.unwrap_or(0);
        }

        println!("Scores table filled successfully!");
        Ok(Some(report))
    }
}
