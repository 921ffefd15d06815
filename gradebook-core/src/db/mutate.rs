//! Update and delete operations
//!
//! Each operation branches on the affected-row count: zero means nothing
//! matched, anything else is reported as a change. The count itself is
//! returned (`None` when the statement failed).

use super::executor::{ExecOptions, QueryExecutor, SqlParam};
use crate::error::DbResult;

const UPDATE_GROUP: &str = r#"UPDATE students SET "group" = $1 WHERE id = $2"#;
const DELETE_GROUP: &str = r#"DELETE FROM students WHERE "group" = $1"#;
const UPDATE_SCORE: &str = "UPDATE scores SET score = $1 WHERE student_id = $2";

pub struct Mutator<'a> {
    executor: &'a mut QueryExecutor,
}

impl<'a> Mutator<'a> {
    pub fn new(executor: &'a mut QueryExecutor) -> Self {
        Self { executor }
    }

    /// Move a student to another group.
    pub async fn update_group(&mut self, student_id: i32, new_group: i32) -> DbResult<Option<u64>> {
        let changed = self
            .affected_rows(
                UPDATE_GROUP,
                "update student's group",
                &[new_group.into(), student_id.into()],
            )
            .await?;

        match changed {
            Some(0) => println!("No student with id {student_id} found."),
            Some(_) => println!("Student with id {student_id} now in group {new_group}."),
            None => {}
        }
        Ok(changed)
    }

    /// Delete every student of a group; their scores go with them.
    pub async fn delete_group(&mut self, group: i32) -> DbResult<Option<u64>> {
        let changed = self
            .affected_rows(DELETE_GROUP, "delete group", &[group.into()])
            .await?;

        match changed {
            Some(0) => println!("No student from group {group} found."),
            Some(n) => println!("{n} student(s) of group {group} deleted."),
            None => {}
        }
        Ok(changed)
    }

    /// Overwrite the score of a student.
    pub async fn update_score(&mut self, student_id: i32, new_score: i32) -> DbResult<Option<u64>> {
        let changed = self
            .affected_rows(
                UPDATE_SCORE,
                "update student's score",
                &[new_score.into(), student_id.into()],
            )
            .await?;

        match changed {
            Some(0) => println!("No student with id {student_id} found."),
            Some(_) => println!("Student with id {student_id} now has {new_score} points."),
            None => {}
        }
        Ok(changed)
    }

    async fn affected_rows(
        &mut self,
        sql: &str,
        name: &str,
        params: &[SqlParam],
    ) -> DbResult<Option<u64>> {
        let cursor = self
            .executor
            .execute_for_cursor(sql, name, params, ExecOptions::default())
            .await?;
        Ok(cursor.map(|cursor| cursor.rows_affected()))
    }
}
