//! Read-only queries
//!
//! All row-returning queries are capped at [`ROW_LIMIT`] except the name
//! search. A failed query yields `None`; an empty result yields `Some(vec![])`.

use tracing::error;

use super::executor::{ExecOptions, QueryExecutor, SqlParam};
use super::identifier::{quote_identifier, SortableTable};
use crate::error::DbResult;
use crate::models::{GroupMember, Score, Student};
use crate::printer::TableRow;

pub const ROW_LIMIT: i32 = 30;

const FETCH_GROUP: &str = r#"
    SELECT id, name, birth_date FROM students WHERE "group" = $1 LIMIT $2
"#;

const GROUP_AVERAGE_SCORE: &str = r#"
    SELECT AVG(scores.score)::float8
    FROM students
    JOIN scores ON students.id = scores.student_id
    WHERE students."group" = $1
"#;

const SEARCH_BY_NAME: &str = r#"
    SELECT id, name, birth_date, "group" FROM students WHERE name ILIKE $1
"#;

pub struct Querier<'a> {
    executor: &'a mut QueryExecutor,
}

impl<'a> Querier<'a> {
    pub fn new(executor: &'a mut QueryExecutor) -> Self {
        Self { executor }
    }

    /// Students of a group, at most [`ROW_LIMIT`] of them.
    pub async fn fetch_group(&mut self, group: i32) -> DbResult<Option<Vec<GroupMember>>> {
        let Some(cursor) = self
            .executor
            .execute_for_cursor(
                FETCH_GROUP,
                "fetch group",
                &[group.into(), ROW_LIMIT.into()],
                ExecOptions::default(),
            )
            .await?
        else {
            return Ok(None);
        };

        let members: Vec<GroupMember> = cursor.fetch_all()?;
        if !members.is_empty() {
            println!("Group number {group} fetched!");
        }
        Ok(Some(members))
    }

    /// Average score of a group, `None` when the group has no scored students.
    pub async fn calculate_group_average_score(&mut self, group: i32) -> DbResult<Option<f64>> {
        let Some(cursor) = self
            .executor
            .execute_for_cursor(
                GROUP_AVERAGE_SCORE,
                "calculate group's average score",
                &[group.into()],
                ExecOptions::default(),
            )
            .await?
        else {
            return Ok(None);
        };

        let average = cursor.fetch_one::<(Option<f64>,)>()?.and_then(|(avg,)| avg);
        match average {
            Some(score) => println!("Group's number {group} average score: {score:.2}"),
            None => println!("No group number {group} in the DB."),
        }
        Ok(average)
    }

    /// Rows of an allow-listed table sorted ascending by an allow-listed column.
    pub async fn fetch_sorted_data(
        &mut self,
        table: &str,
        column: &str,
    ) -> DbResult<Option<Vec<Vec<String>>>> {
        let name = format!("fetch data for {table} table sorted by {column}");
        let resolved = SortableTable::parse(table)
            .and_then(|table| table.column(column).map(|column| (table, column)));
        let (table, column) = match resolved {
            Ok(pair) => pair,
            Err(e) => {
                error!("Failed to {}: error \"{}\" occurred.", name, e);
                return Ok(None);
            }
        };

        let sql = format!(
            "SELECT * FROM {} ORDER BY {} LIMIT $1",
            quote_identifier(table.name()),
            quote_identifier(column)
        );
        let params: [SqlParam; 1] = [ROW_LIMIT.into()];
        let Some(cursor) = self
            .executor
            .execute_for_cursor(&sql, &name, &params, ExecOptions::default())
            .await?
        else {
            return Ok(None);
        };

        let rows = match table {
            SortableTable::Students => cells_of(cursor.fetch_all::<Student>()?),
            SortableTable::Scores => cells_of(cursor.fetch_all::<Score>()?),
        };
        Ok(Some(rows))
    }

    /// Case-insensitive substring search on student names.
    pub async fn search_student_by_name(&mut self, partial_name: &str) -> DbResult<Option<Vec<Student>>> {
        let pattern = format!("%{partial_name}%");
        let Some(cursor) = self
            .executor
            .execute_for_cursor(
                SEARCH_BY_NAME,
                &format!("search students by name {partial_name}"),
                &[pattern.into()],
                ExecOptions::default(),
            )
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(cursor.fetch_all()?))
    }
}

fn cells_of<R: TableRow>(rows: Vec<R>) -> Vec<Vec<String>> {
    rows.iter().map(TableRow::cells).collect()
}
