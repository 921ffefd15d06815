//! Single-operation commands on existing data

use anyhow::Result;
use clap::Subcommand;
use gradebook_core::db::SortableTable;
use gradebook_core::{print_table, GroupMember, Mutator, Querier, QueryExecutor, Student};

use super::{close_session, open_session};

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// List the students of a group
    Group {
        /// Group number
        group: i32,
    },
    /// Show the average score of a group
    Average {
        /// Group number
        group: i32,
    },
    /// Find students whose name contains the given text (case-insensitive)
    Search {
        /// Part of the name to look for
        partial_name: String,
    },
    /// List a table sorted by one of its columns
    Sorted {
        /// Table name (students or scores)
        table: String,
        /// Column to sort by
        column: String,
    },
    /// Move a student to another group
    SetGroup {
        /// Student id
        student_id: i32,
        /// New group number
        group: i32,
    },
    /// Delete every student in a group (scores are removed with them)
    DeleteGroup {
        /// Group number
        group: i32,
    },
    /// Change a student's score
    SetScore {
        /// Student id
        student_id: i32,
        /// New score
        score: i32,
    },
}

pub async fn run_records(command: RecordCommand) -> Result<()> {
    let mut executor = open_session().await?;
    let outcome = dispatch(&mut executor, command).await;
    close_session(executor).await;
    outcome
}

async fn dispatch(executor: &mut QueryExecutor, command: RecordCommand) -> Result<()> {
    match command {
        RecordCommand::Group { group } => {
            let members = Querier::new(executor).fetch_group(group).await?;
            print_table(members.as_deref(), &GroupMember::COLUMNS);
        }
        RecordCommand::Average { group } => {
            Querier::new(executor)
                .calculate_group_average_score(group)
                .await?;
        }
        RecordCommand::Search { partial_name } => {
            let found = Querier::new(executor)
                .search_student_by_name(&partial_name)
                .await?;
            print_table(found.as_deref(), &Student::COLUMNS);
        }
        RecordCommand::Sorted { table, column } => {
            let rows = Querier::new(executor)
                .fetch_sorted_data(&table, &column)
                .await?;
            // An unknown table was already reported by the query; no header to print.
            if let Ok(table) = SortableTable::parse(&table) {
                print_table(rows.as_deref(), table.columns());
            }
        }
        RecordCommand::SetGroup { student_id, group } => {
            Mutator::new(executor).update_group(student_id, group).await?;
        }
        RecordCommand::DeleteGroup { group } => {
            Mutator::new(executor).delete_group(group).await?;
        }
        RecordCommand::SetScore { student_id, score } => {
            Mutator::new(executor).update_score(student_id, score).await?;
        }
    }
    Ok(())
}
