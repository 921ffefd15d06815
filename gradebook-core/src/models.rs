//! Row types for the `students` and `scores` tables

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use crate::printer::TableRow;

/// Full `students` row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub group: i32,
}

/// `students` row without its group, as listed by a group fetch
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GroupMember {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Student awaiting insertion (id is assigned by the database)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub birth_date: NaiveDate,
    pub group: i32,
}

/// `scores` row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Score {
    pub id: Uuid,
    pub student_id: i32,
    pub score: i32,
}

impl Student {
    pub const COLUMNS: [&'static str; 4] = ["id", "name", "birth_date", "group"];
}

impl GroupMember {
    pub const COLUMNS: [&'static str; 3] = ["id", "name", "birth_date"];
}

impl Score {
    pub const COLUMNS: [&'static str; 3] = ["id", "student_id", "score"];
}

impl TableRow for Student {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.birth_date.to_string(),
            self.group.to_string(),
        ]
    }
}

impl TableRow for GroupMember {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.birth_date.to_string(),
        ]
    }
}

impl TableRow for Score {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.student_id.to_string(),
            self.score.to_string(),
        ]
    }
}
