//! Allow-listed SQL identifiers
//!
//! Table and column names cannot be bound as parameters, so the only ones
//! that ever reach statement text are the ones listed here, and they are
//! quoted on the way in.

use crate::error::{DbError, DbResult};

/// Tables that may be addressed by name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortableTable {
    Students,
    Scores,
}

impl SortableTable {
    pub const ALL: [SortableTable; 2] = [SortableTable::Students, SortableTable::Scores];

    /// Look up a table by its SQL name
    pub fn parse(name: &str) -> DbResult<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| DbError::unknown_identifier("table", name))
    }

    pub fn name(self) -> &'static str {
        match self {
            SortableTable::Students => "students",
            SortableTable::Scores => "scores",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SortableTable::Students => &["id", "name", "birth_date", "group"],
            SortableTable::Scores => &["id", "student_id", "score"],
        }
    }

    /// Look up one of this table's columns by name
    pub fn column(self, name: &str) -> DbResult<&'static str> {
        self.columns()
            .iter()
            .copied()
            .find(|column| *column == name)
            .ok_or_else(|| DbError::unknown_identifier("column", name))
    }
}

/// Quote an identifier for PostgreSQL, doubling embedded quotes.
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tables() {
        assert_eq!(SortableTable::parse("students").unwrap(), SortableTable::Students);
        assert_eq!(SortableTable::parse("scores").unwrap(), SortableTable::Scores);
    }

    #[test]
    fn rejects_unknown_table() {
        let err = SortableTable::parse("pg_shadow").unwrap_err();
        assert_eq!(err.to_string(), "unknown table 'pg_shadow'");
    }

    #[test]
    fn rejects_injection_through_column() {
        let err = SortableTable::Scores
            .column("score; DROP TABLE students")
            .unwrap_err();
        assert!(matches!(err, DbError::UnknownIdentifier { kind: "column", .. }));
    }

    #[test]
    fn columns_are_scoped_to_their_table() {
        assert_eq!(SortableTable::Students.column("group").unwrap(), "group");
        assert!(SortableTable::Scores.column("group").is_err());
        assert!(SortableTable::Students.column("score").is_err());
    }

    #[test]
    fn quotes_reserved_words_and_embedded_quotes() {
        assert_eq!(quote_identifier("group"), "\"group\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
