//! Database layer - single connection, executor and operations
//!
//! # Design Principles
//!
//! - One `PgConnection`, owned by [`QueryExecutor`] and borrowed by each component
//! - Every statement is parameterized; identifiers come from an allow-list
//! - Setup statements raise, steady-state statements report and carry on

pub mod connection;
pub mod executor;
pub mod identifier;
pub mod maintenance;
pub mod mutate;
pub mod populate;
pub mod query;
pub mod schema;

pub use connection::{connect, create_connection};
pub use executor::{Cursor, ExecOptions, QueryExecutor, SqlParam};
pub use identifier::{quote_identifier, SortableTable};
pub use maintenance::clear_tables;
pub use mutate::Mutator;
pub use populate::{DataPopulator, PopulateReport, DEFAULT_STUDENT_COUNT};
pub use query::{Querier, ROW_LIMIT};
pub use schema::TableManager;
