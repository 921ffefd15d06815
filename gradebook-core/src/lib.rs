//! gradebook-core: students and scores on PostgreSQL
//!
//! Connection factory, query executor, table manager, synthetic data
//! populator, mutators, queriers and a text table printer.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod printer;
pub mod synthetic;

pub use config::{load_dotenv, Credentials, DbConfig};
pub use db::{
    clear_tables, create_connection, DataPopulator, ExecOptions, Mutator, PopulateReport, Querier,
    QueryExecutor, SqlParam, TableManager,
};
pub use error::{ConfigError, DbError, DbResult, PrintError};
pub use models::{GroupMember, NewStudent, Score, Student};
pub use printer::{print_table, render_table, TableRow};
pub use synthetic::SyntheticData;
