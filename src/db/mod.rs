pub mod connection;
pub mod import_runs;
pub mod properties;

pub use connection::{init_db, Database};
