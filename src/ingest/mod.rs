pub mod columns;
pub mod decoder;
pub mod extractors;
pub mod importer;

pub use importer::{ImportError, ImportOptions, Importer, RunSummary};
