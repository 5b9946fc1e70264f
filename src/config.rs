use crate::ingest::importer::DEFAULT_BATCH_SIZE;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Import sold listings from a CSV export and browse them
#[derive(Parser, Debug)]
#[command(name = "listings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(
        short,
        long,
        global = true,
        env = "LISTINGS_DATABASE",
        default_value = "listings.sqlite3"
    )]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a CSV export into the database
    Import {
        /// Path to the CSV export (first row is a header)
        csv: PathBuf,

        /// Number of added properties per commit
        #[arg(long, env = "LISTINGS_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size)]
        batch_size: usize,
    },
    /// Serve the sold-properties pages
    Serve {
        /// Address to listen on
        #[arg(long, env = "LISTINGS_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Maximum number of worker threads
        #[arg(long, default_value_t = 8)]
        workers: usize,
    },
}

fn parse_batch_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("batch size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid batch size: {e}")),
    }
}
