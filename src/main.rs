use crate::config::{Cli, Command};
use crate::db::{init_db, Database};
use crate::ingest::{ImportOptions, Importer};
use crate::router::handle;
use astra::Server;
use clap::Parser;

mod config;
mod db;
mod domain;
mod errors;
mod ingest;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let db = Database::new(&cli.database);

    if let Err(e) = init_db(&db) {
        log::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    match cli.command {
        Command::Import { csv, batch_size } => {
            let options = ImportOptions {
                batch_size,
                ..Default::default()
            };
            if let Err(e) = Importer::new(&db, options).run(&csv) {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
        Command::Serve { addr, workers } => {
            log::info!("Starting server at http://{addr}");

            let server = Server::bind(&addr).max_workers(workers);

            let result = server.serve(move |req, _info| match handle(req, &db) {
                Ok(resp) => resp,
                Err(err) => templates::html_error_response(err),
            });

            if let Err(e) = result {
                log::error!("Server ended with error: {e}");
                std::process::exit(1);
            }

            log::info!("Server shut down cleanly.");
        }
    }
}
