use crate::auth::accounts::{set_role_password, Role};
use crate::config::Config;
use crate::db::connection::{init_db, seed_db, Database};
use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod routes;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

/// Schema, optional demo data, then the role passwords from the command line.
fn prepare_db(cfg: &Config) -> Result<Database, ServerError> {
    let db = Database::new(cfg.db.clone());
    init_db(&db, &cfg.schema)?;
    if !cfg.no_seed {
        seed_db(&db, &cfg.seed)?;
    }
    db.with_conn(|conn| {
        set_role_password(conn, Role::Admin, &cfg.admin_password)?;
        set_role_password(conn, Role::User, &cfg.user_password)
    })?;
    Ok(db)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::parse();

    let db = match prepare_db(&cfg) {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "database initialization failed");
            std::process::exit(1);
        }
    };

    info!(addr = %cfg.addr, workers = cfg.workers, "starting server");

    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
                    error!(error = %err, "request failed")
                }
                _ => warn!(error = %err, "request rejected"),
            }
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
