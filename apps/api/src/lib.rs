//! Roster API Library
//!
//! CRUD service for a team roster: domain logic, the SQLite-backed
//! repository, and the HTTP layer that exposes them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use thiserror::Error;

use crate::api::AppState;
use crate::config::Config;
use crate::domain::service::RosterService;
use crate::infrastructure::database::{self, DatabaseError};
use crate::infrastructure::repositories::SqliteRosterRepository;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connects, migrates, optionally seeds, then serves until the process exits
pub async fn run(config: Config) -> Result<(), StartupError> {
    tracing::info!(environment = ?config.environment, "Connecting to database...");
    let pool = database::connect(&config.database).await?;
    database::migrate(&pool).await?;
    tracing::info!("Database connected successfully");

    if let Some(dir) = &config.seeds_dir {
        let applied = database::seed(&pool, dir).await?;
        tracing::info!(applied, "Seeding finished");
    }

    let repo = Arc::new(SqliteRosterRepository::new(pool));
    let app = api::router(AppState::new(RosterService::new(repo)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
