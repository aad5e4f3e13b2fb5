use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::{conf::settings, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPolicy {
    Shared,
    Exclusive,
}

impl RegistrationPolicy {
    pub fn from_flag(allow_shared_jobs: bool) -> Self {
        if allow_shared_jobs {
            RegistrationPolicy::Shared
        } else {
            RegistrationPolicy::Exclusive
        }
    }
}

pub async fn db_pool(url: &str, max_connections: u32) -> Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>>;
}

impl GetTxn for Arc<SqlitePool> {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.begin().await?)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<SqlitePool>,
    pub policy: RegistrationPolicy,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let pool = db_pool(&settings.database_url, settings.database_pool_max_connections).await?;
        tracing::debug!("connected to {}", &settings.database_url);
        Ok(AppState::with_pool(
            pool,
            RegistrationPolicy::from_flag(settings.allow_shared_jobs),
        ))
    }

    pub fn with_pool(pool: SqlitePool, policy: RegistrationPolicy) -> AppState {
        AppState {
            db_pool: Arc::new(pool),
            policy,
        }
    }
}
