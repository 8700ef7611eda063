use super::{Db, DbResult};
use crate::config::Config;
use crate::db::error::DbError;
use crate::error::InfraError;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use std::str::FromStr;
use std::time::Duration;
use tokio_postgres::NoTls;

impl Db {
    /// Builds the pool. Every connection carries a server side `statement_timeout` so that
    /// abandoned requests do not leave work running in the store.
    pub fn new(url: &str, max_size: usize, timeout: Duration) -> DbResult<Self> {
        let mut cfg = tokio_postgres::Config::from_str(url)?;
        cfg.options(&format!("-c statement_timeout={}", timeout.as_millis()));

        let mgr = Manager::from_config(
            cfg,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let pool = Pool::builder(mgr)
            .max_size(max_size)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(DbError::from)?;

        Ok(Self { pool })
    }

    /// Builds the pool from the configuration and brings the schema up to date.
    pub async fn connect(cfg: &Config) -> Result<Self, InfraError> {
        let db = Self::new(&cfg.database_url, cfg.pool_size, cfg.request_timeout())?;
        db.init().await?;
        Ok(db)
    }
}
