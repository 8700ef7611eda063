use crate::db::error::{DbContext, DbError};
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

mod migrations;
mod pool;

pub mod error;
pub mod repo;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Clone, Debug)]
pub struct Db {
    pub(crate) pool: Pool,
}

impl Db {
    pub async fn get_client(&self) -> DbResult<deadpool_postgres::Client> {
        Ok(self.pool.get().await?)
    }

    /// Runs a single statement in its own transaction and returns the number of affected rows.
    /// Zero affected rows is not an error.
    pub async fn execute_in_tx(&self, sql: &str, params: &[&(dyn ToSql + Sync)], op: &str) -> DbResult<u64> {
        let mut client = self.get_client().await.db_context("getting client")?;
        let tx = client
            .build_transaction()
            .start()
            .await
            .db_context("beginning transaction")?;

        let stmt = tx.prepare_cached(sql).await.db_context(op)?;
        let affected = tx.execute(&stmt, params).await.db_context(op)?;

        tx.commit().await.db_context("committing transaction")?;

        tracing::debug!(op, affected, "statement committed");
        Ok(affected)
    }

    /// Runs a single row-returning statement in its own transaction and maps the returned row.
    pub async fn query_one_in_tx<T, F>(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
        op: &str,
        f: F,
    ) -> DbResult<T>
    where
        F: FnOnce(&Row) -> DbResult<T>,
    {
        let mut client = self.get_client().await.db_context("getting client")?;
        let tx = client
            .build_transaction()
            .start()
            .await
            .db_context("beginning transaction")?;

        let stmt = tx.prepare_cached(sql).await.db_context(op)?;
        let row = tx.query_one(&stmt, params).await.db_context(op)?;
        let value = map_row(&row, f, op)?;

        tx.commit().await.db_context("committing transaction")?;

        tracing::debug!(op, "statement committed");
        Ok(value)
    }

    /// Single-row lookup outside a transaction. No matching row is `DbError::NotFound`.
    pub async fn query_one<T, F>(&self, sql: &str, params: &[&(dyn ToSql + Sync)], op: &str, f: F) -> DbResult<T>
    where
        F: FnOnce(&Row) -> DbResult<T>,
    {
        let client = self.get_client().await.db_context("getting client")?;

        let stmt = client.prepare_cached(sql).await.db_context(op)?;
        let row_opt = client.query_opt(&stmt, params).await.db_context(op)?;

        match row_opt {
            Some(row) => map_row(&row, f, op),
            None => Err(DbError::NotFound.context(op)),
        }
    }

    /// Multi-row read outside a transaction. No matching rows is an empty vec.
    pub async fn query_all<T, F>(&self, sql: &str, params: &[&(dyn ToSql + Sync)], op: &str, f: F) -> DbResult<Vec<T>>
    where
        F: Fn(&Row) -> DbResult<T>,
    {
        let client = self.get_client().await.db_context("getting client")?;

        let stmt = client.prepare_cached(sql).await.db_context(op)?;
        let rows = client.query(&stmt, params).await.db_context(op)?;

        rows.iter().map(|row| map_row(row, &f, op)).collect()
    }
}

fn map_row<T>(row: &Row, f: impl FnOnce(&Row) -> DbResult<T>, ctx: &str) -> DbResult<T> {
    match f(row) {
        Ok(v) => Ok(v),
        Err(e) => {
            tracing::error!(error = %e, context = %ctx, "row mapping failed");
            Err(e.context(format!("scanning row in {ctx}")))
        }
    }
}
