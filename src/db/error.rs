use deadpool_postgres::{BuildError, PoolError};
use thiserror::Error;
use tokio_postgres::error::SqlState;

// DbError is the lowest level error type, wrapping errors from the database layer. It does not wrap
// any higher level errors. Only the service layer decides what a DbError means for the domain.
#[derive(Debug, Error)]
pub enum DbError {
    /// Single-row lookup matched nothing
    #[error("no rows in result set")]
    NotFound,

    /// Unique constraint violation
    #[error("unique violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// Statement cancelled by the server side statement timeout
    #[error("statement timeout")]
    Timeout,

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Pg(tokio_postgres::Error),

    #[error(transparent)]
    Migrate(#[from] refinery::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("row decode error: {0}")]
    Decode(String),

    /// A failure labelled with the repository operation it happened in
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<DbError>,
    },
}

impl DbError {
    pub fn context(self, context: impl Into<String>) -> Self {
        DbError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any operation labels.
    pub fn root(&self) -> &DbError {
        match self {
            DbError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), DbError::NotFound)
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.root(), DbError::UniqueViolation(_))
    }
}

impl From<tokio_postgres::Error> for DbError {
    fn from(e: tokio_postgres::Error) -> Self {
        let Some(db_err) = e.as_db_error() else {
            return DbError::Pg(e);
        };

        let code = db_err.code();
        if *code == SqlState::UNIQUE_VIOLATION {
            DbError::UniqueViolation(db_err.message().to_string())
        } else if *code == SqlState::FOREIGN_KEY_VIOLATION {
            DbError::ForeignKey(db_err.message().to_string())
        } else if *code == SqlState::QUERY_CANCELED {
            DbError::Timeout
        } else {
            DbError::Pg(e)
        }
    }
}

/// Labels a failed repository step, e.g. `.db_context("beginning transaction")?`.
pub trait DbContext<T> {
    fn db_context(self, context: &str) -> Result<T, DbError>;
}

impl<T, E> DbContext<T> for Result<T, E>
where
    E: Into<DbError>,
{
    fn db_context(self, context: &str) -> Result<T, DbError> {
        self.map_err(|e| e.into().context(context))
    }
}
