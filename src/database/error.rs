use error_stack::Report;
use thiserror::Error;

/// Database related errors
#[derive(Debug, Error)]
pub enum Error {
    /// An error caused by an invalid Postgres connection url.
    #[error("invalid connection url")]
    InvalidUrl,
    /// An error caused by an [`sqlx`] error.
    #[error("received a pool error: {0}")]
    Internal(sqlx::Error),
    /// Pending migrations could not be applied.
    #[error("could not run database migrations")]
    Migration,
    /// The database is currently in read mode (most likely due
    /// to maintenance) and should not perform any writes.
    #[error("database is currently in read mode")]
    Readonly,
    /// The database pool does not have a reliable connection
    /// to transact to the database.
    #[error("unhealthy database pool")]
    UnhealthyPool,
}

/// Converts from a generic [sqlx] result into a [database compatible error](Error).
pub trait ErrorExt<T> {
    fn into_db_error(self) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn into_db_error(self) -> Result<T> {
        self.map_err(|e| match &e {
            sqlx::Error::Database(err) if err.message().ends_with("read-only transaction") => {
                Report::new(Error::Internal(e)).change_context(Error::Readonly)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Report::new(Error::Internal(e)).change_context(Error::UnhealthyPool)
            }
            _ => Report::new(Error::Internal(e)),
        })
    }
}

/// Lazily typed [`std::result::Result`] but the error generic
/// is filled up with [a database error](Error).
pub type Result<T> = error_stack::Result<T, Error>;

/// Checks what went wrong without matching on
/// `report.current_context()` over and over again.
pub trait ErrorExt2 {
    fn is_readonly(&self) -> bool;
}

impl ErrorExt2 for Report<Error> {
    fn is_readonly(&self) -> bool {
        self.frames()
            .filter_map(|f| f.downcast_ref::<Error>())
            .any(|v| matches!(v, Error::Readonly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unhealthy() {
        let report = Err::<(), _>(sqlx::Error::PoolTimedOut)
            .into_db_error()
            .unwrap_err();

        assert!(matches!(report.current_context(), Error::UnhealthyPool));
        assert!(!report.is_readonly());
    }

    #[test]
    fn test_row_not_found_is_internal() {
        let report = Err::<(), _>(sqlx::Error::RowNotFound)
            .into_db_error()
            .unwrap_err();

        assert!(matches!(report.current_context(), Error::Internal(..)));
    }
}
