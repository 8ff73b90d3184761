//! Translation of bb8 and Diesel failures into port errors.
//!
//! Raw driver messages are logged at debug level only. Port errors carry a
//! short category message so that nothing from the driver reaches clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{AuthorRepositoryError, BookRepositoryError};

use super::pool::PoolError;

/// Port errors that distinguish connectivity from statement failures.
pub(crate) trait StorageFailure {
    fn connection_failure(message: String) -> Self;
    fn query_failure(message: String) -> Self;
}

impl StorageFailure for AuthorRepositoryError {
    fn connection_failure(message: String) -> Self {
        Self::connection(message)
    }

    fn query_failure(message: String) -> Self {
        Self::query(message)
    }
}

impl StorageFailure for BookRepositoryError {
    fn connection_failure(message: String) -> Self {
        Self::connection(message)
    }

    fn query_failure(message: String) -> Self {
        Self::query(message)
    }
}

/// Checkout and build failures are connectivity problems.
pub(crate) fn map_pool_error<E: StorageFailure>(error: PoolError) -> E {
    debug!(error = %error, "connection checkout failed");
    E::connection_failure(error.message().to_owned())
}

/// Map a Diesel error, keeping dropped connections apart from bad statements.
pub(crate) fn map_diesel_error<E: StorageFailure>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            E::connection_failure("database connection error".to_owned())
        }
        DieselError::NotFound => E::query_failure("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query_failure("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            E::query_failure("unique constraint violated".to_owned())
        }
        _ => E::query_failure("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let error: AuthorRepositoryError =
            map_pool_error(PoolError::checkout("password authentication failed"));

        assert_eq!(
            error,
            AuthorRepositoryError::connection("password authentication failed")
        );
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        let error: BookRepositoryError = map_diesel_error(DieselError::NotFound);

        assert_eq!(error, BookRepositoryError::query("record not found"));
    }

    #[rstest]
    fn broken_transaction_manager_is_a_connection_problem() {
        let error: BookRepositoryError = map_diesel_error(DieselError::BrokenTransactionManager);

        assert!(matches!(error, BookRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn closed_connection_is_a_connection_problem() {
        let error: AuthorRepositoryError = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));

        assert!(matches!(error, AuthorRepositoryError::Connection { .. }));
    }
}
