//! Translation of pool and Diesel failures into port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::{AppointmentRepositoryError, ClientRepositoryError, DadRepositoryError};

/// Port errors with connection and query variants.
pub(super) trait StorageError {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
}

macro_rules! impl_storage_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl StorageError for $error {
                fn connection(message: String) -> Self {
                    <$error>::connection(message)
                }

                fn query(message: String) -> Self {
                    <$error>::query(message)
                }
            }
        )+
    };
}

impl_storage_error!(
    ClientRepositoryError,
    DadRepositoryError,
    AppointmentRepositoryError,
);

pub(super) fn map_pool_error<E: StorageError>(error: PoolError) -> E {
    debug!(%error, "database checkout failed");
    E::connection(error.message().to_owned())
}

/// Driver details stay in debug logs; callers only see a generic message.
pub(super) fn map_diesel_error<E: StorageError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection("database connection closed".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            E::query("duplicate record".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            E::query("referenced record does not exist".to_owned())
        }
        DieselError::NotFound => E::query("record not found".to_owned()),
        _ => E::query("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let error: DadRepositoryError = map_pool_error(PoolError::Checkout {
            message: "timed out".to_owned(),
        });
        assert_eq!(error, DadRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn missing_rows_are_query_errors() {
        let error: ClientRepositoryError = map_diesel_error(DieselError::NotFound);
        assert_eq!(error, ClientRepositoryError::query("record not found"));
    }

    #[rstest]
    fn rollback_is_a_generic_query_error() {
        let error: AppointmentRepositoryError = map_diesel_error(DieselError::RollbackTransaction);
        assert_eq!(error, AppointmentRepositoryError::query("database error"));
    }
}
