//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` to `RepositoryError`. Constraint failures
//! become semantic variants (UNIQUE and PRIMARY KEY to `AlreadyExists`).

use lifequest_core::storage::RepositoryError;

fn is_constraint(err: &rusqlite::Error, extended_code: std::os::raw::c_int) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.extended_code == extended_code)
}

/// Maps a rusqlite error; `key` names the record or the conflicting value.
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str, key: &str) -> RepositoryError {
    if is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
        || is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    {
        return RepositoryError::already_exists(entity_type, key);
    }
    if is_constraint(err, rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) {
        return RepositoryError::InvalidData(format!(
            "Foreign key constraint violation for {entity_type}"
        ));
    }

    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::CannotOpen => {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::not_found(entity_type, key),
        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::InvalidData(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the single entry point for error mapping in async code.
pub fn map_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    key: impl Into<String>,
) -> RepositoryError {
    let key = key.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &key)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn constraint(extended_code: std::os::raw::c_int) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_unique_violation_names_the_conflicting_key() {
        let result = map_error(constraint(ffi::SQLITE_CONSTRAINT_UNIQUE), "Volume", "42");

        assert_eq!(result, RepositoryError::already_exists("Volume", "42"));
    }

    #[test]
    fn test_foreign_key_maps_to_invalid_data() {
        let result = map_error(constraint(ffi::SQLITE_CONSTRAINT_FOREIGNKEY), "UserPokemon", "x");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_error(err, "Habit", "abc-123");

        assert_eq!(result, RepositoryError::not_found("Habit", "abc-123"));
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("boom")));

        assert!(matches!(
            map_error(err, "Note", "n"),
            RepositoryError::QueryFailed(_)
        ));
    }
}
