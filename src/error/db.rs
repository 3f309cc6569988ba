use sea_orm::{DbErr, RuntimeErr};
use sqlx::{
    error::{DatabaseError as SqlxDatabaseError, ErrorKind},
    Error as SqlxError,
};

/// Recognizes constraint violations reported by the store.
///
/// Postgres names the violated constraint, so the name has to match. Sqlite
/// only reports the kind of the violation and matches any constraint name, so
/// when an error is checked against several constraints of the same kind the
/// first check wins. Callers that need the exact constraint on Sqlite look the
/// references up before writing.
pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        get_database_error(self).is_some_and(|db_err| {
            matches!(db_err.kind(), ErrorKind::UniqueViolation)
                && is_constraint(db_err, constraint)
        })
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        get_database_error(self).is_some_and(|db_err| {
            matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
                && is_constraint(db_err, constraint)
        })
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn SqlxDatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

#[allow(clippy::borrowed_box)]
fn is_constraint(db_err: &Box<dyn SqlxDatabaseError + 'static>, constraint: &str) -> bool {
    db_err.constraint().map_or(true, |name| name == constraint)
}
