use thiserror::Error;

/// What went wrong in a repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoErrorKind {
    /// No row matched the given id
    NotFound,
    /// More than one row matched an id that should be unique
    AmbiguousResult,
    /// A mutation affected a different number of rows than exactly one
    UnexpectedRowCount,
    /// The database driver or a constraint rejected the statement
    Database,
}

#[derive(Error, Debug)]
#[error("{message}")]
pub struct RepoError {
    kind: RepoErrorKind,
    message: String,
}

impl RepoError {
    pub fn new(kind: RepoErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> RepoErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        Self::new(RepoErrorKind::Database, e.to_string())
    }
}

/// Every mutation addresses exactly one row by its id, so anything else
/// than one affected row is an error. Zero rows means the id is unknown.
pub fn ensure_single_row_affected(rows_affected: u64) -> Result<(), RepoError> {
    match rows_affected {
        1 => Ok(()),
        0 => Err(RepoError::new(
            RepoErrorKind::NotFound,
            "expected to affect 1 row, affected 0",
        )),
        n => Err(RepoError::new(
            RepoErrorKind::UnexpectedRowCount,
            format!("expected to affect 1 row, affected {}", n),
        )),
    }
}

/// An insert has to create exactly one row.
pub fn ensure_single_row_inserted(rows_affected: u64) -> Result<(), RepoError> {
    if rows_affected != 1 {
        return Err(RepoError::new(
            RepoErrorKind::UnexpectedRowCount,
            format!("expected to affect 1 row, affected {}", rows_affected),
        ));
    }
    Ok(())
}

/// Extracts the single row of a lookup by id.
pub fn expect_single_row<T>(mut rows: Vec<T>) -> Result<T, RepoError> {
    match rows.len() {
        0 => Err(RepoError::new(RepoErrorKind::NotFound, "company not found")),
        1 => Ok(rows.remove(0)),
        _ => Err(RepoError::new(
            RepoErrorKind::AmbiguousResult,
            "more than one company found",
        )),
    }
}
