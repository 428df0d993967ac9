use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// A lookup by a unique key matched more than one row
    #[error("Invariant violated for {entity}: {message}")]
    InvariantViolation { entity: &'static str, message: String },

    /// A stored value could not be decoded into its domain type
    #[error("Malformed value in column {column}: {message}")]
    MalformedColumn { column: String, message: String },

    /// Check constraint violation
    #[error("Check constraint violation")]
    CheckViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::ColumnDecode { index, source } => DbError::MalformedColumn {
                column: index.clone(),
                message: source.to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => DbError::CheckViolation {
                constraint: db_err.constraint().map(|s| s.to_string()),
                table: db_err.table().map(|s| s.to_string()),
                message: db_err.message().to_string(),
            },
            // All other sqlx errors are non-recoverable - convert to anyhow with context
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Reduce the rows of a lookup by unique key to the single expected match.
///
/// Callers should fetch at most two rows: that is enough to tell "exactly one" apart from
/// "more than one" without reading the whole result.
pub(crate) fn exactly_one<T>(mut rows: Vec<T>, entity: &'static str) -> Result<T> {
    match rows.len() {
        0 => Err(DbError::NotFound),
        1 => Ok(rows.remove(0)),
        n => {
            tracing::error!(entity, matched = n, "unique key lookup matched more than one row");
            Err(DbError::InvariantViolation {
                entity,
                message: format!("expected a single row, found at least {n}"),
            })
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
