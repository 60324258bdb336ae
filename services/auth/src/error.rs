use sea_orm::{DbErr, SqlErr, TransactionError};

use stockroom_core::context::Interrupted;

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// Input failed a required-field or enumerated-value check. Raised before any write.
    #[error("validation failed for field \"{field}\": {reason}")]
    Validation { field: &'static str, reason: String },
    /// The store rejected a write or delete on a uniqueness or referential rule.
    #[error("constraint violated: {message}")]
    Constraint {
        message: String,
        #[source]
        source: DbErr,
    },
    /// A targeted single-entity operation matched no rows.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("auth token expired")]
    TokenExpired,
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

/// Resource name reported by [`AuthServiceError::NotFound`] for tokens.
pub const AUTH_TOKEN: &str = "auth token";

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::Constraint { .. } => "CONSTRAINT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Interrupted(Interrupted::Canceled) => "CANCELED",
            Self::Interrupted(Interrupted::DeadlineExceeded) => "DEADLINE_EXCEEDED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn token_not_found() -> Self {
        Self::NotFound { resource: AUTH_TOKEN }
    }

    /// Classify a store error: constraint violations become [`Self::Constraint`],
    /// everything else is wrapped as internal with `context`.
    pub fn from_db(err: DbErr, context: &'static str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_)) => {
                Self::Constraint {
                    message: err.to_string(),
                    source: err,
                }
            }
            _ => Self::Internal(anyhow::Error::new(err).context(context)),
        }
    }

    pub fn from_transaction(err: TransactionError<DbErr>, context: &'static str) -> Self {
        match err {
            TransactionError::Connection(e) | TransactionError::Transaction(e) => {
                Self::from_db(e, context)
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
