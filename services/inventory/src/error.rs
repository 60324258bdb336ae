use sea_orm::{DbErr, SqlErr, TransactionError};

use stockroom_core::context::Interrupted;

/// Inventory service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum InventoryServiceError {
    #[error("validation failed for field \"{field}\": {reason}")]
    Validation { field: &'static str, reason: String },
    /// Raised by the store, e.g. seeding a group that does not exist.
    #[error("constraint violated: {message}")]
    Constraint {
        message: String,
        #[source]
        source: DbErr,
    },
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl InventoryServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::Constraint { .. } => "CONSTRAINT",
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

    pub fn from_transaction(err: TransactionError<DbErr>, context: &'static str) -> Self {
        let err = match err {
            TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
        };
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
}
