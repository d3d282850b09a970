use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    /// Query-layer faults are passed through untouched.
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("Collaborator not bound: {collaborator}")]
    Unbound { collaborator: &'static str },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn unbound(collaborator: &'static str) -> Self {
        Self::Unbound { collaborator }
    }

    /// Stable code attached to failure logs as the `code` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Db(DbErr::Conn(_)) | AppError::Db(DbErr::ConnectionAcquire(_)) => {
                "DB_UNAVAILABLE"
            }
            AppError::Db(_) => "DB_ERROR",
            AppError::Unbound { .. } => "UNBOUND",
        }
    }
}
