//! Bank Error Types
//!
//! This module provides the core error taxonomy, integrating with the
//! unified `kernel::error::AppError` system at the HTTP boundary.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::fmt;
use thiserror::Error;

/// Bank-specific result type alias
pub type BankResult<T> = Result<T, BankError>;

/// Core error taxonomy
///
/// Every failure in the orchestration core is one of these. Detection always
/// aborts the current operation before anything is persisted; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum BankError {
    /// A lookup that required existence yielded nothing
    #[error("{kind} not found: {lookup}")]
    NotFound { kind: &'static str, lookup: String },

    /// Natural-key collision, on create or on update-to-a-new-key
    #[error("{kind} already exists with key: {key}")]
    AlreadyExists { kind: &'static str, key: String },

    /// A required field failed validation
    #[error("{0}")]
    InvalidData(FieldCode),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BankError {
    /// Not-found error carrying the lookup value for diagnostics
    pub fn not_found(kind: &'static str, lookup: impl fmt::Display) -> Self {
        BankError::NotFound {
            kind,
            lookup: lookup.to_string(),
        }
    }

    /// Already-exists error naming the colliding natural key
    pub fn already_exists(kind: &'static str, key: impl Into<String>) -> Self {
        BankError::AlreadyExists {
            kind,
            key: key.into(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::NotFound { .. } => ErrorKind::NotFound,
            BankError::AlreadyExists { .. } => ErrorKind::Conflict,
            BankError::InvalidData(_) => ErrorKind::BadRequest,
            BankError::Database(_) | BankError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal detail (the sqlx source) is logged but stripped from the
    /// caller-facing message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            BankError::Database(_) => AppError::internal("An internal server error occurred"),
            BankError::Internal(_) => AppError::internal("An internal server error occurred"),
            BankError::InvalidData(field) => {
                AppError::new(self.kind(), self.to_string()).with_code(field.code())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BankError::Database(e) => {
                tracing::error!(error = %e, "Bank database error");
            }
            BankError::Internal(msg) => {
                tracing::error!(message = %msg, "Bank internal error");
            }
            BankError::AlreadyExists { kind, key } => {
                tracing::warn!(kind, key = %key, "Duplicate natural key rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Bank error");
            }
        }
    }
}

impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// FieldCode - stable validation error codes
// ============================================================================

/// Field-specific validation codes
///
/// Stable codes callers can branch on without string-matching the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCode {
    AccountNumberRequired,
    AccountHolderRequired,
    AccountTypeRequired,
    BalanceRequired,
    CurrencyRequired,
    EntityCodeRequired,
    EntityNameRequired,
    EntityTypeRequired,
    EntityCategoryRequired,
    RegistrationNumberRequired,
    AccountTypeUnknown,
    AccountStatusUnknown,
    EntityTypeUnknown,
    EntityCategoryUnknown,
    EntityStatusUnknown,
    RiskLevelUnknown,
}

impl FieldCode {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AccountNumberRequired => "ACCOUNT_NUMBER_REQUIRED",
            Self::AccountHolderRequired => "ACCOUNT_HOLDER_REQUIRED",
            Self::AccountTypeRequired => "ACCOUNT_TYPE_REQUIRED",
            Self::BalanceRequired => "BALANCE_REQUIRED",
            Self::CurrencyRequired => "CURRENCY_REQUIRED",
            Self::EntityCodeRequired => "ENTITY_CODE_REQUIRED",
            Self::EntityNameRequired => "ENTITY_NAME_REQUIRED",
            Self::EntityTypeRequired => "ENTITY_TYPE_REQUIRED",
            Self::EntityCategoryRequired => "ENTITY_CATEGORY_REQUIRED",
            Self::RegistrationNumberRequired => "REGISTRATION_NUMBER_REQUIRED",
            Self::AccountTypeUnknown => "ACCOUNT_TYPE_UNKNOWN",
            Self::AccountStatusUnknown => "ACCOUNT_STATUS_UNKNOWN",
            Self::EntityTypeUnknown => "ENTITY_TYPE_UNKNOWN",
            Self::EntityCategoryUnknown => "ENTITY_CATEGORY_UNKNOWN",
            Self::EntityStatusUnknown => "ENTITY_STATUS_UNKNOWN",
            Self::RiskLevelUnknown => "RISK_LEVEL_UNKNOWN",
        }
    }

    /// User-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AccountNumberRequired => "Account number is mandatory",
            Self::AccountHolderRequired => "Account holder is mandatory",
            Self::AccountTypeRequired => "Account type is mandatory",
            Self::BalanceRequired => "Balance is mandatory",
            Self::CurrencyRequired => "Currency is mandatory",
            Self::EntityCodeRequired => "Entity code is mandatory",
            Self::EntityNameRequired => "Entity name is mandatory",
            Self::EntityTypeRequired => "Entity type is mandatory",
            Self::EntityCategoryRequired => "Entity category is mandatory",
            Self::RegistrationNumberRequired => "Registration number is mandatory",
            Self::AccountTypeUnknown => "Unknown account type",
            Self::AccountStatusUnknown => "Unknown account status",
            Self::EntityTypeUnknown => "Unknown entity type",
            Self::EntityCategoryUnknown => "Unknown entity category",
            Self::EntityStatusUnknown => "Unknown entity status",
            Self::RiskLevelUnknown => "Unknown risk level",
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FieldCode> for BankError {
    fn from(code: FieldCode) -> Self {
        BankError::InvalidData(code)
    }
}
