//! Bank Records Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Records, value objects, validators, duplicate checker, store trait
//! - `application/` - Use-case orchestration
//! - `infra/` - PostgreSQL store implementations
//! - `presentation/` - HTTP handlers and DTOs
//!
//! ## Orchestration model
//! - Every state change runs validate -> duplicate-check -> persist, in that order
//! - The duplicate checker is the friendly fast path; the storage UNIQUE
//!   constraint is the authoritative enforcement and its violation maps to the
//!   same `AlreadyExists` error
//! - The service holds no state between calls; absence from storage is a value
//!   (`Ok(None)`), never an error, until a use case requires existence

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::service::{BankAccountService, BankingEntityService, RecordService};
pub use error::{BankError, BankResult, FieldCode};
pub use infra::postgres::{PgAccountStore, PgBankingEntityStore};
pub use presentation::router::{accounts_router, entities_router, reports_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
