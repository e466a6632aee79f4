//! Infrastructure layer

pub mod postgres;

pub use postgres::{PgAccountStore, PgBankingEntityStore};
