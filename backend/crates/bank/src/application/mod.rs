//! Application layer

pub mod service;

pub use service::{BankAccountService, BankingEntityService, RecordService};
