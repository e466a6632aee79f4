//! Domain entities

pub mod bank_account;
pub mod banking_entity;

pub use bank_account::BankAccount;
pub use banking_entity::BankingEntity;
