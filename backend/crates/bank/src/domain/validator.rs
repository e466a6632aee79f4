//! Record Validators
//!
//! Pure required-field checks, run before any duplicate check or
//! persistence. The check order is fixed and the first violation wins;
//! callers rely on that for deterministic error reporting. Blank strings
//! count as missing. Monetary fields only need to be present; sign and
//! precision are not checked.

use crate::domain::entity::{BankAccount, BankingEntity};
use crate::error::{BankResult, FieldCode};

/// Required-field validation for one record kind
pub trait RecordValidator<R>: Send + Sync {
    fn validate(&self, record: &R) -> BankResult<()>;
}

/// Validator for bank accounts
///
/// Order: number -> holder -> type -> balance -> currency.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountValidator;

impl RecordValidator<BankAccount> for AccountValidator {
    fn validate(&self, account: &BankAccount) -> BankResult<()> {
        if account.account_number.trim().is_empty() {
            return Err(FieldCode::AccountNumberRequired.into());
        }
        if account.account_holder.trim().is_empty() {
            return Err(FieldCode::AccountHolderRequired.into());
        }
        if account.account_type.is_none() {
            return Err(FieldCode::AccountTypeRequired.into());
        }
        if account.balance.is_none() {
            return Err(FieldCode::BalanceRequired.into());
        }
        if account.currency.trim().is_empty() {
            return Err(FieldCode::CurrencyRequired.into());
        }
        Ok(())
    }
}

/// Validator for banking entities
///
/// Order: code -> name -> type -> category -> registration number.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityValidator;

impl RecordValidator<BankingEntity> for EntityValidator {
    fn validate(&self, entity: &BankingEntity) -> BankResult<()> {
        if entity.code.trim().is_empty() {
            return Err(FieldCode::EntityCodeRequired.into());
        }
        if entity.name.trim().is_empty() {
            return Err(FieldCode::EntityNameRequired.into());
        }
        if entity.entity_type.is_none() {
            return Err(FieldCode::EntityTypeRequired.into());
        }
        if entity.category.is_none() {
            return Err(FieldCode::EntityCategoryRequired.into());
        }
        if entity.registration_number.trim().is_empty() {
            return Err(FieldCode::RegistrationNumberRequired.into());
        }
        Ok(())
    }
}
