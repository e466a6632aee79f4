//! Bank Account Entity

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use rust_decimal::Decimal;

use crate::domain::record::Record;
use crate::domain::value_object::{AccountStatus, AccountType};

/// Bank account record
///
/// Enum-typed and monetary fields are `Option` because a record arriving
/// from the boundary may be incomplete; the validator is the gate before
/// persistence, not the type system.
#[derive(Debug, Clone)]
pub struct BankAccount {
    /// Storage-assigned identity, `None` until first persisted
    pub id: Option<AccountId>,
    /// Natural key, unique across accounts
    pub account_number: String,
    pub account_holder: String,
    pub account_type: Option<AccountType>,
    /// Exact decimal; no sign or precision rule is enforced
    pub balance: Option<Decimal>,
    pub currency: String,
    pub status: AccountStatus,
    /// Set once at construction
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    /// Create a new, not-yet-persisted account
    pub fn new(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        account_type: AccountType,
        balance: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            account_number: account_number.into(),
            account_holder: account_holder.into(),
            account_type: Some(account_type),
            balance: Some(balance),
            currency: currency.into(),
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account is active
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Suspend the account
    ///
    /// In-memory only; persisting the transition is the caller's job.
    pub fn deactivate(&mut self) {
        self.status = AccountStatus::Suspended;
        self.updated_at = Utc::now();
        tracing::info!(account_number = %self.account_number, "Account deactivated");
    }

    /// Close the account
    pub fn close(&mut self) {
        self.status = AccountStatus::Closed;
        self.updated_at = Utc::now();
        tracing::info!(account_number = %self.account_number, "Account closed");
    }
}

impl Record for BankAccount {
    const KIND: &'static str = "account";

    fn id(&self) -> Option<i64> {
        self.id.map(|id| id.as_i64())
    }

    fn natural_key(&self) -> &str {
        &self.account_number
    }

    fn apply_update(&mut self, data: Self) {
        self.account_number = data.account_number;
        self.account_holder = data.account_holder;
        self.account_type = data.account_type;
        self.balance = data.balance;
        self.currency = data.currency;
        self.status = data.status;
        self.updated_at = Utc::now();
    }
}
