//! Account Reports
//!
//! Read-only aggregations over the account store. Totals are exact
//! decimal sums; accounts without a balance contribute zero.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entity::BankAccount;
use crate::domain::repository::RecordStore;
use crate::error::BankResult;
use crate::presentation::dto::AccountResponse;
use crate::presentation::handlers::AccountAppState;

/// Response for GET /api/v1/reports/accounts-by-holder/{account_holder}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderReportResponse {
    pub account_holder: String,
    pub account_count: usize,
    pub total_balance: Decimal,
    pub accounts: Vec<AccountResponse>,
}

/// Response for GET /api/v1/reports/general-summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_accounts: usize,
    pub total_balance: Decimal,
    pub generated_at: DateTime<Utc>,
    pub details: Vec<AccountResponse>,
}

fn sum_balances(accounts: &[BankAccount]) -> Decimal {
    accounts
        .iter()
        .filter_map(|a| a.balance)
        .fold(Decimal::ZERO, |acc, b| acc + b)
}

/// GET /api/v1/reports/accounts-by-holder/{account_holder}
pub async fn accounts_by_holder<S>(
    State(state): State<AccountAppState<S>>,
    Path(account_holder): Path<String>,
) -> BankResult<Json<HolderReportResponse>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let accounts = state.service.get_by_secondary_key(&account_holder).await?;
    let total_balance = sum_balances(&accounts);

    Ok(Json(HolderReportResponse {
        account_holder,
        account_count: accounts.len(),
        total_balance,
        accounts: accounts.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/reports/general-summary
pub async fn general_summary<S>(
    State(state): State<AccountAppState<S>>,
) -> BankResult<Json<SummaryResponse>>
where
    S: RecordStore<Record = BankAccount> + Clone + Send + Sync + 'static,
{
    let accounts = state.service.get_all().await?;
    let total_balance = sum_balances(&accounts);

    Ok(Json(SummaryResponse {
        total_accounts: accounts.len(),
        total_balance,
        generated_at: Utc::now(),
        details: accounts.into_iter().map(Into::into).collect(),
    }))
}
