//! API DTOs (Data Transfer Objects)
//!
//! Enum-typed fields travel as their string codes ("CHECKING",
//! "CUSTOMER", ...). Unknown codes are rejected as invalid data at the
//! boundary; absent codes stay absent so the validator can report the
//! missing field with its own code. Monetary amounts travel as decimal
//! strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::value_object::{
    AccountStatus, AccountType, EntityCategory, EntityStatus, EntityType, RiskLevel,
};
use crate::error::{BankResult, FieldCode};

/// Request body for creating or updating an account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_holder: String,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl AccountPayload {
    /// Build the domain record, rejecting unknown enum codes.
    /// Missing values stay missing for the validator to report.
    pub fn into_domain(self) -> BankResult<BankAccount> {
        let account_type = self
            .account_type
            .as_deref()
            .map(|code| AccountType::from_code(code).ok_or(FieldCode::AccountTypeUnknown))
            .transpose()?;

        let status = match self.status.as_deref() {
            Some(code) => {
                AccountStatus::from_code(code).ok_or(FieldCode::AccountStatusUnknown)?
            }
            None => AccountStatus::default(),
        };

        let now = Utc::now();
        Ok(BankAccount {
            id: None,
            account_number: self.account_number,
            account_holder: self.account_holder,
            account_type,
            balance: self.balance,
            currency: self.currency,
            status,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Account representation on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Option<i64>,
    pub account_number: String,
    pub account_holder: String,
    pub account_type: Option<&'static str>,
    pub balance: Option<Decimal>,
    pub currency: String,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BankAccount> for AccountResponse {
    fn from(account: BankAccount) -> Self {
        Self {
            id: account.id.map(|id| id.as_i64()),
            account_number: account.account_number,
            account_holder: account.account_holder,
            account_type: account.account_type.map(|t| t.code()),
            balance: account.balance,
            currency: account.currency,
            status: account.status.code(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Request body for creating or updating a banking entity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub monthly_volume: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

impl EntityPayload {
    pub fn into_domain(self) -> BankResult<BankingEntity> {
        let entity_type = self
            .entity_type
            .as_deref()
            .map(|code| EntityType::from_code(code).ok_or(FieldCode::EntityTypeUnknown))
            .transpose()?;

        let category = self
            .category
            .as_deref()
            .map(|code| EntityCategory::from_code(code).ok_or(FieldCode::EntityCategoryUnknown))
            .transpose()?;

        let risk_level = self
            .risk_level
            .as_deref()
            .map(|code| RiskLevel::from_code(code).ok_or(FieldCode::RiskLevelUnknown))
            .transpose()?;

        let status = match self.status.as_deref() {
            Some(code) => EntityStatus::from_code(code).ok_or(FieldCode::EntityStatusUnknown)?,
            None => EntityStatus::default(),
        };

        let now = Utc::now();
        Ok(BankingEntity {
            id: None,
            code: self.code,
            name: self.name,
            entity_type,
            category,
            registration_number: self.registration_number,
            email: self.email,
            phone: self.phone,
            country: self.country,
            risk_level,
            monthly_volume: self.monthly_volume,
            status,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Banking entity representation on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityResponse {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub entity_type: Option<&'static str>,
    pub category: Option<&'static str>,
    pub registration_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub risk_level: Option<&'static str>,
    pub monthly_volume: Option<Decimal>,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BankingEntity> for EntityResponse {
    fn from(entity: BankingEntity) -> Self {
        Self {
            id: entity.id.map(|id| id.as_i64()),
            code: entity.code,
            name: entity.name,
            entity_type: entity.entity_type.map(|t| t.code()),
            category: entity.category.map(|c| c.code()),
            registration_number: entity.registration_number,
            email: entity.email,
            phone: entity.phone,
            country: entity.country,
            risk_level: entity.risk_level.map(|r| r.code()),
            monthly_volume: entity.monthly_volume,
            status: entity.status.code(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BankError;

    #[test]
    fn test_unknown_account_type_is_invalid_data() {
        let payload = AccountPayload {
            account_number: "123456789".into(),
            account_holder: "John Doe".into(),
            account_type: Some("PREMIUM".into()),
            balance: Some(Decimal::new(100000, 2)),
            currency: "USD".into(),
            status: None,
        };
        match payload.into_domain() {
            Err(BankError::InvalidData(code)) => {
                assert_eq!(code, FieldCode::AccountTypeUnknown);
            }
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_account_type_stays_missing() {
        let payload = AccountPayload {
            account_number: "123456789".into(),
            account_holder: "John Doe".into(),
            account_type: None,
            balance: None,
            currency: "USD".into(),
            status: None,
        };
        let account = payload.into_domain().unwrap();
        assert!(account.account_type.is_none());
        assert!(account.balance.is_none());
        assert_eq!(account.status, AccountStatus::Active);
    }

    #[test]
    fn test_status_round_trips_through_codes() {
        let payload = AccountPayload {
            account_number: "123456789".into(),
            account_holder: "John Doe".into(),
            account_type: Some("SAVINGS".into()),
            balance: Some(Decimal::new(50000, 2)),
            currency: "EUR".into(),
            status: Some("SUSPENDED".into()),
        };
        let account = payload.into_domain().unwrap();
        assert_eq!(account.status, AccountStatus::Suspended);
        let response = AccountResponse::from(account);
        assert_eq!(response.status, "SUSPENDED");
        assert_eq!(response.account_type, Some("SAVINGS"));
    }

    #[test]
    fn test_entity_payload_unknown_risk_level() {
        let payload = EntityPayload {
            code: "ENT001".into(),
            name: "Acme Corp".into(),
            entity_type: Some("CUSTOMER".into()),
            category: Some("CORPORATE".into()),
            registration_number: "123456789".into(),
            email: None,
            phone: None,
            country: None,
            risk_level: Some("EXTREME".into()),
            monthly_volume: None,
            status: None,
        };
        match payload.into_domain() {
            Err(BankError::InvalidData(code)) => {
                assert_eq!(code, FieldCode::RiskLevelUnknown);
            }
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn test_balance_serializes_as_string() {
        let response = AccountResponse {
            id: Some(1),
            account_number: "123456789".into(),
            account_holder: "John Doe".into(),
            account_type: Some("CHECKING"),
            balance: Some(Decimal::new(100000, 2)),
            currency: "USD".into(),
            status: "ACTIVE",
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["balance"], serde_json::json!("1000.00"));
        assert_eq!(json["accountNumber"], serde_json::json!("123456789"));
    }
}
