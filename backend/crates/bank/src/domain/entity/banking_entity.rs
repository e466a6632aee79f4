//! Banking Entity Record
//!
//! Counterparties the bank deals with: customers, suppliers, branches,
//! regulators, partners, intermediaries.

use chrono::{DateTime, Utc};
use kernel::id::BankingEntityId;
use rust_decimal::Decimal;

use crate::domain::record::Record;
use crate::domain::value_object::{EntityCategory, EntityStatus, EntityType, RiskLevel};

/// Banking entity record
#[derive(Debug, Clone)]
pub struct BankingEntity {
    /// Storage-assigned identity, `None` until first persisted
    pub id: Option<BankingEntityId>,
    /// Natural key, unique across entities
    pub code: String,
    pub name: String,
    pub entity_type: Option<EntityType>,
    pub category: Option<EntityCategory>,
    pub registration_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub risk_level: Option<RiskLevel>,
    /// Exact decimal; no sign rule is enforced
    pub monthly_volume: Option<Decimal>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BankingEntity {
    /// Create a new, not-yet-persisted entity with the required fields.
    /// Contact and risk attributes start empty and can be set directly.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        entity_type: EntityType,
        category: EntityCategory,
        registration_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            entity_type: Some(entity_type),
            category: Some(category),
            registration_number: registration_number.into(),
            email: None,
            phone: None,
            country: None,
            risk_level: None,
            monthly_volume: None,
            status: EntityStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the entity is active
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }

    /// Deactivate the entity
    ///
    /// In-memory only; persisting the transition is the caller's job.
    pub fn deactivate(&mut self) {
        self.status = EntityStatus::Inactive;
        self.updated_at = Utc::now();
        tracing::info!(code = %self.code, "Entity deactivated");
    }

    /// Suspend the entity
    pub fn suspend(&mut self) {
        self.status = EntityStatus::Suspended;
        self.updated_at = Utc::now();
        tracing::info!(code = %self.code, "Entity suspended");
    }
}

impl Record for BankingEntity {
    const KIND: &'static str = "entity";

    fn id(&self) -> Option<i64> {
        self.id.map(|id| id.as_i64())
    }

    fn natural_key(&self) -> &str {
        &self.code
    }

    fn apply_update(&mut self, data: Self) {
        self.code = data.code;
        self.name = data.name;
        self.entity_type = data.entity_type;
        self.category = data.category;
        self.registration_number = data.registration_number;
        self.email = data.email;
        self.phone = data.phone;
        self.country = data.country;
        self.risk_level = data.risk_level;
        self.monthly_volume = data.monthly_volume;
        self.status = data.status;
        self.updated_at = Utc::now();
    }
}
