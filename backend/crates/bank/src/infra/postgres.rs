//! PostgreSQL Store Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, BankingEntityId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::record::Record;
use crate::domain::repository::RecordStore;
use crate::domain::value_object::{
    AccountStatus, AccountType, EntityCategory, EntityStatus, EntityType, RiskLevel,
};
use crate::error::{BankError, BankResult, FieldCode};

/// Map a unique-constraint violation to the colliding natural key.
///
/// The pre-persistence duplicate check races with concurrent writers;
/// the constraint is the authority, so its violation gets the same
/// error the checker would have produced.
fn map_unique_violation(err: sqlx::Error, kind: &'static str, key: &str) -> BankError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some("23505") {
            return BankError::already_exists(kind, key);
        }
    }
    BankError::Database(err)
}

// ============================================================================
// Bank Account Store
// ============================================================================

/// PostgreSQL-backed bank account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RecordStore for PgAccountStore {
    type Record = BankAccount;

    async fn save(&self, record: &BankAccount) -> BankResult<BankAccount> {
        let mut saved = record.clone();

        match record.id {
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO accounts (
                        account_number,
                        account_holder,
                        account_type,
                        balance,
                        currency,
                        status,
                        created_at,
                        updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    RETURNING id
                    "#,
                )
                .bind(&record.account_number)
                .bind(&record.account_holder)
                .bind(record.account_type.map(|t| t.id()))
                .bind(record.balance)
                .bind(&record.currency)
                .bind(record.status.id())
                .bind(record.created_at)
                .bind(record.updated_at)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    map_unique_violation(e, BankAccount::KIND, &record.account_number)
                })?;

                saved.id = Some(AccountId::from_i64(id));
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE accounts SET
                        account_number = $2,
                        account_holder = $3,
                        account_type = $4,
                        balance = $5,
                        currency = $6,
                        status = $7,
                        updated_at = $8
                    WHERE id = $1
                    "#,
                )
                .bind(id.as_i64())
                .bind(&record.account_number)
                .bind(&record.account_holder)
                .bind(record.account_type.map(|t| t.id()))
                .bind(record.balance)
                .bind(&record.currency)
                .bind(record.status.id())
                .bind(record.updated_at)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    map_unique_violation(e, BankAccount::KIND, &record.account_number)
                })?;
            }
        }

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> BankResult<Option<BankAccount>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                account_number,
                account_holder,
                account_type,
                balance,
                currency,
                status,
                created_at,
                updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_natural_key(&self, key: &str) -> BankResult<Option<BankAccount>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                account_number,
                account_holder,
                account_type,
                balance,
                currency,
                status,
                created_at,
                updated_at
            FROM accounts
            WHERE account_number = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_all(&self) -> BankResult<Vec<BankAccount>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                account_number,
                account_holder,
                account_type,
                balance,
                currency,
                status,
                created_at,
                updated_at
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_account()).collect()
    }

    async fn find_by_secondary_key(&self, value: &str) -> BankResult<Vec<BankAccount>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                account_number,
                account_holder,
                account_type,
                balance,
                currency,
                status,
                created_at,
                updated_at
            FROM accounts
            WHERE account_holder = $1
            ORDER BY id
            "#,
        )
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_account()).collect()
    }

    async fn delete_by_id(&self, id: i64) -> BankResult<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Banking Entity Store
// ============================================================================

/// PostgreSQL-backed banking entity store
#[derive(Clone)]
pub struct PgBankingEntityStore {
    pool: PgPool,
}

impl PgBankingEntityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RecordStore for PgBankingEntityStore {
    type Record = BankingEntity;

    async fn save(&self, record: &BankingEntity) -> BankResult<BankingEntity> {
        let mut saved = record.clone();

        match record.id {
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO banking_entities (
                        code,
                        name,
                        entity_type,
                        category,
                        registration_number,
                        email,
                        phone,
                        country,
                        risk_level,
                        monthly_volume,
                        status,
                        created_at,
                        updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                    RETURNING id
                    "#,
                )
                .bind(&record.code)
                .bind(&record.name)
                .bind(record.entity_type.map(|t| t.id()))
                .bind(record.category.map(|c| c.id()))
                .bind(&record.registration_number)
                .bind(&record.email)
                .bind(&record.phone)
                .bind(&record.country)
                .bind(record.risk_level.map(|r| r.id()))
                .bind(record.monthly_volume)
                .bind(record.status.id())
                .bind(record.created_at)
                .bind(record.updated_at)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_unique_violation(e, BankingEntity::KIND, &record.code))?;

                saved.id = Some(BankingEntityId::from_i64(id));
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE banking_entities SET
                        code = $2,
                        name = $3,
                        entity_type = $4,
                        category = $5,
                        registration_number = $6,
                        email = $7,
                        phone = $8,
                        country = $9,
                        risk_level = $10,
                        monthly_volume = $11,
                        status = $12,
                        updated_at = $13
                    WHERE id = $1
                    "#,
                )
                .bind(id.as_i64())
                .bind(&record.code)
                .bind(&record.name)
                .bind(record.entity_type.map(|t| t.id()))
                .bind(record.category.map(|c| c.id()))
                .bind(&record.registration_number)
                .bind(&record.email)
                .bind(&record.phone)
                .bind(&record.country)
                .bind(record.risk_level.map(|r| r.id()))
                .bind(record.monthly_volume)
                .bind(record.status.id())
                .bind(record.updated_at)
                .execute(&self.pool)
                .await
                .map_err(|e| map_unique_violation(e, BankingEntity::KIND, &record.code))?;
            }
        }

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> BankResult<Option<BankingEntity>> {
        let row = sqlx::query_as::<_, BankingEntityRow>(
            r#"
            SELECT
                id,
                code,
                name,
                entity_type,
                category,
                registration_number,
                email,
                phone,
                country,
                risk_level,
                monthly_volume,
                status,
                created_at,
                updated_at
            FROM banking_entities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_entity()).transpose()
    }

    async fn find_by_natural_key(&self, key: &str) -> BankResult<Option<BankingEntity>> {
        let row = sqlx::query_as::<_, BankingEntityRow>(
            r#"
            SELECT
                id,
                code,
                name,
                entity_type,
                category,
                registration_number,
                email,
                phone,
                country,
                risk_level,
                monthly_volume,
                status,
                created_at,
                updated_at
            FROM banking_entities
            WHERE code = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_entity()).transpose()
    }

    async fn find_all(&self) -> BankResult<Vec<BankingEntity>> {
        let rows = sqlx::query_as::<_, BankingEntityRow>(
            r#"
            SELECT
                id,
                code,
                name,
                entity_type,
                category,
                registration_number,
                email,
                phone,
                country,
                risk_level,
                monthly_volume,
                status,
                created_at,
                updated_at
            FROM banking_entities
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entity()).collect()
    }

    /// Secondary lookup takes the entity type code ("CUSTOMER", "SUPPLIER", ...).
    /// An unknown code is invalid input, not an empty result.
    async fn find_by_secondary_key(&self, value: &str) -> BankResult<Vec<BankingEntity>> {
        let entity_type = EntityType::from_code(value)
            .ok_or(BankError::InvalidData(FieldCode::EntityTypeUnknown))?;

        let rows = sqlx::query_as::<_, BankingEntityRow>(
            r#"
            SELECT
                id,
                code,
                name,
                entity_type,
                category,
                registration_number,
                email,
                phone,
                country,
                risk_level,
                monthly_volume,
                status,
                created_at,
                updated_at
            FROM banking_entities
            WHERE entity_type = $1
            ORDER BY id
            "#,
        )
        .bind(entity_type.id())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entity()).collect()
    }

    async fn delete_by_id(&self, id: i64) -> BankResult<()> {
        sqlx::query("DELETE FROM banking_entities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    account_number: String,
    account_holder: String,
    account_type: i16,
    balance: Decimal,
    currency: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> BankResult<BankAccount> {
        let account_type = AccountType::from_id(self.account_type).ok_or_else(|| {
            BankError::Internal(format!("Invalid account_type in row: {}", self.account_type))
        })?;

        Ok(BankAccount {
            id: Some(AccountId::from_i64(self.id)),
            account_number: self.account_number,
            account_holder: self.account_holder,
            account_type: Some(account_type),
            balance: Some(self.balance),
            currency: self.currency,
            status: AccountStatus::from_id(self.status).unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BankingEntityRow {
    id: i64,
    code: String,
    name: String,
    entity_type: i16,
    category: i16,
    registration_number: String,
    email: Option<String>,
    phone: Option<String>,
    country: Option<String>,
    risk_level: Option<i16>,
    monthly_volume: Option<Decimal>,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BankingEntityRow {
    fn into_entity(self) -> BankResult<BankingEntity> {
        let entity_type = EntityType::from_id(self.entity_type).ok_or_else(|| {
            BankError::Internal(format!("Invalid entity_type in row: {}", self.entity_type))
        })?;
        let category = EntityCategory::from_id(self.category).ok_or_else(|| {
            BankError::Internal(format!("Invalid category in row: {}", self.category))
        })?;

        Ok(BankingEntity {
            id: Some(BankingEntityId::from_i64(self.id)),
            code: self.code,
            name: self.name,
            entity_type: Some(entity_type),
            category: Some(category),
            registration_number: self.registration_number,
            email: self.email,
            phone: self.phone,
            country: self.country,
            risk_level: self.risk_level.and_then(RiskLevel::from_id),
            monthly_volume: self.monthly_volume,
            status: EntityStatus::from_id(self.status).unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
