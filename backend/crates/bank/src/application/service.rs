//! Record Use-Case Service
//!
//! Stateless orchestration over validator, duplicate checker, and store.
//! Every operation is a single pass: validate, check, persist. Each
//! failure aborts before storage is touched; nothing is retried here.

use std::sync::Arc;

use crate::domain::checker::DuplicateChecker;
use crate::domain::entity::{BankAccount, BankingEntity};
use crate::domain::record::Record;
use crate::domain::repository::RecordStore;
use crate::domain::validator::{AccountValidator, EntityValidator, RecordValidator};
use crate::error::{BankError, BankResult};

/// Use-case orchestration for one record kind
///
/// Holds no per-request state beyond its collaborators, so one instance
/// serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct RecordService<S, V> {
    store: Arc<S>,
    validator: V,
    checker: DuplicateChecker<S>,
}

/// Bank account use cases
pub type BankAccountService<S> = RecordService<S, AccountValidator>;

/// Banking entity use cases
pub type BankingEntityService<S> = RecordService<S, EntityValidator>;

impl<S, V> RecordService<S, V>
where
    S: RecordStore,
    V: RecordValidator<S::Record>,
{
    pub fn new(store: Arc<S>, validator: V) -> Self {
        let checker = DuplicateChecker::new(Arc::clone(&store));
        Self {
            store,
            validator,
            checker,
        }
    }

    /// Create a record: validate, check the natural key, persist.
    /// Validation runs first, so bad data wins over a duplicate key.
    pub async fn create(&self, record: S::Record) -> BankResult<S::Record> {
        tracing::debug!(
            kind = S::Record::KIND,
            key = record.natural_key(),
            "Creating record"
        );
        self.validator.validate(&record)?;
        self.checker.check_on_create(&record).await?;
        let saved = self.store.save(&record).await?;
        tracing::info!(
            kind = S::Record::KIND,
            id = saved.id(),
            key = saved.natural_key(),
            "Record created"
        );
        Ok(saved)
    }

    /// Fetch by storage identity; absence is `NotFound` naming the id
    pub async fn get_by_id(&self, id: i64) -> BankResult<S::Record> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BankError::not_found(S::Record::KIND, id))
    }

    /// Fetch by natural key; absence is `NotFound` naming the key
    pub async fn get_by_natural_key(&self, key: &str) -> BankResult<S::Record> {
        self.store
            .find_by_natural_key(key)
            .await?
            .ok_or_else(|| BankError::not_found(S::Record::KIND, key))
    }

    /// Fetch every record; an empty store yields an empty vec
    pub async fn get_all(&self) -> BankResult<Vec<S::Record>> {
        self.store.find_all().await
    }

    /// Filter by the secondary field; no match is an empty vec, not an error
    pub async fn get_by_secondary_key(&self, value: &str) -> BankResult<Vec<S::Record>> {
        self.store.find_by_secondary_key(value).await
    }

    /// Update the record at `id` with `data`'s field values.
    /// Identity and creation timestamp of the stored record survive.
    pub async fn update(&self, id: i64, data: S::Record) -> BankResult<S::Record> {
        self.validator.validate(&data)?;
        self.checker.check_on_update(id, &data).await?;
        let mut current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BankError::not_found(S::Record::KIND, id))?;
        current.apply_update(data);
        let saved = self.store.save(&current).await?;
        tracing::info!(kind = S::Record::KIND, id, "Record updated");
        Ok(saved)
    }

    /// Delete the record at `id`; a missing target is `NotFound`
    pub async fn delete(&self, id: i64) -> BankResult<()> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(BankError::not_found(S::Record::KIND, id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(kind = S::Record::KIND, id, "Record deleted");
        Ok(())
    }
}

impl<S> BankAccountService<S>
where
    S: RecordStore<Record = BankAccount>,
{
    /// Account service with the standard validator
    pub fn for_accounts(store: Arc<S>) -> Self {
        Self::new(store, AccountValidator)
    }
}

impl<S> BankingEntityService<S>
where
    S: RecordStore<Record = BankingEntity>,
{
    /// Entity service with the standard validator
    pub fn for_entities(store: Arc<S>) -> Self {
        Self::new(store, EntityValidator)
    }
}
