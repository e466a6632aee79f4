//! Duplicate Checker
//!
//! Natural-key collision detection, shared by both record kinds. Runs
//! after validation and before persistence. The storage-level unique
//! constraint remains authoritative for concurrent writers; this check
//! exists to give a precise error before touching storage.

use std::sync::Arc;

use crate::domain::record::Record;
use crate::domain::repository::RecordStore;
use crate::error::{BankError, BankResult};

/// Pre-persistence natural-key collision check
#[derive(Debug, Clone)]
pub struct DuplicateChecker<S> {
    store: Arc<S>,
}

impl<S> DuplicateChecker<S>
where
    S: RecordStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reject creation when any record already holds the natural key
    pub async fn check_on_create(&self, record: &S::Record) -> BankResult<()> {
        let key = record.natural_key();
        if self.store.find_by_natural_key(key).await?.is_some() {
            return Err(BankError::already_exists(S::Record::KIND, key));
        }
        Ok(())
    }

    /// Reject an update whose target is missing or whose new natural key
    /// belongs to a different record. Keeping one's own key is allowed.
    pub async fn check_on_update(&self, id: i64, data: &S::Record) -> BankResult<()> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(BankError::not_found(S::Record::KIND, id));
        }
        let key = data.natural_key();
        if let Some(holder) = self.store.find_by_natural_key(key).await? {
            if holder.id() != Some(id) {
                return Err(BankError::already_exists(S::Record::KIND, key));
            }
        }
        Ok(())
    }
}
