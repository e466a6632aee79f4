//! Persistence Port
//!
//! Interface for data persistence. Implementation is in the infra layer.
//! Absence is a value (`Ok(None)` / empty vec), never an error; only
//! underlying I/O failures surface, as `BankError::Database`.

use crate::domain::record::Record;
use crate::error::BankResult;

/// Storage contract for one record kind
#[trait_variant::make(RecordStore: Send)]
pub trait LocalRecordStore {
    type Record: Record;

    /// Persist the record; assigns identity on first save
    async fn save(&self, record: &Self::Record) -> BankResult<Self::Record>;

    /// Find record by storage identity
    async fn find_by_id(&self, id: i64) -> BankResult<Option<Self::Record>>;

    /// Find record by natural key
    async fn find_by_natural_key(&self, key: &str) -> BankResult<Option<Self::Record>>;

    /// Fetch every record (order unspecified)
    async fn find_all(&self) -> BankResult<Vec<Self::Record>>;

    /// Filter by the secondary field (account holder / entity type code)
    async fn find_by_secondary_key(&self, value: &str) -> BankResult<Vec<Self::Record>>;

    /// Delete by storage identity; existence is the caller's concern
    async fn delete_by_id(&self, id: i64) -> BankResult<()>;
}
