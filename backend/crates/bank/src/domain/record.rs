//! Record Trait
//!
//! The bank account and banking entity flows are structurally identical
//! (validator / duplicate checker / service / store). This trait is the
//! seam that lets the orchestration exist once, parameterized over the
//! record type and its natural-key accessor.

/// A persistable business record with a natural key
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable kind name, used in error messages and logs
    const KIND: &'static str;

    /// Storage-assigned identity, absent until first persisted
    fn id(&self) -> Option<i64>;

    /// Externally meaningful unique key (account number, entity code)
    fn natural_key(&self) -> &str;

    /// Replace every mutable field with `data`'s values and stamp the
    /// update timestamp. Identity and creation timestamp are preserved.
    fn apply_update(&mut self, data: Self);
}
