//! Common ID Types
//!
//! Type-safe ID wrappers for domain records. Identity values are assigned
//! by the persistence layer (BIGSERIAL), never generated in the domain,
//! so there is no constructor that mints a fresh ID.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AccountId = Id<markers::Account>;
/// let id = AccountId::from_i64(1);
/// assert_eq!(id.as_i64(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a storage-assigned identity value
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying identity value
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different record IDs
pub mod markers {
    /// Marker for bank account IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Account;

    /// Marker for banking entity IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BankingEntity;
}

/// Type aliases for common IDs
pub type AccountId = Id<markers::Account>;
pub type BankingEntityId = Id<markers::BankingEntity>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let account_id: AccountId = Id::from_i64(1);
        let entity_id: BankingEntityId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _a: i64 = account_id.as_i64();
        let _e: i64 = entity_id.as_i64();
    }

    #[test]
    fn test_id_from_i64() {
        let id: AccountId = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
