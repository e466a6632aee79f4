//! Entity Type Value Object
//!
//! Also serves as the secondary lookup key for banking entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of banking entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum EntityType {
    Customer = 0,
    Supplier = 1,
    Branch = 2,
    Regulator = 3,
    Partner = 4,
    Intermediary = 5,
}

impl EntityType {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Supplier => "SUPPLIER",
            Self::Branch => "BRANCH",
            Self::Regulator => "REGULATOR",
            Self::Partner => "PARTNER",
            Self::Intermediary => "INTERMEDIARY",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Customer),
            1 => Some(Self::Supplier),
            2 => Some(Self::Branch),
            3 => Some(Self::Regulator),
            4 => Some(Self::Partner),
            5 => Some(Self::Intermediary),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CUSTOMER" => Some(Self::Customer),
            "SUPPLIER" => Some(Self::Supplier),
            "BRANCH" => Some(Self::Branch),
            "REGULATOR" => Some(Self::Regulator),
            "PARTNER" => Some(Self::Partner),
            "INTERMEDIARY" => Some(Self::Intermediary),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(EntityType::from_id(0), Some(EntityType::Customer));
        assert_eq!(EntityType::from_id(5), Some(EntityType::Intermediary));
        assert_eq!(EntityType::from_id(42), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(EntityType::from_code("CUSTOMER"), Some(EntityType::Customer));
        assert_eq!(EntityType::from_code("SUPPLIER"), Some(EntityType::Supplier));
        assert_eq!(EntityType::from_code("REGULATOR"), Some(EntityType::Regulator));
        assert_eq!(EntityType::from_code("VENDOR"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityType::Branch.to_string(), "BRANCH");
        assert_eq!(EntityType::Partner.to_string(), "PARTNER");
    }
}
