//! Account Type Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountType {
    /// Transactional account
    Checking = 0,

    /// Interest-bearing account
    Savings = 1,
}

impl AccountType {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Checking),
            1 => Some(Self::Savings),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHECKING" => Some(Self::Checking),
            "SAVINGS" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(AccountType::from_id(0), Some(AccountType::Checking));
        assert_eq!(AccountType::from_id(1), Some(AccountType::Savings));
        assert_eq!(AccountType::from_id(99), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(AccountType::from_code("CHECKING"), Some(AccountType::Checking));
        assert_eq!(AccountType::from_code("SAVINGS"), Some(AccountType::Savings));
        assert_eq!(AccountType::from_code("checking"), None);
        assert_eq!(AccountType::from_code("PREMIUM"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountType::Checking.to_string(), "CHECKING");
        assert_eq!(AccountType::Savings.to_string(), "SAVINGS");
    }
}
