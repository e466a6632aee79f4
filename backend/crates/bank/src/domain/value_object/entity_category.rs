//! Entity Category Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal category of a banking entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum EntityCategory {
    Corporate = 0,
    Individual = 1,
}

impl EntityCategory {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Corporate => "CORPORATE",
            Self::Individual => "INDIVIDUAL",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Corporate),
            1 => Some(Self::Individual),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CORPORATE" => Some(Self::Corporate),
            "INDIVIDUAL" => Some(Self::Individual),
            _ => None,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips() {
        assert_eq!(EntityCategory::from_id(0), Some(EntityCategory::Corporate));
        assert_eq!(EntityCategory::from_id(1), Some(EntityCategory::Individual));
        assert_eq!(EntityCategory::from_id(7), None);
        assert_eq!(
            EntityCategory::from_code("CORPORATE"),
            Some(EntityCategory::Corporate)
        );
        assert_eq!(EntityCategory::from_code("NGO"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityCategory::Individual.to_string(), "INDIVIDUAL");
    }
}
