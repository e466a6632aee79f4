//! Value Objects
//!
//! Closed enumerations with explicit string and numeric lookup tables.
//! External representations arrive as strings; `from_code` is the single
//! parsing path and unknown values are rejected by the caller, never panic.

pub mod account_status;
pub mod account_type;
pub mod entity_category;
pub mod entity_status;
pub mod entity_type;
pub mod risk_level;

pub use account_status::AccountStatus;
pub use account_type::AccountType;
pub use entity_category::EntityCategory;
pub use entity_status::EntityStatus;
pub use entity_type::EntityType;
pub use risk_level::RiskLevel;
