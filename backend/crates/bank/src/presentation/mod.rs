//! Presentation layer

pub mod dto;
pub mod handlers;
pub mod reports;
pub mod router;

pub use router::{
    accounts_router, accounts_router_generic, entities_router, entities_router_generic,
    reports_router,
};
