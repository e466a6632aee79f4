//! Domain layer

pub mod checker;
pub mod entity;
pub mod record;
pub mod repository;
pub mod validator;
pub mod value_object;
