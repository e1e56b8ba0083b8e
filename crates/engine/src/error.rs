//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`MissingField`] thrown when a required input is absent or blank.
//! - [`InvalidCredentials`] thrown when an email/password pair does not match.
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`ExistingKey`] thrown when a unique value is already taken.
//! - [`InvalidRecord`] thrown when a stored row breaks a model invariant.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidCredentials`]: EngineError::InvalidCredentials
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidRecord`]: EngineError::InvalidRecord
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} is required")]
    MissingField(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
